// src/config/columns.rs

/// FARS columns carried into the combined extract, in output order.
pub static DEFAULT_TARGET_COLUMNS: &[&str] = &[
    "STATENAME",
    "ST_CASE",
    "HOURNAME",
    "LATITUDENAME",
    "LONGITUDNAME",
    "WEATHERNAME",
    "LGT_CONDNAME",
    "VSURCONDNAME",
    "VISIONNAME",
    "PER_NO",
    "FATALS",
    "VSPD_LIMNAME",
    "DRIMPAIR",
    "DRIMPAIRNAME",
    "TRAV_SPNAME",
    "INJ_SEVNAME",
    "HARM_EVNAME",
];

/// Display name for every default target column.
pub static DEFAULT_COLUMN_NAMES: &[(&str, &str)] = &[
    ("STATENAME", "State"),
    ("ST_CASE", "Case Number"),
    ("HOURNAME", "Hour"),
    ("LATITUDENAME", "Latitude"),
    ("LONGITUDNAME", "Longitude"),
    ("WEATHERNAME", "Weather Condition"),
    ("LGT_CONDNAME", "Light Condition"),
    ("VSURCONDNAME", "Surface Condition"),
    ("VISIONNAME", "Vision Condition"),
    ("PER_NO", "Person Number"),
    ("FATALS", "# of Fatalities"),
    ("VSPD_LIMNAME", "Speed Limit"),
    ("DRIMPAIR", "Impairment #"),
    ("DRIMPAIRNAME", "Impairment Name"),
    ("TRAV_SPNAME", "Travel Speed"),
    ("INJ_SEVNAME", "Injury Severity"),
    ("HARM_EVNAME", "Harm Event"),
];

/// Strict UTF-8 first, then windows-1252 for legacy single-byte exports.
/// `encoding_rs` treats `iso-8859-1`/`latin1` as windows-1252 too, so 0x80-0x9F
/// come out as typographic characters (`0x80` is `€`), and windows-1252 never
/// fails to decode.
pub static DEFAULT_ENCODINGS: &[&str] = &["utf-8", "windows-1252"];

pub const DEFAULT_IMPAIRMENT_COLUMN: &str = "DRIMPAIR";
pub static DEFAULT_KEY_COLUMNS: &[&str] = &["STATENAME", "ST_CASE"];

pub const DEFAULT_INPUT_DIR: &str = "FARS2022NationalCSV";
pub const DEFAULT_OUTPUT_FILE: &str = "2022combindD1D2.csv";
