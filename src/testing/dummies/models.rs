use std::io::Write;

use tempfile::NamedTempFile;

/// Predicts failure whenever `Temperature` exceeds `tempMode`.
pub const STUMP_MODEL_JSON: &str = r#"{
    "kind": "tree",
    "nodes": [
        {"split": {"column": "temp_diff", "threshold": 0.0, "left": 1, "right": 2}},
        {"leaf": {"class": 0}},
        {"leaf": {"class": 1}}
    ]
}"#;

/// Logistic model driven by `temp_diff` with the schema names attached.
pub const LINEAR_MODEL_JSON: &str = r#"{
    "kind": "linear",
    "feature_names": ["footfall", "tempMode", "AQ", "USS", "CS", "VOC", "RP", "IP",
                      "Temperature", "temp_diff", "RP_Avg"],
    "weights": [0, 0, 0, 0, 0, 0, 0, 0, 0, 2.5, 0],
    "intercept": -1.0
}"#;

pub fn write_model(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp model file");
    file.write_all(contents.as_bytes())
        .expect("write temp model file");
    file
}
