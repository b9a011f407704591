mod models;
mod readings;

pub use models::{LINEAR_MODEL_JSON, STUMP_MODEL_JSON, write_model};
pub use readings::{readings_with, sample_readings};
