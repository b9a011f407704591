pub mod drivers;
pub mod form;

pub use form::{prompt_readings, render_status, run_form};
