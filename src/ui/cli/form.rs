use std::io::Write;

use anyhow::{Context, Result};
use strum::IntoEnumIterator;

use crate::core::{InputField, RawReadingSet};
use crate::inference::{ModelSource, Severity, StatusLine, submit};
use crate::ui::cli::drivers::PromptDriver;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const ORANGE: &str = "\x1b[38;5;208m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Red => RED,
        Severity::Green => GREEN,
        Severity::Orange => ORANGE,
    }
}

/// Asks for each reading in form order. Blank answers are kept as blank.
pub fn prompt_readings<D: PromptDriver>(driver: &D) -> Result<RawReadingSet> {
    let mut readings = RawReadingSet::default();
    for field in InputField::iter() {
        let answer = driver
            .ask_string(field.label(), field.identifier(), "")
            .with_context(|| format!("failed to read {}", field.identifier()))?;
        readings.set(field, answer);
    }
    Ok(readings)
}

pub fn render_status(line: &StatusLine) -> String {
    format!("{BOLD}{}{line}{RESET}", color_for(line.severity))
}

/// Interactive loop: prompt, submit, print, repeat while the user agrees.
///
/// Returns how many submissions were made.
pub fn run_form<D, S, W>(driver: &D, source: &S, out: &mut W) -> Result<usize>
where
    D: PromptDriver,
    S: ModelSource + ?Sized,
    W: Write,
{
    let mut submissions = 0;
    loop {
        let readings = prompt_readings(driver)?;
        let outcome = submit(&readings, source);
        submissions += 1;
        writeln!(out, "{}", render_status(&outcome.status_line()))?;

        if !driver.ask_bool("Submit another reading?", "Esc to quit", true)? {
            return Ok(submissions);
        }
    }
}
