//! Execute a decoded operation against the guarded filesystem.
//!
//! Every path in an operation's parameters is checked against the
//! [`PathGuard`] before any file is touched. Output files are overwritten
//! whole; a failure after a write has started is not rolled back.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::contacts::{self, Contact};
use crate::core::operation::{ContactSortParams, Operation, WeekdayCountParams};
use crate::core::weekdays;
use crate::io::paths::PathGuard;

/// Run one operation and return its human-readable confirmation message.
pub fn execute(guard: &PathGuard, operation: &Operation) -> Result<String> {
    info!(operation = operation.name(), "executing operation");
    match operation {
        Operation::CountWeekdays(params) => count_weekdays(guard, params),
        Operation::SortContacts(params) => sort_contacts(guard, params),
    }
}

fn count_weekdays(guard: &PathGuard, params: &WeekdayCountParams) -> Result<String> {
    guard.ensure(&params.file_path)?;
    guard.ensure(&params.output_path)?;

    let text = fs::read_to_string(&params.file_path)
        .with_context(|| format!("read {}", params.file_path))?;
    let count = weekdays::count_matching_lines(&text, &params.weekday_name);

    fs::write(&params.output_path, count.to_string())
        .with_context(|| format!("write {}", params.output_path))?;

    Ok(format!("Counted {count} {}s", params.weekday_name))
}

fn sort_contacts(guard: &PathGuard, params: &ContactSortParams) -> Result<String> {
    guard.ensure(&params.input_path)?;
    guard.ensure(&params.output_path)?;

    let raw = fs::read_to_string(&params.input_path)
        .with_context(|| format!("read {}", params.input_path))?;
    let mut contacts: Vec<Contact> =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", params.input_path))?;

    contacts::sort_contacts(&mut contacts);
    let payload = contacts::to_pretty_json(&contacts)?;

    fs::write(&params.output_path, payload)
        .with_context(|| format!("write {}", params.output_path))?;

    Ok("Sorted contacts successfully".to_string())
}
