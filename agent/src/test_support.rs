//! Test-only helpers: guarded temp directories and scripted completions.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tempfile::TempDir;

use crate::core::operation::{ContactSortParams, Operation, WeekdayCountParams};
use crate::interpreter::Completions;
use crate::io::paths::PathGuard;

/// Create a temp directory plus a guard rooted at it.
pub fn guarded_tempdir() -> (TempDir, PathGuard) {
    let temp = TempDir::new().expect("tempdir");
    let guard = PathGuard::new(temp.path().display().to_string());
    (temp, guard)
}

/// Build a `count_weekdays` operation from string paths.
pub fn weekday_count(file_path: &str, weekday_name: &str, output_path: &str) -> Operation {
    Operation::CountWeekdays(WeekdayCountParams {
        file_path: file_path.to_string(),
        weekday_name: weekday_name.to_string(),
        output_path: output_path.to_string(),
    })
}

/// Build a `sort_contacts` operation from string paths.
pub fn contact_sort(input_path: &str, output_path: &str) -> Operation {
    Operation::SortContacts(ContactSortParams {
        input_path: input_path.to_string(),
        output_path: output_path.to_string(),
    })
}

/// Completions backend that always answers with the same canned reply.
pub struct StaticCompletions {
    reply: String,
}

impl StaticCompletions {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Completions for StaticCompletions {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

/// Completions backend that always fails, for exercising the error path.
pub struct FailingCompletions;

#[async_trait]
impl Completions for FailingCompletions {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        bail!("completion service unavailable")
    }
}
