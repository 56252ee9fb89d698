//! Typed operations decoded from a model reply.
//!
//! The completion service answers with a JSON object of the shape
//! `{"operation": "<name>", "parameters": {...}}`. Rather than branching on
//! the raw string throughout the code, the reply is decoded once at this
//! boundary into a closed [`Operation`] enum; downstream dispatch matches
//! exhaustively, so adding an operation is a compile-time-checked change.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

/// Parameters for counting weekday occurrences in a date list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeekdayCountParams {
    pub file_path: String,
    pub weekday_name: String,
    pub output_path: String,
}

/// Parameters for sorting a contact list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactSortParams {
    pub input_path: String,
    pub output_path: String,
}

/// A fully-decoded operation request.
///
/// This is a closed set: any operation name outside these variants is
/// rejected by [`Operation::from_reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CountWeekdays(WeekdayCountParams),
    SortContacts(ContactSortParams),
}

impl Operation {
    /// Operation name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CountWeekdays(_) => "count_weekdays",
            Operation::SortContacts(_) => "sort_contacts",
        }
    }

    /// Decode a parsed model reply into a typed operation.
    ///
    /// Reads the `operation` field (absent → unsupported) and the
    /// `parameters` object (absent → empty, so required parameters surface
    /// as decode errors). Parameter validation happens here, before any
    /// filesystem access.
    pub fn from_reply(reply: &Value) -> Result<Operation> {
        let name = reply.get("operation").and_then(Value::as_str);
        let params = reply
            .get("parameters")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        match name {
            Some("count_weekdays") => {
                let params: WeekdayCountParams = serde_json::from_value(params)
                    .context("invalid count_weekdays parameters")?;
                Ok(Operation::CountWeekdays(params))
            }
            Some("sort_contacts") => {
                let params: ContactSortParams =
                    serde_json::from_value(params).context("invalid sort_contacts parameters")?;
                Ok(Operation::SortContacts(params))
            }
            _ => bail!("Unsupported operation"),
        }
    }
}
