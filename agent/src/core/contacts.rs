//! Contact records and their canonical sort order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// One contact record.
///
/// `first_name` and `last_name` are required; a record missing either fails
/// to decode. Any other fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Sort contacts by (last name, first name), ordinal string comparison.
///
/// The sort is stable: records comparing equal keep their input order.
pub fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
}

/// Serialize contacts as a JSON array with 4-space indentation.
pub fn to_pretty_json(contacts: &[Contact]) -> Result<String> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    contacts
        .serialize(&mut serializer)
        .context("serialize contacts")?;
    String::from_utf8(buf).context("contacts serialized as invalid utf-8")
}
