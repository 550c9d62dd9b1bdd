//! JSON schema types for the score table input.
//!
//! The input document declares the valid score values and a list of topic
//! rows. Score values may arrive as JSON strings or numbers; both coerce
//! to a canonical trimmed string form before any further processing.

use serde::Deserialize;

/// Top-level JSON document.
#[derive(Debug, Deserialize)]
pub struct RawTable {
    /// Ordered list of valid score values (the column keys).
    pub scores: Vec<RawValue>,
    /// Topic rows.
    pub data: Vec<RawTopic>,
}

/// A single topic row in the input.
#[derive(Debug, Deserialize)]
pub struct RawTopic {
    /// Topic name, shown in the leftmost column.
    pub name: String,
    /// Score values of this topic's questions.
    pub questions: Vec<RawValue>,
}

/// A score value: accepts a JSON string or number.
///
/// Variant order matters for untagged deserialization: integers must be
/// tried before floats so `100` keeps its integer string form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl RawValue {
    /// Canonical string form: numbers in decimal, strings trimmed.
    pub fn coerce(&self) -> String {
        match self {
            RawValue::Text(s) => s.trim().to_string(),
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(n) => n.to_string(),
        }
    }
}
