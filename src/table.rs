//! Normalized score table model.
//!
//! Converts the raw JSON shape into validated per-topic cell rows. Each
//! row starts with the topic name, followed by one cell per declared
//! score: the score label when the topic has a question with that score,
//! the empty string otherwise.

use std::collections::HashSet;

use crate::error::TableroError;
use crate::schema::RawTable;

/// A validated, normalized score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Topic names, in input order.
    pub topics: Vec<String>,
    /// Declared score labels, in input order.
    pub scores: Vec<String>,
    /// One cell row per topic; every row has `scores.len() + 1` cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Validate and normalize a parsed input document.
    ///
    /// Fails when a question references a score value that is not in the
    /// declared score list. Duplicate question values within a topic are
    /// allowed (a topic either has a question at a score or it doesn't).
    pub fn from_raw(raw: &RawTable) -> Result<Self, TableroError> {
        let scores: Vec<String> = raw.scores.iter().map(|v| v.coerce()).collect();

        let mut topics = Vec::with_capacity(raw.data.len());
        let mut rows = Vec::with_capacity(raw.data.len());

        for topic in &raw.data {
            let mut present = HashSet::new();
            for value in &topic.questions {
                let score = value.coerce();
                if !scores.contains(&score) {
                    return Err(TableroError::Validation {
                        topic: topic.name.clone(),
                        score,
                    });
                }
                present.insert(score);
            }

            let mut row = Vec::with_capacity(scores.len() + 1);
            row.push(topic.name.clone());
            for score in &scores {
                if present.contains(score) {
                    row.push(score.clone());
                } else {
                    row.push(String::new());
                }
            }

            topics.push(topic.name.clone());
            rows.push(row);
        }

        Ok(Table {
            topics,
            scores,
            rows,
        })
    }
}
