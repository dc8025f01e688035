use std::collections::HashSet;
use std::hash::Hash;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::simfin::codegen::error::{Result, ToolError};
use crate::simfin::codegen::model::{Aggregation, DuplicateReport, InputRecord, NameGroup};

/// Parses the columns document into typed records.
///
/// The document must be a JSON array. Every element is validated up front so
/// a single malformed record aborts the run before anything is rendered.
pub fn parse_records(document: &Value) -> Result<Vec<InputRecord>> {
    let Value::Array(items) = document else {
        return Err(ToolError::UnexpectedShape(format!(
            "expected an array of column records, found {}",
            json_kind(document)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            InputRecord::deserialize(item)
                .map_err(|source| ToolError::InvalidRecord { index, source })
        })
        .collect()
}

/// Groups records by name, keeping every name and shortcut occurrence for
/// duplicate detection.
pub fn aggregate<'a, I>(records: I) -> Aggregation
where
    I: IntoIterator<Item = &'a InputRecord>,
{
    let mut aggregation = Aggregation::default();

    for record in records {
        aggregation.all_names.push(record.name.clone());
        aggregation
            .all_shortcuts
            .extend(record.shortcuts.iter().cloned());
        aggregation
            .groups
            .entry(record.name.clone())
            .or_insert_with(NameGroup::default)
            .absorb(record);
    }

    debug!(
        records = aggregation.all_names.len(),
        groups = aggregation.groups.len(),
        "aggregated column records"
    );
    aggregation
}

/// Returns every element that is not the first occurrence of its value, in
/// input order. A value seen `k` times yields `k - 1` entries.
pub fn find_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| !seen.insert(*item))
        .cloned()
        .collect()
}

impl DuplicateReport {
    /// Computes duplicates from the raw name and shortcut lists.
    pub fn from_aggregation(aggregation: &Aggregation) -> Self {
        Self {
            names: find_duplicates(&aggregation.all_names),
            shortcuts: find_duplicates(&aggregation.all_shortcuts),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
