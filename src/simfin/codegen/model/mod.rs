use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the columns document served by SimFin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Display name of the data-column, e.g. `Cash & Equivalents`.
    pub name: String,
    /// Shortcut identifiers aliasing the name, e.g. `["SHARE_PRICE", "CLOSE"]`.
    pub shortcuts: Vec<String>,
    /// Free-text description. Absent and `null` are treated alike.
    #[serde(default)]
    pub description: Option<String>,
}

impl InputRecord {
    /// Creates a record without a description.
    pub fn new<S>(name: impl Into<String>, shortcuts: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            shortcuts: shortcuts.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    /// Attaches a description to the record.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// All shortcuts and descriptions collected for a single name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameGroup {
    /// Every shortcut seen for the name, repeats included.
    pub shortcuts: Vec<String>,
    /// Non-empty descriptions in encounter order.
    pub descriptions: Vec<String>,
}

impl NameGroup {
    /// Folds a record's shortcuts and description into the group.
    pub fn absorb(&mut self, record: &InputRecord) {
        self.shortcuts.extend(record.shortcuts.iter().cloned());
        if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
            self.descriptions.push(description.to_string());
        }
    }
}

/// Outcome of a single aggregation pass over the input records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Name → merged group, ordered by name.
    pub groups: BTreeMap<String, NameGroup>,
    /// Every name in input order, one entry per record.
    pub all_names: Vec<String>,
    /// Every shortcut in input order, one entry per occurrence.
    pub all_shortcuts: Vec<String>,
}

/// Names and shortcuts that occurred more than once in the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    pub names: Vec<String>,
    pub shortcuts: Vec<String>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.shortcuts.is_empty()
    }
}
