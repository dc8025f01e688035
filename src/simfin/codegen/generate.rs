use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::simfin::codegen::error::{Result, ToolError};
use crate::simfin::codegen::io::{fetch, output};
use crate::simfin::codegen::model::DuplicateReport;
use crate::simfin::codegen::reconcile::{aggregate, parse_records};
use crate::simfin::codegen::render::{DEFAULT_HEADER, render_document};

/// Where the columns document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Download from the given URL.
    Url(String),
    /// Read a previously saved copy from disk.
    File(PathBuf),
}

impl Source {
    /// Source pointing at the columns resource below `base_url`.
    pub fn columns(base_url: &str) -> Self {
        Source::Url(fetch::info_url(base_url, fetch::COLUMNS_RESOURCE))
    }

    fn load(&self) -> Result<Value> {
        match self {
            Source::Url(url) => fetch::fetch_json(url),
            Source::File(path) => fetch::read_json(path),
        }
    }
}

/// Settings for a single generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub source: Source,
    pub output: PathBuf,
    /// Replacement for [`DEFAULT_HEADER`].
    pub header: Option<PathBuf>,
    /// Fail instead of warn when a shortcut maps to more than one record.
    pub deny_duplicate_shortcuts: bool,
}

impl GenerateConfig {
    pub fn new(source: Source, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output: output.into(),
            header: None,
            deny_duplicate_shortcuts: false,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub record_count: usize,
    pub group_count: usize,
    pub duplicates: DuplicateReport,
}

/// Loads the columns document and writes the generated module.
#[instrument(
    level = "info",
    skip_all,
    fields(source = ?config.source, output = %config.output.display())
)]
pub fn generate(config: &GenerateConfig) -> Result<GenerateSummary> {
    let document = config.source.load()?;
    let header = match &config.header {
        Some(path) => load_header(path)?,
        None => DEFAULT_HEADER.to_string(),
    };
    generate_from_value(&document, &header, config)
}

/// Runs the pipeline on an already loaded document.
pub fn generate_from_value(
    document: &Value,
    header: &str,
    config: &GenerateConfig,
) -> Result<GenerateSummary> {
    let records = parse_records(document)?;
    info!(record_count = records.len(), "parsed column records");

    let aggregation = aggregate(&records);
    let duplicates = DuplicateReport::from_aggregation(&aggregation);
    if !duplicates.names.is_empty() {
        debug!(count = duplicates.names.len(), "names merged across records");
    }
    if !duplicates.shortcuts.is_empty() {
        warn!(count = duplicates.shortcuts.len(), "duplicate shortcuts found");
        if config.deny_duplicate_shortcuts {
            return Err(ToolError::DuplicateShortcuts {
                count: duplicates.shortcuts.len(),
            });
        }
    }

    let rendered = render_document(header, &aggregation.groups);
    output::write_atomic(&config.output, &rendered)?;
    info!(group_count = aggregation.groups.len(), "names module written");

    Ok(GenerateSummary {
        output: config.output.clone(),
        record_count: records.len(),
        group_count: aggregation.groups.len(),
        duplicates,
    })
}

fn load_header(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
