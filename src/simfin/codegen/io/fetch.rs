use std::fs;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::simfin::codegen::error::{Result, ToolError};

/// Base URL of the SimFin bulk-info endpoints.
pub const DEFAULT_INFO_BASE_URL: &str = "https://simfin.com/api/bulk/info";

/// Name of the info resource that lists every data-column.
pub const COLUMNS_RESOURCE: &str = "columns";

const USER_AGENT: &str = concat!("simfin-names/", env!("CARGO_PKG_VERSION"));

/// Builds the URL of an info resource below `base_url`.
pub fn info_url(base_url: &str, resource: &str) -> String {
    format!("{}/{resource}", base_url.trim_end_matches('/'))
}

/// Downloads and decodes a JSON document. No retries: any transport or
/// decoding failure is returned as is.
#[instrument(level = "info", skip_all, fields(url = %url))]
pub fn fetch_json(url: &str) -> Result<Value> {
    let response = ureq::get(url)
        .set("Accept", "application/json")
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|err| ToolError::Http {
            url: url.to_string(),
            message: err.to_string(),
        })?;

    debug!(status = response.status(), "received response");
    let document = serde_json::from_reader(BufReader::new(response.into_reader()))?;
    Ok(document)
}

/// Reads a JSON document from disk.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}
