use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::simfin::codegen::error::Result;

/// Writes `contents` to `path` through a temporary file in the same
/// directory, so readers never observe a half-written module.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "output persisted");
    Ok(())
}
