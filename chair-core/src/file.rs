use std::{
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::debug;

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file in the destination directory which is
/// then renamed over `path`, so readers never observe a partially written
/// file. The parent directory must already exist.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;

    debug!(path = %path.display(), bytes = content.len(), "persisting file");
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
