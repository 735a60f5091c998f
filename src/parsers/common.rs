use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read the whole file, buffering at most 8 KiB at a time
pub fn read_source(file_path: &Path) -> Result<String> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;
    let file_size = file
        .metadata()
        .with_context(|| format!("Failed to read {}", file_path.display()))?
        .len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = String::with_capacity(file_size);
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    Ok(content)
}

/// Drop one trailing `extension` from an import path, if present
pub fn strip_extension<'a>(import_path: &'a str, extension: &str) -> &'a str {
    import_path.strip_suffix(extension).unwrap_or(import_path)
}
