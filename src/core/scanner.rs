use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use super::config::MapConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFile {
    pub file_name: String,
    pub service: String,
}

pub struct FileScanner {
    extension: String,
    test_suffix: String,
    sorted: bool,
}

impl FileScanner {
    pub fn new(extension: &str, test_suffix: &str) -> Self {
        Self {
            extension: extension.to_string(),
            test_suffix: test_suffix.to_string(),
            sorted: false,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(&config.extension, &config.test_suffix).with_sorted(config.sorted)
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// List service files directly inside `dir`, skipping test files.
    ///
    /// Order follows the directory listing unless sorting is enabled.
    pub fn scan_directory(&self, dir: &Path) -> Result<Vec<ServiceFile>> {
        let metadata = fs::metadata(dir)
            .with_context(|| format!("Failed to read services directory {}", dir.display()))?;
        if !metadata.is_dir() {
            bail!("Services path {} is not a directory", dir.display());
        }

        let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to list services directory {}", dir.display()))?;
            let path = entry.path();
            let Some(file_name) = entry.file_name().to_str() else {
                debug!(path = %path.display(), "skipping non UTF-8 file name");
                continue;
            };

            if !self.is_service_file(file_name) {
                continue;
            }

            // Symlinks are resolved here, so a dangling one fails the scan
            let metadata = fs::metadata(path)
                .with_context(|| format!("Failed to read service file {}", path.display()))?;
            if !metadata.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }

            if let Some(service) = service_name(file_name, &self.extension) {
                files.push(ServiceFile {
                    file_name: file_name.to_string(),
                    service: service.to_string(),
                });
            }
        }

        Ok(files)
    }

    pub fn is_service_file(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension) && !file_name.ends_with(&self.test_suffix)
    }
}

/// Service name for `file_name`: the name with one trailing `extension` removed
pub fn service_name<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    file_name.strip_suffix(extension)
}
