pub mod dot;
pub mod json_compact;

pub use dot::DotFormatter;
pub use json_compact::JsonCompactFormatter;

use anyhow::Result;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

use crate::core::ServiceGraph;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Dot,
    JsonCompact,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::JsonCompact => "json-compact",
        }
    }

    /// File actually written for `requested`: JSON output always gets a `.json` extension
    pub fn output_path(self, requested: &Path) -> PathBuf {
        match self {
            OutputFormat::Dot => requested.to_path_buf(),
            OutputFormat::JsonCompact => requested.with_extension("json"),
        }
    }

    /// Render `graph` and write it, returning the path written
    pub fn write(self, graph: &ServiceGraph, requested: &Path) -> Result<PathBuf> {
        let path = self.output_path(requested);
        match self {
            OutputFormat::Dot => DotFormatter::new().format_to_file(graph, &path)?,
            OutputFormat::JsonCompact => JsonCompactFormatter::new().format_to_file(graph, &path)?,
        }
        Ok(path)
    }
}
