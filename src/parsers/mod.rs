pub mod common;
pub mod typescript;

use anyhow::Result;
use std::path::Path;

/// Extracts the names of sibling services a source file imports
pub trait ImportParser {
    /// Dependencies named by local imports in `source`, in source order, duplicates kept
    fn parse_source(&self, source: &str) -> Vec<String>;

    fn parse_file(&self, file_path: &Path) -> Result<Vec<String>> {
        let source = common::read_source(file_path)?;
        Ok(self.parse_source(&source))
    }

    fn language_name(&self) -> &str;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    /// Parser for service files ending in `extension`
    pub fn get_parser(&self, extension: &str) -> Result<Box<dyn ImportParser>> {
        match extension.trim_start_matches('.') {
            "ts" | "tsx" | "js" | "jsx" | "mjs" => Ok(Box::new(
                typescript::TypeScriptImportParser::new(extension)?,
            )),
            _ => anyhow::bail!("Unsupported service extension: {}", extension),
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
