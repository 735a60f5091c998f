use anyhow::Result;
use tracing::{debug, info};

use super::config::MapConfig;
use super::graph::DependencyMap;
use super::scanner::FileScanner;
use crate::parsers::{ImportParser, ParserFactory};

/// Drives enumeration, name extraction and import parsing over one services directory
pub struct ServiceAnalyzer {
    config: MapConfig,
    file_scanner: FileScanner,
    parser: Box<dyn ImportParser>,
}

impl ServiceAnalyzer {
    pub fn new(config: MapConfig) -> Result<Self> {
        let file_scanner = FileScanner::from_config(&config);
        let parser = ParserFactory::new().get_parser(&config.extension)?;
        Ok(Self {
            config,
            file_scanner,
            parser,
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Map every service to the raw names of the local modules it imports.
    ///
    /// The first unreadable directory or file aborts the whole run.
    pub fn analyze(&self) -> Result<DependencyMap> {
        let services_dir = &self.config.services_dir;
        info!(dir = %services_dir.display(), "scanning services");
        let files = self.file_scanner.scan_directory(services_dir)?;
        info!(count = files.len(), "found service files");

        let mut deps = DependencyMap::new();
        for file in files {
            let path = self.config.service_path(&file.service);
            let dependencies = self.parser.parse_file(&path)?;
            debug!(
                service = %file.service,
                parser = self.parser.language_name(),
                imports = dependencies.len(),
                "parsed service"
            );
            deps.insert(file.service, dependencies);
        }

        Ok(deps)
    }
}
