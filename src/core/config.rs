use std::path::PathBuf;

pub const DEFAULT_SERVICES_DIR: &str = "../../src/services";
pub const DEFAULT_OUTPUT: &str = "map.dot";
pub const DEFAULT_EXTENSION: &str = ".ts";
pub const DEFAULT_TEST_SUFFIX: &str = ".test.ts";

/// Immutable run configuration, built once at startup and handed to the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Directory holding the service files (not searched recursively)
    pub services_dir: PathBuf,
    /// File the rendered graph is written to
    pub output: PathBuf,
    /// Suffix identifying a service file, including the dot
    pub extension: String,
    /// Suffix identifying test files that must be skipped
    pub test_suffix: String,
    /// Sort the directory listing by file name for stable output
    pub sorted: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            services_dir: PathBuf::from(DEFAULT_SERVICES_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
            test_suffix: DEFAULT_TEST_SUFFIX.to_string(),
            sorted: false,
        }
    }
}

impl MapConfig {
    pub fn new(services_dir: impl Into<PathBuf>) -> Self {
        Self {
            services_dir: services_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_test_suffix(mut self, test_suffix: impl Into<String>) -> Self {
        self.test_suffix = test_suffix.into();
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Path of the source file backing `service`
    pub fn service_path(&self, service: &str) -> PathBuf {
        self.services_dir
            .join(format!("{}{}", service, self.extension))
    }
}
