pub mod analyzer;
pub mod config;
pub mod graph;
pub mod scanner;

pub use analyzer::ServiceAnalyzer;
pub use config::MapConfig;
pub use graph::{DependencyMap, GraphBuilder, ServiceGraph, ServiceNode};
pub use scanner::FileScanner;
