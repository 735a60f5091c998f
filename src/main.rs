use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use service_map::core::config::{
    DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_SERVICES_DIR, DEFAULT_TEST_SUFFIX,
};
use service_map::core::{GraphBuilder, MapConfig, ServiceAnalyzer};
use service_map::formatters::OutputFormat;
use service_map::logging;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "service-map",
    version,
    about = "Render local service imports as a Graphviz dependency map"
)]
struct Cli {
    /// Directory containing the service files
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_SERVICES_DIR)]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Service file extension
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Suffix of test files to skip
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_TEST_SUFFIX)]
    test_suffix: String,

    /// Sort services by file name instead of directory order
    #[arg(long)]
    sorted: bool,

    /// Output format: dot, json-compact
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        extension,
        test_suffix,
        sorted,
        format,
        verbose: _,
    } = cli;

    let start_time = Instant::now();

    let config = MapConfig::new(input)
        .with_output(output)
        .with_extension(extension)
        .with_test_suffix(test_suffix)
        .with_sorted(sorted);

    info!(
        input = %config.services_dir.display(),
        output = %config.output.display(),
        format = format.as_str(),
        "service-map"
    );

    let analyzer = ServiceAnalyzer::new(config)?;
    let deps = analyzer.analyze()?;

    info!("building dependency graph");
    let graph = GraphBuilder::from_dependency_map(&deps);
    info!(
        services = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    let generated_output = format.write(&graph, &analyzer.config().output)?;

    info!(
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "done"
    );
    println!("Generated {}", generated_output.display());

    Ok(())
}
