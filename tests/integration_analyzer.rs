use service_map::core::{GraphBuilder, MapConfig, ServiceAnalyzer};
use service_map::formatters::{DotFormatter, OutputFormat};
use std::fs;
use std::path::Path;

const PREAMBLE: &str = "digraph G {\n
    rankdir=LR;
    overlap=false;
    splines=true;
    node [shape=box, style=\"rounded,filled\", fillcolor=lightblue, fontname=\"Arial\"];
    edge [fontname=\"Arial\", fontsize=10];
";

fn render(services_dir: &Path, output: &Path) -> String {
    let config = MapConfig::new(services_dir).with_output(output).with_sorted(true);
    let analyzer = ServiceAnalyzer::new(config).unwrap();
    let deps = analyzer.analyze().unwrap();
    let graph = GraphBuilder::from_dependency_map(&deps);
    DotFormatter::new().format_to_file(&graph, output).unwrap();
    fs::read_to_string(output).unwrap()
}

#[test]
fn analyzer_end_to_end_two_services() {
    let dir = tempfile::TempDir::new().unwrap();
    let services = dir.path().join("services");
    fs::create_dir_all(&services).unwrap();
    fs::write(services.join("a.ts"), "import {b} from './b'\n").unwrap();
    fs::write(services.join("b.ts"), "export const b = 1;\n").unwrap();

    let out = dir.path().join("map.dot");
    let s = render(&services, &out);

    let expected = format!(
        "{PREAMBLE}    _0cc175b9 [label=\"a\"];\n    _92eb5ffe [label=\"b\"];\n    _0cc175b9 -> _92eb5ffe\n}}"
    );
    assert_eq!(s, expected);
}

#[test]
fn analyzer_end_to_end_only_test_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let services = dir.path().join("services");
    fs::create_dir_all(&services).unwrap();
    fs::write(services.join("x.test.ts"), "import {a} from './a'\n").unwrap();

    let out = dir.path().join("map.dot");
    let s = render(&services, &out);

    assert_eq!(s, format!("{PREAMBLE}}}"));
    assert!(!s.contains("label="));
    assert!(!s.contains("->"));
}

#[test]
fn analyzer_keeps_raw_dependencies() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("orders.ts"),
        "import { A } from './users';\nimport B from './ghost.ts';\nimport C from 'lodash';\n",
    )
    .unwrap();
    fs::write(dir.path().join("users.ts"), "").unwrap();

    let analyzer = ServiceAnalyzer::new(MapConfig::new(dir.path()).with_sorted(true)).unwrap();
    let deps = analyzer.analyze().unwrap();

    assert_eq!(deps.len(), 2);
    assert_eq!(
        deps.get("orders").unwrap(),
        &["users".to_string(), "ghost".to_string()][..]
    );
    assert!(deps.get("users").unwrap().is_empty());
}

#[test]
fn output_is_overwritten() {
    let dir = tempfile::TempDir::new().unwrap();
    let services = dir.path().join("services");
    fs::create_dir_all(&services).unwrap();
    let out = dir.path().join("map.dot");
    fs::write(&out, "stale content that is longer than the new graph ".repeat(20)).unwrap();

    let s = render(&services, &out);
    assert!(s.starts_with("digraph G {"));
    assert!(s.ends_with('}'));
    assert!(!s.contains("stale"));
}

#[test]
fn missing_services_directory_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let analyzer = ServiceAnalyzer::new(MapConfig::new(dir.path().join("missing"))).unwrap();
    assert!(analyzer.analyze().is_err());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let graph = GraphBuilder::new().build();
    let out = dir.path().join("no_such_dir").join("map.dot");
    assert!(DotFormatter::new().format_to_file(&graph, &out).is_err());
}

#[test]
fn unreadable_service_file_aborts_analysis() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.ts"), "import {b} from './b'\n").unwrap();
    fs::write(dir.path().join("b.ts"), [0x69, 0x6d, 0xff, 0xfe, 0x70]).unwrap();

    let analyzer = ServiceAnalyzer::new(MapConfig::new(dir.path())).unwrap();
    assert!(analyzer.analyze().is_err());
}

#[test]
fn json_compact_output_is_written_with_json_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let services = dir.path().join("services");
    fs::create_dir_all(&services).unwrap();
    fs::write(services.join("a.ts"), "import {b} from './b'\n").unwrap();
    fs::write(services.join("b.ts"), "").unwrap();

    let analyzer = ServiceAnalyzer::new(MapConfig::new(&services).with_sorted(true)).unwrap();
    let graph = GraphBuilder::from_dependency_map(&analyzer.analyze().unwrap());

    let requested = dir.path().join("map.dot");
    let written = OutputFormat::JsonCompact.write(&graph, &requested).unwrap();

    assert_eq!(written, dir.path().join("map.json"));
    assert!(!requested.exists());
    let data = fs::read_to_string(&written).unwrap();
    assert!(data.starts_with("{\"meta\":{\"services\":2,\"edges\":1}"));
}
