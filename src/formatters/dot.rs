use anyhow::{Context, Result};
use petgraph::visit::EdgeRef;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::ServiceGraph;

/// Rendering directives emitted once, before any node
pub const GRAPH_SETTINGS: &str = r#"
    rankdir=LR;
    overlap=false;
    splines=true;
    node [shape=box, style="rounded,filled", fillcolor=lightblue, fontname="Arial"];
    edge [fontname="Arial", fontsize=10];
"#;

/// Graphviz renderer: hashed ids as node names, service names as labels
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Overwrite `output_path` with the rendered graph
    pub fn format_to_file(&self, graph: &ServiceGraph, output_path: &Path) -> Result<()> {
        let content = self.format_graph(graph);
        fs::write(output_path, content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &ServiceGraph) -> String {
        let mut out = String::with_capacity(256 + graph.node_count() * 40);
        out.push_str("digraph G {\n");
        out.push_str(GRAPH_SETTINGS);

        for node in graph.node_weights() {
            let _ = writeln!(
                out,
                "    {} [label=\"{}\"];",
                node.dot_id(),
                escape_label(&node.name)
            );
        }

        for edge in graph.edge_references() {
            let source = &graph[edge.source()];
            let target = &graph[edge.target()];
            let _ = writeln!(out, "    {} -> {}", source.dot_id(), target.dot_id());
        }

        out.push('}');
        out
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
