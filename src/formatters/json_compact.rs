use anyhow::{Context, Result};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::ServiceGraph;

#[derive(Debug, Serialize)]
struct CompactGraph<'a> {
    meta: Meta,
    nodes: Vec<CompactNode<'a>>,
    /// `[source_index, target_index]` into `nodes`
    edges: Vec<[usize; 2]>,
}

#[derive(Debug, Serialize)]
struct Meta {
    services: usize,
    edges: usize,
}

#[derive(Debug, Serialize)]
struct CompactNode<'a> {
    id: String,
    name: &'a str,
}

/// Compact JSON rendering of the service graph for scripts and tooling
pub struct JsonCompactFormatter;

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, graph: &ServiceGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &ServiceGraph) -> Result<String> {
        let output = CompactGraph {
            meta: Meta {
                services: graph.node_count(),
                edges: graph.edge_count(),
            },
            nodes: graph
                .node_weights()
                .map(|node| CompactNode {
                    id: node.dot_id(),
                    name: &node.name,
                })
                .collect(),
            edges: graph
                .edge_references()
                .map(|edge| [edge.source().index(), edge.target().index()])
                .collect(),
        };

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
