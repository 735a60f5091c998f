use md5::{Digest, Md5};
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    Directed, Graph,
};
use std::collections::HashMap;
use tracing::warn;

/// Length of the hex digest prefix used as a node hash
pub const NODE_HASH_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNode {
    pub name: String,
    pub hash: String,
}

impl ServiceNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hash: node_hash(name),
        }
    }

    /// Graphviz identifier; IDs may not start with a digit, hence the prefix
    pub fn dot_id(&self) -> String {
        format!("_{}", self.hash)
    }
}

/// Services as nodes; an edge `a -> b` means `a` imports `b`
pub type ServiceGraph = Graph<ServiceNode, (), Directed>;

/// First eight hex characters of the MD5 digest of `name`
pub fn node_hash(name: &str) -> String {
    let digest = Md5::digest(name.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(NODE_HASH_LEN);
    hex
}

/// Services in first-seen order, each with its raw dependency names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `service` with its dependencies, replacing an earlier entry in place
    pub fn insert(&mut self, service: String, dependencies: Vec<String>) {
        match self.index.get(&service) {
            Some(&position) => self.entries[position].1 = dependencies,
            None => {
                self.index.insert(service.clone(), self.entries.len());
                self.entries.push((service, dependencies));
            }
        }
    }

    pub fn get(&self, service: &str) -> Option<&[String]> {
        let &position = self.index.get(service)?;
        Some(self.entries[position].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (service, deps) in iter {
            map.insert(service, deps);
        }
        map
    }
}

pub struct GraphBuilder {
    graph: ServiceGraph,
    node_map: HashMap<String, NodeIndex>,
    hash_owners: HashMap<String, String>,
    collisions: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            hash_owners: HashMap::new(),
            collisions: Vec::new(),
        }
    }

    /// Build the graph for `deps`: every service first, then edges between known services.
    pub fn from_dependency_map(deps: &DependencyMap) -> ServiceGraph {
        let mut builder = Self::new();
        for service in deps.services() {
            builder.add_service(service);
        }
        for (service, dependencies) in deps.iter() {
            for dependency in dependencies {
                builder.add_dependency(service, dependency);
            }
        }
        builder.build()
    }

    pub fn add_service(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            return index;
        }

        let node = ServiceNode::new(name);
        match self.hash_owners.get(&node.hash) {
            Some(owner) => {
                warn!(
                    hash = %node.hash,
                    first = %owner,
                    second = %name,
                    "node hash collision; both services share one graph id"
                );
                self.collisions.push((owner.clone(), name.to_string()));
            }
            None => {
                self.hash_owners.insert(node.hash.clone(), name.to_string());
            }
        }

        let index = self.graph.add_node(node);
        self.node_map.insert(name.to_string(), index);
        index
    }

    /// Add `source -> target`; `None` when either end is not a known service.
    pub fn add_dependency(&mut self, source: &str, target: &str) -> Option<EdgeIndex> {
        let source_idx = *self.node_map.get(source)?;
        let target_idx = *self.node_map.get(target)?;
        Some(self.graph.add_edge(source_idx, target_idx, ()))
    }

    pub fn get_node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    /// `(first, second)` service pairs whose node hashes coincide
    pub fn collisions(&self) -> &[(String, String)] {
        &self.collisions
    }

    pub fn build(self) -> ServiceGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
