//! Builders for hand-written resolve reports used by unit tests.

use ivyscan_core::coordinate::{ModuleCoordinate, ModuleRevisionId};
use ivyscan_core::report::{DependencyNode, ResolveReport};

pub fn coord(s: &str) -> ModuleCoordinate {
    ModuleCoordinate::parse(s).expect("test coordinate")
}

pub fn id(s: &str) -> ModuleRevisionId {
    let parts: Vec<&str> = s.split(':').collect();
    assert_eq!(parts.len(), 3, "test id {s}");
    ModuleRevisionId::new(parts[0], parts[1], parts[2])
}

pub struct NodeBuilder {
    node: DependencyNode,
}

pub fn node(s: &str) -> NodeBuilder {
    NodeBuilder {
        node: DependencyNode::new(id(s)),
    }
}

impl NodeBuilder {
    pub fn caller(mut self, s: &str) -> Self {
        self.node.callers.push(id(s));
        self
    }

    pub fn conf(mut self, root_conf: &str, confs: &[&str]) -> Self {
        self.node.configurations.insert(
            root_conf.to_string(),
            confs.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn extra(mut self, key: &str, value: &str) -> Self {
        self.node.id = self.node.id.with_extra(key, value);
        self
    }

    pub fn evicted(mut self) -> Self {
        self.node.completely_evicted = true;
        self
    }

    pub fn problem(mut self) -> Self {
        self.node.has_problem = true;
        self
    }

    pub fn build(self) -> DependencyNode {
        self.node
    }
}

pub fn report(root: &str, confs: &[&str], nodes: Vec<DependencyNode>) -> ResolveReport {
    ResolveReport {
        resolve_id: None,
        module: id(root),
        configurations: confs.iter().map(|s| s.to_string()).collect(),
        dependencies: nodes,
        unresolved: Vec::new(),
    }
}
