//! Registry of parent coordinate -> child edges, built from the resolver's
//! flat node list.

use std::collections::{HashMap, HashSet};

use ivyscan_core::coordinate::{ModuleCoordinate, Normalize};
use ivyscan_core::report::{DependencyNode, ResolveReport};

use crate::classify::Classifier;

/// "`node` is required by `parent`", with the node's dev classification.
#[derive(Debug, Clone)]
pub struct DependencyEdge<'r> {
    pub node: &'r DependencyNode,
    /// `None` means required directly by the root.
    pub parent: Option<ModuleCoordinate>,
    pub is_dev: bool,
}

impl DependencyEdge<'_> {
    /// Normalized coordinate of the child node.
    pub fn coordinate(&self) -> ModuleCoordinate {
        self.node.id.normalize()
    }
}

/// Counters collected while building a [`Registry`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub edges: usize,
    pub evicted: usize,
    /// Nodes skipped because they share the root's organisation.
    pub first_party: usize,
    /// Unresolved ids outside the root's organisation.
    pub unresolved: usize,
}

/// Mapping from normalized coordinate to its child edges, in the order the
/// walk observed them.
///
/// Any coordinate used as a parent has an entry; lookups of unknown
/// coordinates return an empty slice.
#[derive(Debug, Default)]
pub struct Registry<'r> {
    entries: HashMap<ModuleCoordinate, Vec<DependencyEdge<'r>>>,
    stats: RegistryStats,
}

impl<'r> Registry<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every node of `report` and register its caller edges.
    pub fn build(report: &'r ResolveReport, classifier: &Classifier) -> Self {
        let mut registry = Self::new();
        let root_org = report.module.organisation_str();

        for unresolved in &report.unresolved {
            if !report.is_first_party(unresolved) {
                tracing::warn!(
                    "dependency {unresolved} could not be resolved and will not be reported"
                );
                registry.stats.unresolved += 1;
            }
        }

        for node in &report.dependencies {
            if report.is_first_party(&node.id) {
                tracing::warn!(
                    "dependency {} has organisation {root_org} and is considered custom code; \
                     if it is a third-party module, make its org/name/rev match its Maven GAV",
                    node.id
                );
                registry.stats.first_party += 1;
                continue;
            }
            registry.add_node(node, classifier);
        }

        tracing::debug!(
            "registry: {} entries, {} edges, {} evicted",
            registry.len(),
            registry.stats.edges,
            registry.stats.evicted
        );
        registry
    }

    fn add_node(&mut self, node: &'r DependencyNode, classifier: &Classifier) {
        self.register(node.id.normalize());
        let is_dev = classifier.is_dev(node);

        if node.completely_evicted {
            tracing::info!("ignoring evicted dependency {}", node.id);
            self.stats.evicted += 1;
        }

        let mut seen = HashSet::new();
        for caller in &node.callers {
            let parent = caller.normalize();
            if !seen.insert(parent.clone()) {
                continue;
            }
            if node.completely_evicted {
                tracing::info!(
                    "ignoring evicted dependency {} (transitive dependency of {parent})",
                    node.id
                );
                continue;
            }
            tracing::debug!("{parent} has transitive dependency {}", node.id);
            self.add_edge(
                parent.clone(),
                DependencyEdge {
                    node,
                    parent: Some(parent),
                    is_dev,
                },
            );
        }
    }

    /// Ensure `coord` has an entry, returning its edge list.
    pub fn register(&mut self, coord: ModuleCoordinate) -> &mut Vec<DependencyEdge<'r>> {
        self.entries.entry(coord).or_default()
    }

    /// Append `edge` to the edges of `parent`, registering it if needed.
    pub fn add_edge(&mut self, parent: ModuleCoordinate, edge: DependencyEdge<'r>) {
        self.register(parent).push(edge);
        self.stats.edges += 1;
    }

    /// Child edges of `coord`, in insertion order.
    pub fn children(&self, coord: &ModuleCoordinate) -> &[DependencyEdge<'r>] {
        self.entries.get(coord).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, coord: &ModuleCoordinate) -> bool {
        self.entries.contains_key(coord)
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
