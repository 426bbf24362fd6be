//! Development/runtime classification of dependency nodes.

use ivyscan_core::config::RUNTIME_CONF_NAMES;
use ivyscan_core::report::DependencyNode;

/// Decides whether a node is a development-only dependency.
///
/// Discrimination is switched on once, when the classifier is built, if the
/// root module defines at least one of the runtime configurations. While it
/// is off every node is a runtime dependency.
#[derive(Debug, Clone)]
pub struct Classifier {
    runtime_confs: Vec<String>,
    active: bool,
}

impl Classifier {
    /// Build a classifier for a resolution whose root defines `resolved_confs`.
    pub fn new(runtime_confs: &[String], resolved_confs: &[String]) -> Self {
        let active = runtime_confs
            .iter()
            .any(|name| resolved_confs.iter().any(|c| c == name));
        if active {
            tracing::info!(
                "dev dependency detection active: dependencies not required for {} are dev dependencies",
                runtime_confs.join(" or ")
            );
        } else {
            tracing::warn!(
                "not discriminating dev and runtime dependencies: no configuration named {}",
                runtime_confs.join(" or ")
            );
        }
        Self {
            runtime_confs: runtime_confs.to_vec(),
            active,
        }
    }

    /// Classifier using the `default` and `runtime` configurations.
    pub fn standard(resolved_confs: &[String]) -> Self {
        let names: Vec<String> = RUNTIME_CONF_NAMES.iter().map(|s| s.to_string()).collect();
        Self::new(&names, resolved_confs)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A node is dev iff discrimination is active and no runtime
    /// configuration requires it.
    pub fn is_dev(&self, node: &DependencyNode) -> bool {
        if !self.active {
            return false;
        }
        if self.runtime_confs.iter().any(|conf| node.required_in(conf)) {
            return false;
        }
        tracing::debug!(
            "marking {} as a dev dependency: not required by {}",
            node.id,
            self.runtime_confs.join(", ")
        );
        true
    }
}
