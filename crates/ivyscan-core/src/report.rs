//! The resolve report: the resolver's output, consumed read-only.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ivyscan_util::errors::ScanError;

use crate::coordinate::{display_part, ModuleRevisionId};

/// Everything the resolver reported for one root module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolveReport {
    #[serde(default)]
    pub resolve_id: Option<String>,
    /// The project being resolved.
    pub module: ModuleRevisionId,
    /// Configuration names the root module defines.
    #[serde(default)]
    pub configurations: Vec<String>,
    /// Every node the resolver visited, in resolver order.
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
    /// Ids the resolver could not resolve at all.
    #[serde(default)]
    pub unresolved: Vec<ModuleRevisionId>,
}

/// One entry in the resolved graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyNode {
    pub id: ModuleRevisionId,
    /// Modules that directly require this node.
    #[serde(default)]
    pub callers: Vec<ModuleRevisionId>,
    /// Root configuration name -> this node's configurations required in it.
    #[serde(default)]
    pub configurations: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub has_problem: bool,
    #[serde(default)]
    pub completely_evicted: bool,
}

impl DependencyNode {
    pub fn new(id: ModuleRevisionId) -> Self {
        Self {
            id,
            callers: Vec::new(),
            configurations: BTreeMap::new(),
            has_problem: false,
            completely_evicted: false,
        }
    }

    /// Whether this node participates in root configuration `conf`.
    pub fn required_in(&self, conf: &str) -> bool {
        self.configurations
            .get(conf)
            .is_some_and(|confs| !confs.is_empty())
    }
}

impl ResolveReport {
    /// Load and parse a JSON resolve report.
    ///
    /// A missing file means resolution never ran, which is reported as
    /// [`ScanError::MissingReport`].
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Err(ScanError::MissingReport {
                path: path.to_path_buf(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path).map_err(ScanError::Io)?;
        Self::parse_json(&content)
    }

    /// Parse a report from a JSON string.
    pub fn parse_json(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ScanError::Report {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Human-readable identifier for log lines.
    pub fn display_id(&self) -> String {
        self.resolve_id.clone().unwrap_or_else(|| {
            format!(
                "{}-{}",
                display_part(&self.module.organisation),
                display_part(&self.module.name)
            )
        })
    }

    /// Whether `id` belongs to the root's own organisation.
    ///
    /// A root without an organisation owns nothing.
    pub fn is_first_party(&self, id: &ModuleRevisionId) -> bool {
        self.module.organisation.is_some() && id.organisation == self.module.organisation
    }
}
