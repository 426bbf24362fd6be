//! The `RegisterUsage` document and its consumer-side recorder.
//!
//! The document lists one entry per third-party component with its GAV,
//! dev flag, resolution status and (for transitive components) the GAV of
//! the parent it was first reached through.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use ivyscan_util::errors::ScanError;

use crate::coordinate::ModuleCoordinate;

/// `{"g": .., "a": .., "v": ..}`; a missing part is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gav {
    pub g: Option<String>,
    pub a: Option<String>,
    pub v: Option<String>,
}

impl From<&ModuleCoordinate> for Gav {
    fn from(c: &ModuleCoordinate) -> Self {
        Self {
            g: c.group.clone(),
            a: c.name.clone(),
            v: c.version.clone(),
        }
    }
}

impl From<&Gav> for ModuleCoordinate {
    fn from(gav: &Gav) -> Self {
        ModuleCoordinate::from_parts(gav.g.clone(), gav.a.clone(), gav.v.clone())
    }
}

/// A single component entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub gav: Gav,
    #[serde(rename = "DevelopmentDependency")]
    pub development_dependency: bool,
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_gav: Option<Gav>,
}

/// Top-level document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageManifest {
    #[serde(rename = "RegisterUsage")]
    pub register_usage: Vec<UsageEntry>,
}

/// Aggregated usage of one component after recording.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentUsage {
    /// Referenced directly by the project at least once.
    pub explicit: bool,
    /// Dev only if every registration said so.
    pub dev: bool,
    /// Components registered with this one as their parent.
    pub dependencies: BTreeSet<ModuleCoordinate>,
}

/// Result of replaying a manifest into a component graph.
#[derive(Debug, Clone, Default)]
pub struct UsageRecording {
    pub components: BTreeMap<ModuleCoordinate, ComponentUsage>,
    /// Unresolved components; these are never registered.
    pub parse_failures: Vec<ModuleCoordinate>,
}

impl UsageRecording {
    pub fn component(&self, coord: &ModuleCoordinate) -> Option<&ComponentUsage> {
        self.components.get(coord)
    }

    /// Components referenced directly by the project.
    pub fn explicit_components(&self) -> impl Iterator<Item = &ModuleCoordinate> {
        self.components
            .iter()
            .filter(|(_, usage)| usage.explicit)
            .map(|(coord, _)| coord)
    }

    fn register(
        &mut self,
        coord: ModuleCoordinate,
        parent: Option<ModuleCoordinate>,
        dev: bool,
    ) -> miette::Result<()> {
        match self.components.get_mut(&coord) {
            Some(existing) => {
                existing.explicit |= parent.is_none();
                existing.dev &= dev;
            }
            None => {
                self.components.insert(
                    coord.clone(),
                    ComponentUsage {
                        explicit: parent.is_none(),
                        dev,
                        dependencies: BTreeSet::new(),
                    },
                );
            }
        }

        let Some(parent) = parent else {
            return Ok(());
        };
        match self.components.get_mut(&parent) {
            Some(parent_usage) => {
                parent_usage.dependencies.insert(coord);
            }
            None if self.parse_failures.contains(&parent) => {
                tracing::warn!("{coord} was reached through unresolved {parent}; edge dropped");
            }
            None => {
                return Err(ScanError::Usage {
                    message: format!(
                        "{coord} names parent {parent}, which was not registered before it"
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl UsageManifest {
    /// Load and parse a `RegisterUsage.json` file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::Usage {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_json(&content)
    }

    pub fn parse_json(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ScanError::Usage {
                message: e.to_string(),
            }
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.register_usage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.register_usage.is_empty()
    }

    /// Replay every entry into a [`UsageRecording`].
    ///
    /// Resolved entries are registered, explicitly when they have no parent.
    /// Unresolved entries are logged and kept as parse failures. A parent must
    /// be registered before any entry that names it.
    pub fn record(&self) -> miette::Result<UsageRecording> {
        let mut recording = UsageRecording::default();
        for entry in &self.register_usage {
            let coord = ModuleCoordinate::from(&entry.gav);
            if !entry.resolved {
                tracing::warn!(
                    "dependency {coord} could not be resolved and has not been recorded"
                );
                recording.parse_failures.push(coord);
                continue;
            }
            let parent = entry.parent_gav.as_ref().map(ModuleCoordinate::from);
            recording.register(coord, parent, entry.development_dependency)?;
        }
        Ok(recording)
    }
}
