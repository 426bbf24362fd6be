//! The whole pipeline for one report: classify, register, flatten.

use std::io::{self, Write};

use ivyscan_core::coordinate::{ModuleCoordinate, Normalize};
use ivyscan_core::report::ResolveReport;

use crate::classify::Classifier;
use crate::emit;
use crate::flatten::{flatten, FlatRecord};
use crate::registry::{Registry, RegistryStats};

/// Result of analysing one resolve report.
pub struct Analysis<'r> {
    pub root: ModuleCoordinate,
    pub registry: Registry<'r>,
    pub records: Vec<FlatRecord>,
    pub discrimination_active: bool,
}

/// Run the classifier, registry walk and flattener over `report`.
pub fn analyze<'r>(report: &'r ResolveReport, runtime_confs: &[String]) -> Analysis<'r> {
    tracing::info!("component detection for {}", report.display_id());
    tracing::info!(
        "root organisation is {}; dependencies with this organisation are ignored",
        report.module.organisation_str()
    );
    tracing::info!("all configurations: {}", report.configurations.join(", "));

    let classifier = Classifier::new(runtime_confs, &report.configurations);
    let registry = Registry::build(report, &classifier);
    let root = report.module.normalize();
    let records = flatten(&root, &registry);
    tracing::info!("{} components reachable from {root}", records.len());

    Analysis {
        root,
        registry,
        records,
        discrimination_active: classifier.is_active(),
    }
}

impl Analysis<'_> {
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    pub fn dev_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_dev).count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.records.iter().filter(|r| !r.resolved).count()
    }

    /// Write the `RegisterUsage` document for this analysis.
    pub fn write_manifest<W: ?Sized + Write>(&self, out: &mut W) -> io::Result<()> {
        emit::write_manifest(out, &self.records, &self.root)
    }
}
