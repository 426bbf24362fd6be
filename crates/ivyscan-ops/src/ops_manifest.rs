//! Operation: write `RegisterUsage.json` from a resolve report.

use std::path::{Path, PathBuf};

use ivyscan_core::config::RUNTIME_CONF_NAMES;
use ivyscan_core::report::ResolveReport;
use ivyscan_graph::analysis::{self, Analysis};
use ivyscan_util::errors::ScanError;
use ivyscan_util::fs::write_atomic;

/// Options for `ivyscan manifest`.
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Destination of the document.
    pub out: PathBuf,
    /// Configurations whose members are runtime dependencies.
    pub runtime_confs: Vec<String>,
}

impl ManifestOptions {
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self {
            out: out.into(),
            runtime_confs: RUNTIME_CONF_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// What a manifest run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    pub out: PathBuf,
    pub records: usize,
    pub dev: usize,
    /// Records written with `"resolved": false`.
    pub unresolved: usize,
    /// Ids the resolver could not resolve at all; these are not written.
    pub missing: usize,
    pub evicted: usize,
    pub first_party: usize,
    pub discrimination_active: bool,
}

/// Load the report at `report_path` and write its manifest.
///
/// Fails before doing any work if no report exists.
pub fn generate(report_path: &Path, opts: &ManifestOptions) -> miette::Result<ManifestSummary> {
    let report = ResolveReport::from_path(report_path)?;
    generate_from_report(&report, opts)
}

/// Analyse `report` and write the manifest to `opts.out`.
///
/// The destination is written atomically: on failure it is left as it was.
pub fn generate_from_report(
    report: &ResolveReport,
    opts: &ManifestOptions,
) -> miette::Result<ManifestSummary> {
    let analysis = analysis::analyze(report, &opts.runtime_confs);

    tracing::info!("writing output to {}", opts.out.display());
    write_atomic(&opts.out, |w| analysis.write_manifest(w)).map_err(|source| {
        ScanError::Output {
            path: opts.out.clone(),
            source,
        }
    })?;

    Ok(summarize(&analysis, &opts.out))
}

fn summarize(analysis: &Analysis<'_>, out: &Path) -> ManifestSummary {
    let stats = analysis.stats();
    ManifestSummary {
        out: out.to_path_buf(),
        records: analysis.records.len(),
        dev: analysis.dev_count(),
        unresolved: analysis.unresolved_count(),
        missing: stats.unresolved,
        evicted: stats.evicted,
        first_party: stats.first_party,
        discrimination_active: analysis.discrimination_active,
    }
}
