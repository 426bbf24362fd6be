//! Handler for `ivyscan manifest`.

use std::path::{Path, PathBuf};

use miette::Result;

use ivyscan_ops::ops_manifest::{self, ManifestOptions};
use ivyscan_util::progress::{status, status_info, status_warn};

pub fn exec(report: &Path, out: Option<PathBuf>, runtime_conf: Vec<String>) -> Result<()> {
    let (project_root, config) = super::load_config()?;
    let out = out.unwrap_or_else(|| project_root.join(&config.output.file));

    let mut opts = ManifestOptions::new(out);
    opts.runtime_confs = super::runtime_confs(runtime_conf, &config);

    status("Reading", &report.display().to_string());
    let summary = ops_manifest::generate(report, &opts)?;

    if !summary.discrimination_active {
        status_warn(
            "Skipped",
            "dev/runtime classification (no runtime configuration was resolved)",
        );
    }
    if summary.unresolved > 0 {
        status_warn(
            "Unresolved",
            &format!("{} component(s) marked as not resolved", summary.unresolved),
        );
    }
    if summary.missing > 0 {
        status_warn(
            "Missing",
            &format!("{} module(s) could not be resolved and were left out", summary.missing),
        );
    }
    if summary.first_party > 0 {
        status_warn(
            "Skipped",
            &format!(
                "{} module(s) sharing the root organisation (treated as custom code)",
                summary.first_party
            ),
        );
    }
    if summary.evicted > 0 {
        status_info("Evicted", &format!("{} module(s) ignored", summary.evicted));
    }
    status(
        "Wrote",
        &format!(
            "{} ({} components, {} dev)",
            summary.out.display(),
            summary.records,
            summary.dev
        ),
    );
    Ok(())
}
