//! Operation: read a `RegisterUsage.json` back and summarize what a
//! consumer would record from it.

use std::path::Path;

use ivyscan_core::usage::{UsageManifest, UsageRecording};

/// Parse and replay the document at `path`.
pub fn inspect(path: &Path) -> miette::Result<UsageRecording> {
    let manifest = UsageManifest::from_path(path)?;
    tracing::info!("{} entries in {}", manifest.len(), path.display());
    manifest.record()
}

/// Text report for a recording, one component per line.
pub fn render(recording: &UsageRecording) -> String {
    let mut output = String::new();
    for (coord, usage) in &recording.components {
        let kind = if usage.explicit { "direct" } else { "transitive" };
        let scope = if usage.dev { "dev" } else { "runtime" };
        output.push_str(&format!("{coord} [{kind}, {scope}]\n"));
        for dep in &usage.dependencies {
            output.push_str(&format!("  -> {dep}\n"));
        }
    }
    for failed in &recording.parse_failures {
        output.push_str(&format!("{failed} [unresolved]\n"));
    }
    output
}
