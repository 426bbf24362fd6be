//! Operation: display the flattened dependency tree.

use std::path::Path;

use ivyscan_core::config::RUNTIME_CONF_NAMES;
use ivyscan_core::coordinate::ModuleCoordinate;
use ivyscan_core::report::ResolveReport;
use ivyscan_graph::analysis;
use ivyscan_graph::tree;

/// Options for `ivyscan tree`.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show the path from the root to this module instead of the tree.
    pub why: Option<String>,
    pub runtime_confs: Vec<String>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            depth: None,
            why: None,
            runtime_confs: RUNTIME_CONF_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Render the tree (or `why` path) for the report at `report_path`.
pub fn tree(report_path: &Path, opts: &TreeOptions) -> miette::Result<String> {
    let report = ResolveReport::from_path(report_path)?;
    Ok(render(&report, opts))
}

pub fn render(report: &ResolveReport, opts: &TreeOptions) -> String {
    let analysis = analysis::analyze(report, &opts.runtime_confs);

    if let Some(ref target) = opts.why {
        return match tree::find_path(&analysis.registry, &analysis.root, target) {
            Some(path) => render_path(target, &path),
            None => format!("Dependency '{target}' not found in the graph.\n"),
        };
    }

    tree::render_tree(&analysis.records, &analysis.root, opts.depth)
}

fn render_path(target: &str, path: &[ModuleCoordinate]) -> String {
    let mut output = format!("Path to {target}:\n");
    for (i, coord) in path.iter().enumerate() {
        let indent = "  ".repeat(i);
        output.push_str(&format!("{indent}{coord}\n"));
    }
    output
}
