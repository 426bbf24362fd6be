//! Handler for `ivyscan tree`.

use std::path::Path;

use miette::Result;

use ivyscan_ops::ops_tree::{self, TreeOptions};

pub fn exec(
    report: &Path,
    depth: Option<usize>,
    why: Option<String>,
    runtime_conf: Vec<String>,
) -> Result<()> {
    let (_, config) = super::load_config()?;

    let opts = TreeOptions {
        depth,
        why,
        runtime_confs: super::runtime_confs(runtime_conf, &config),
    };

    print!("{}", ops_tree::tree(report, &opts)?);
    Ok(())
}
