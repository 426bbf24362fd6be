//! Handler for `ivyscan inspect`.

use std::path::Path;

use miette::Result;

use ivyscan_ops::ops_inspect;
use ivyscan_util::progress::status_warn;

pub fn exec(file: &Path) -> Result<()> {
    let recording = ops_inspect::inspect(file)?;
    print!("{}", ops_inspect::render(&recording));

    if !recording.parse_failures.is_empty() {
        status_warn(
            "Unresolved",
            &format!("{} entries were not resolved", recording.parse_failures.len()),
        );
    }
    Ok(())
}
