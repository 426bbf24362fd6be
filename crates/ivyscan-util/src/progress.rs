//! Cargo-style status lines on stderr.

use std::io::Write;

use console::Style;

fn line(style: Style, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        style.apply_to(label),
    );
}

/// Print an action line such as `     Writing target/RegisterUsage.json`.
///
/// The `label` is right-aligned to 12 characters in bold green.
pub fn status(label: &str, message: &str) {
    line(Style::new().green().bold(), label, message);
}

/// Bold cyan label, for informational (non-action) messages.
pub fn status_info(label: &str, message: &str) {
    line(Style::new().cyan().bold(), label, message);
}

/// Bold yellow label, for skipped or unresolved components.
pub fn status_warn(label: &str, message: &str) {
    line(Style::new().yellow().bold(), label, message);
}
