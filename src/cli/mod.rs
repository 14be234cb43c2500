//! CLI subcommand implementations for the masthead binary.

pub mod apply_cmd;
pub mod output;
pub mod setup_cmd;
pub mod status;

use std::path::Path;

/// Render a path relative to the project root when possible.
pub(crate) fn rel_display(project: &Path, path: &Path) -> String {
    path.strip_prefix(project)
        .unwrap_or(path)
        .display()
        .to_string()
}
