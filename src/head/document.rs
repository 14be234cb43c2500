//! Locating the HTML document whose head section gets updated.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Candidate document locations relative to the project root, in priority
/// order. Covers plain static sites and the common client/ split.
pub const TARGET_CANDIDATES: &[&str] = &[
    "index.html",
    "client/index.html",
    "client/public/index.html",
];

/// Find the first candidate document that exists.
///
/// Absence is not an error; callers treat `None` as a benign no-op.
pub fn find_target_document(project: &Path) -> Option<PathBuf> {
    for candidate in TARGET_CANDIDATES {
        let path = project.join(candidate);
        if path.exists() {
            debug!("target document: {}", path.display());
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_target_document(dir.path()), None);
    }

    #[test]
    fn test_root_index_wins_over_client_copies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("client/public")).unwrap();
        std::fs::write(dir.path().join("client/public/index.html"), "deep").unwrap();
        std::fs::write(dir.path().join("client/index.html"), "mid").unwrap();
        std::fs::write(dir.path().join("index.html"), "root").unwrap();

        assert_eq!(
            find_target_document(dir.path()),
            Some(dir.path().join("index.html"))
        );
    }

    #[test]
    fn test_client_public_found_last() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("client/public")).unwrap();
        std::fs::write(dir.path().join("client/public/index.html"), "deep").unwrap();

        assert_eq!(
            find_target_document(dir.path()),
            Some(dir.path().join("client/public/index.html"))
        );
    }
}
