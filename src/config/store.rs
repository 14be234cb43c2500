//! Persistence of the SEO profile as `seo.config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::model::SeoConfig;

/// File name of the persisted profile, relative to the project root.
pub const CONFIG_FILE: &str = "seo.config.json";

/// Full path of the persisted profile for a project.
pub fn config_path(project: &Path) -> PathBuf {
    project.join(CONFIG_FILE)
}

/// Load the persisted profile, if one exists.
///
/// A missing file is not an error. An unreadable or malformed file is: it
/// means someone edited the profile by hand and silently discarding their
/// work would be worse than stopping.
pub fn load(project: &Path) -> Result<Option<SeoConfig>> {
    let path = config_path(project);
    if !path.exists() {
        debug!("no {CONFIG_FILE} under {}", project.display());
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(config))
}

/// Write the profile as pretty-printed JSON with 2-space indentation.
pub fn save(project: &Path, config: &SeoConfig) -> Result<PathBuf> {
    let path = config_path(project);
    let json =
        serde_json::to_string_pretty(config).context("serializing SEO configuration")?;
    std::fs::write(&path, json + "\n")
        .with_context(|| format!("writing {}", path.display()))?;
    info!("saved SEO configuration to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::answers::sample_answers;
    use crate::config::builder::build_config;

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut answers = sample_answers();
        answers.is_local = true;
        answers.city = Some("Astoria".to_string());
        answers.twitter = Some("tidewater".to_string());
        let config = build_config(&answers);

        let path = save(dir.path(), &config).unwrap();
        assert_eq!(path, dir.path().join("seo.config.json"));
        assert_eq!(load(dir.path()).unwrap(), Some(config));
    }

    #[test]
    fn test_save_writes_two_space_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = build_config(&sample_answers());
        save(dir.path(), &config).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("seo.config.json")).unwrap();
        assert!(raw.starts_with("{\n  \"siteName\": \"Tidewater Coffee\","));
        assert!(raw.contains("\n  \"keywords\": [\n    \"coffee\",\n"));
    }

    #[test]
    fn test_load_malformed_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seo.config.json"), "{oops").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("parsing"));
    }
}
