//! `apply`: project the SEO profile into the target's static artifacts.

use std::path::Path;

use anyhow::Result;

use crate::artifacts::{meta_util, robots};
use crate::cli::output::{self, Styled};
use crate::cli::rel_display;
use crate::config::model::SeoConfig;
use crate::config::{builder, store};
use crate::head::injector::{update_project_head, HeadUpdate};

/// Where the profile used for an apply run came from.
enum ProfileSource {
    Stored,
    Default,
    Bare,
}

impl ProfileSource {
    fn label(&self) -> &'static str {
        match self {
            ProfileSource::Stored => "stored",
            ProfileSource::Default => "default",
            ProfileSource::Bare => "bare",
        }
    }
}

/// Run apply for a project.
///
/// Head injection, robots.txt, and the meta-tag helper always run as a
/// unit. With `--bare` the generic placeholder block is injected and no
/// profile is consulted; otherwise a missing profile degrades to the
/// in-memory default one, which is never persisted.
pub async fn run(project: &Path, bare: bool) -> Result<()> {
    let s = Styled::new();

    let (config, source): (Option<SeoConfig>, ProfileSource) = if bare {
        (None, ProfileSource::Bare)
    } else {
        match store::load(project)? {
            Some(config) => (Some(config), ProfileSource::Stored),
            None => {
                if !output::is_json() && !output::is_quiet() {
                    eprintln!(
                        "  {} No SEO configuration found - using defaults",
                        s.warn_sym()
                    );
                }
                (Some(builder::default_config(project)), ProfileSource::Default)
            }
        }
    };

    let head = update_project_head(project, config.as_ref())?;
    let domain = config.as_ref().map(|c| c.site_url.as_str());
    let robots_path = robots::write_robots(project, domain)?;
    let util_path = meta_util::write_meta_util(project)?;

    if output::is_json() {
        let (head_status, document) = match &head {
            HeadUpdate::Injected(path) => ("injected", Some(rel_display(project, path))),
            HeadUpdate::AlreadyTagged(path) => {
                ("already_tagged", Some(rel_display(project, path)))
            }
            HeadUpdate::NoClosingHead(path) => {
                ("no_closing_head", Some(rel_display(project, path)))
            }
            HeadUpdate::NoDocument => ("no_document", None),
        };
        output::print_json(&serde_json::json!({
            "profile": source.label(),
            "head": head_status,
            "document": document,
            "robots": rel_display(project, &robots_path),
            "metaUtil": rel_display(project, &util_path),
        }));
        return Ok(());
    }

    if !output::is_quiet() {
        match &head {
            HeadUpdate::Injected(path) => {
                eprintln!(
                    "  {} Head tags injected into {}",
                    s.ok_sym(),
                    rel_display(project, path)
                );
            }
            HeadUpdate::AlreadyTagged(path) => {
                eprintln!(
                    "  {} Head tags already present in {} (skipped)",
                    s.info_sym(),
                    rel_display(project, path)
                );
            }
            HeadUpdate::NoClosingHead(path) => {
                eprintln!(
                    "  {} No closing head tag in {} (skipped)",
                    s.warn_sym(),
                    rel_display(project, path)
                );
            }
            HeadUpdate::NoDocument => {
                eprintln!("  {} No index.html found (head injection skipped)", s.warn_sym());
            }
        }
        eprintln!(
            "  {} robots.txt written to {}",
            s.ok_sym(),
            rel_display(project, &robots_path)
        );
        eprintln!(
            "  {} Meta-tag helper written to {}",
            s.ok_sym(),
            rel_display(project, &util_path)
        );
        eprintln!();
        eprintln!("  Inspect with: {}", s.bold("masthead status"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::answers::sample_answers;
    use crate::config::builder::build_config;

    const DOC: &str =
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>App</title>\n  </head>\n  <body></body>\n</html>\n";

    #[tokio::test]
    async fn test_apply_with_stored_profile() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), DOC).unwrap();
        store::save(dir.path(), &build_config(&sample_answers())).unwrap();

        run(dir.path(), false).await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"<meta property="og:title" content="Tidewater Coffee">"#));
        assert!(html.contains("application/ld+json"));

        let robots =
            std::fs::read_to_string(dir.path().join("client/public/robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://tidewater.coffee/sitemap.xml"));
        assert!(dir.path().join("client/src/utils/metaTags.ts").exists());
    }

    #[tokio::test]
    async fn test_apply_without_profile_uses_defaults_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), DOC).unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"name": "driftwood"}"#,
        )
        .unwrap();

        run(dir.path(), false).await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"<meta property="og:title" content="driftwood">"#));
        let robots =
            std::fs::read_to_string(dir.path().join("client/public/robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
        // The default profile is in-memory only.
        assert!(!store::config_path(dir.path()).exists());
    }

    #[tokio::test]
    async fn test_apply_bare_injects_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), DOC).unwrap();

        run(dir.path(), true).await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Your Site Title"));
        assert!(!html.contains("application/ld+json"));
        let robots =
            std::fs::read_to_string(dir.path().join("client/public/robots.txt")).unwrap();
        assert!(!robots.contains("Sitemap"));
    }

    #[tokio::test]
    async fn test_second_apply_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), DOC).unwrap();
        store::save(dir.path(), &build_config(&sample_answers())).unwrap();

        run(dir.path(), false).await.unwrap();
        let first = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        run(dir.path(), false).await.unwrap();
        let second = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_apply_without_document_still_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), true).await.unwrap();
        assert!(dir.path().join("client/public/robots.txt").exists());
        assert!(dir.path().join("client/src/utils/metaTags.ts").exists());
    }
}
