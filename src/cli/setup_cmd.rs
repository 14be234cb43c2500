//! `setup`: synthesize the SEO profile from an answers file and persist it.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::cli::output::{self, Styled};
use crate::config::answers::SeoAnswers;
use crate::config::{builder, schema, store};

/// Run setup for a project.
///
/// Without `--force` an existing `seo.config.json` short-circuits the run,
/// so setup is safe to call repeatedly from project scaffolding.
pub async fn run(project: &Path, answers_path: &Path, force: bool) -> Result<()> {
    let s = Styled::new();

    if !force {
        if let Some(existing) = store::load(project)? {
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "status": "unchanged",
                    "config": store::CONFIG_FILE,
                    "siteName": existing.site_name,
                }));
                return Ok(());
            }
            if !output::is_quiet() {
                eprintln!(
                    "  {} Using existing SEO configuration from {}",
                    s.info_sym(),
                    store::CONFIG_FILE
                );
                eprintln!("    Pass --force to rebuild it from an answers file.");
            }
            return Ok(());
        }
    }

    let raw = std::fs::read_to_string(answers_path)
        .with_context(|| format!("reading answers file {}", answers_path.display()))?;
    let answers: SeoAnswers = serde_json::from_str(&raw)
        .with_context(|| format!("parsing answers file {}", answers_path.display()))?;
    answers.validate().context("invalid answers")?;

    if !schema::BUSINESS_TYPES.contains(&answers.business_type.as_str()) {
        warn!(
            "unknown business type {:?}, structured data falls back to Organization",
            answers.business_type
        );
    }

    let config = builder::build_config(&answers);
    store::save(project, &config)?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "status": "saved",
            "config": store::CONFIG_FILE,
            "siteName": config.site_name,
            "siteUrl": config.site_url,
            "structuredDataType": config.schema_type(),
        }));
        return Ok(());
    }

    if !output::is_quiet() {
        eprintln!(
            "  {} SEO configuration saved to {}",
            s.ok_sym(),
            store::CONFIG_FILE
        );
        eprintln!("    Site:            {}", config.site_name);
        eprintln!("    URL:             {}", config.site_url);
        eprintln!("    Structured data: {}", config.schema_type());
        eprintln!();
        eprintln!("  Apply it with: {}", s.bold("masthead apply"));
    }

    Ok(())
}
