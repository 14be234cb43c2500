//! Project SEO state report.
//!
//! Read-only: loads the profile, inspects the target document, and checks
//! the generated artifacts without writing anything.

use std::path::Path;

use anyhow::Result;

use crate::artifacts::meta_util::META_UTIL_PATH;
use crate::artifacts::robots::ROBOTS_PATH;
use crate::cli::output::{self, Styled};
use crate::cli::rel_display;
use crate::config::store;
use crate::head::audit::{audit_head, HeadAudit};
use crate::head::document::{find_target_document, TARGET_CANDIDATES};
use crate::head::injector::{has_closing_head, is_tagged};

/// Run the status report for a project.
pub async fn run(project: &Path) -> Result<()> {
    if output::is_json() {
        return run_json(project);
    }

    let s = Styled::new();
    let mut broken = false;

    output::print_header(&s);

    // ── Configuration ───────────────────────────────────────────────────
    output::print_section(&s, "Configuration");

    let config = match store::load(project) {
        Ok(Some(config)) => {
            output::print_check(
                s.ok_sym(),
                "Config:",
                &format!("{} ({})", store::CONFIG_FILE, config.site_name),
            );
            output::print_check(s.info_sym(), "Site URL:", &config.site_url);
            output::print_check(
                s.info_sym(),
                "Structured data:",
                &format!("{} ({})", config.schema_type(), config.business_type),
            );
            if output::is_verbose() {
                output::print_check(
                    s.info_sym(),
                    "Keywords:",
                    &config.keywords.len().to_string(),
                );
                output::print_check(
                    s.info_sym(),
                    "Local SEO:",
                    if config.is_local { "yes" } else { "no" },
                );
                if let Some(strategy) = &config.seo_strategy {
                    output::print_check(
                        s.info_sym(),
                        "Primary goal:",
                        &strategy.primary_goal.to_string(),
                    );
                }
            }
            Some(config)
        }
        Ok(None) => {
            output::print_check(s.info_sym(), "Config:", "not found");
            output::print_detail("Create one with 'masthead setup --answers <file>'");
            None
        }
        Err(e) => {
            output::print_check(s.fail_sym(), "Config:", "unreadable");
            output::print_detail(&format!("{e:#}"));
            broken = true;
            None
        }
    };

    eprintln!();

    // ── Document ────────────────────────────────────────────────────────
    output::print_section(&s, "Document");

    let mut tagged = false;
    let document = find_target_document(project);
    match &document {
        Some(path) => {
            output::print_check(s.ok_sym(), "Document:", &rel_display(project, path));
            match std::fs::read_to_string(path) {
                Ok(html) => {
                    tagged = is_tagged(&html);
                    if tagged {
                        output::print_check(s.ok_sym(), "Tagged:", "yes (og:title present)");
                    } else {
                        output::print_check(s.info_sym(), "Tagged:", "no");
                        if !has_closing_head(&html) {
                            output::print_check(
                                s.fail_sym(),
                                "Head tag:",
                                "no closing head tag found",
                            );
                            output::print_detail("Injection will skip this document.");
                            broken = true;
                        }
                    }
                    let audit = audit_head(&html);
                    output::print_check(
                        s.info_sym(),
                        "Tags:",
                        &format!(
                            "{}/{} of the injected set present",
                            audit.present(),
                            HeadAudit::AUDITED
                        ),
                    );
                    if output::is_verbose() {
                        if let Some(title) = &audit.title {
                            output::print_check(s.info_sym(), "Title:", title);
                        }
                        let missing = audit.missing();
                        if !missing.is_empty() {
                            output::print_detail(&format!("missing: {}", missing.join(", ")));
                        }
                    }
                }
                Err(e) => {
                    output::print_check(s.fail_sym(), "Document:", &format!("unreadable: {e}"));
                    broken = true;
                }
            }
        }
        None => {
            output::print_check(s.warn_sym(), "Document:", "not found");
            output::print_detail(&format!("Looked for: {}", TARGET_CANDIDATES.join(", ")));
        }
    }

    eprintln!();

    // ── Artifacts ───────────────────────────────────────────────────────
    output::print_section(&s, "Artifacts");

    if project.join(ROBOTS_PATH).exists() {
        output::print_check(s.ok_sym(), "robots.txt:", ROBOTS_PATH);
    } else {
        output::print_check(s.info_sym(), "robots.txt:", "not generated");
    }
    if project.join(META_UTIL_PATH).exists() {
        output::print_check(s.ok_sym(), "Meta helper:", META_UTIL_PATH);
    } else {
        output::print_check(s.info_sym(), "Meta helper:", "not generated");
    }

    // Status summary
    if broken {
        output::print_status(&s, &s.red("BROKEN"), "fix issues above");
    } else if config.is_some() && tagged {
        output::print_status(&s, &s.green("CONFIGURED"), "site metadata is in place");
    } else if config.is_some() {
        output::print_status(&s, &s.yellow("PENDING"), "run 'masthead apply'");
    } else {
        output::print_status(
            &s,
            &s.yellow("UNCONFIGURED"),
            "run 'masthead setup --answers <file>'",
        );
    }

    Ok(())
}

/// JSON output mode for status.
fn run_json(project: &Path) -> Result<()> {
    let config = store::load(project).ok().flatten();
    let document = find_target_document(project);
    let html = document
        .as_ref()
        .and_then(|path| std::fs::read_to_string(path).ok());

    let document_json = match (&document, &html) {
        (Some(path), Some(html)) => {
            let audit = audit_head(html);
            serde_json::json!({
                "path": rel_display(project, path),
                "tagged": is_tagged(html),
                "closingHead": has_closing_head(html),
                "title": audit.title,
                "tagsPresent": audit.present(),
                "tagsAudited": HeadAudit::AUDITED,
            })
        }
        _ => serde_json::Value::Null,
    };

    let json = serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "project": project.display().to_string(),
        "config": config.as_ref().map(|c| serde_json::json!({
            "path": store::CONFIG_FILE,
            "siteName": c.site_name,
            "siteUrl": c.site_url,
            "structuredDataType": c.schema_type(),
            "isLocal": c.is_local,
        })),
        "document": document_json,
        "artifacts": {
            "robots": project.join(ROBOTS_PATH).exists(),
            "metaUtil": project.join(META_UTIL_PATH).exists(),
        },
    });
    output::print_json(&json);
    Ok(())
}
