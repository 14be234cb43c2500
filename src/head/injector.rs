//! Idempotent injection of the SEO block into a document head.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use crate::config::model::SeoConfig;
use crate::head::document::find_target_document;
use crate::head::structured_data::render_script_block;
use crate::head::tags::{render_meta_block, PLACEHOLDER_BLOCK};

/// Substring whose presence marks a document as already configured. Both
/// this tool and hand-written Open Graph tags satisfy it.
pub const OG_TITLE_MARKER: &str = "og:title";

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)og:title").expect("marker pattern compiles"));
static CLOSING_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head\s*>").expect("closing-head pattern compiles"));

/// True when the document already carries the Open Graph title marker, in
/// any casing.
pub fn is_tagged(html: &str) -> bool {
    MARKER_RE.is_match(html)
}

/// True when the document has a closing head tag to inject before.
pub fn has_closing_head(html: &str) -> bool {
    CLOSING_HEAD_RE.is_match(html)
}

/// One-shot head mutator. Construct one per call with the profile passed
/// explicitly; there is no shared or global state behind it.
#[derive(Debug, Clone, Copy)]
pub struct HeadInjector<'a> {
    config: Option<&'a SeoConfig>,
}

impl<'a> HeadInjector<'a> {
    /// Injector that renders fully parameterized tags from a profile.
    pub fn with_config(config: &'a SeoConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Injector that renders the generic placeholder block.
    pub fn placeholder() -> Self {
        Self { config: None }
    }

    /// Apply the injection to a document, exactly once.
    ///
    /// A document that already carries the marker, or that has no closing
    /// head tag, comes back byte-for-byte unchanged, so the function is a
    /// fixpoint after one application. The marker scan is content-based:
    /// a head whose author hand-wrote Open Graph tags is left alone, and
    /// marker text inside an HTML comment will also count as tagged.
    pub fn apply(&self, html: &str) -> String {
        if is_tagged(html) {
            return html.to_string();
        }
        let Some(closing) = CLOSING_HEAD_RE.find(html) else {
            return html.to_string();
        };

        // Insert in front of the first closing tag, keeping the tag text
        // exactly as the document wrote it.
        let block = match self.config {
            Some(config) => format!(
                "{}\n{}\n  ",
                render_meta_block(config),
                render_script_block(config)
            ),
            None => format!("{PLACEHOLDER_BLOCK}\n  "),
        };

        let mut out = String::with_capacity(html.len() + block.len());
        out.push_str(&html[..closing.start()]);
        out.push_str(&block);
        out.push_str(&html[closing.start()..]);
        out
    }
}

/// Outcome of a project-level head update. Every variant except
/// [`HeadUpdate::Injected`] means the document was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadUpdate {
    /// The block was injected and the document rewritten.
    Injected(PathBuf),
    /// The document already carried the marker.
    AlreadyTagged(PathBuf),
    /// The document has no closing head tag to inject before.
    NoClosingHead(PathBuf),
    /// No candidate document exists in the project.
    NoDocument,
}

/// Find the project's document and inject the SEO block into it.
///
/// With `Some(config)` the full parameterized block is rendered; with
/// `None` the placeholder block is. Absence of a document, an existing
/// marker, and a missing closing tag are reported as outcomes rather than
/// errors; only I/O failures bubble up.
pub fn update_project_head(project: &Path, config: Option<&SeoConfig>) -> Result<HeadUpdate> {
    let Some(path) = find_target_document(project) else {
        info!("no target document under {}", project.display());
        return Ok(HeadUpdate::NoDocument);
    };

    let html =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;

    if is_tagged(&html) {
        info!("{} already carries SEO tags", path.display());
        return Ok(HeadUpdate::AlreadyTagged(path));
    }
    if !has_closing_head(&html) {
        warn!("{} has no closing head tag, skipping", path.display());
        return Ok(HeadUpdate::NoClosingHead(path));
    }

    let injector = match config {
        Some(config) => HeadInjector::with_config(config),
        None => HeadInjector::placeholder(),
    };
    let updated = injector.apply(&html);
    std::fs::write(&path, updated).with_context(|| format!("writing {}", path.display()))?;
    info!("injected SEO tags into {}", path.display());
    Ok(HeadUpdate::Injected(path))
}
