//! masthead: deterministic SEO configuration and head-tag projection for
//! static web projects.
//!
//! Two core pieces, with no shared state between them:
//!
//! - [`config`] turns a flat [`SeoAnswers`] record into a complete,
//!   normalized [`SeoConfig`] profile (schema.org type inference included)
//!   and persists it as `seo.config.json` in the project root.
//! - [`head`] renders the meta-tag and JSON-LD blocks from a profile and
//!   injects them into a document's head section exactly once, leaving
//!   every other byte of the document untouched.
//!
//! The [`artifacts`] module projects the same profile into static files
//! for the target project: a robots.txt and a small runtime meta-tag
//! helper. The [`cli`] module wires all of it into the `masthead` binary.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod head;

pub use config::answers::SeoAnswers;
pub use config::model::SeoConfig;
pub use error::ValidationError;
pub use head::injector::{update_project_head, HeadInjector, HeadUpdate};
