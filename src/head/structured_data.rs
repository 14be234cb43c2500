//! JSON-LD structured-data rendering for the head section.

use serde::Serialize;

use crate::config::model::SeoConfig;

/// JSON-LD context shared by every payload.
const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Organization-style JSON-LD payload.
///
/// Field order here is the emitted key order, so the block is stable across
/// runs: `@context`, `@type`, `name`, `url`, `description`, `logo`.
#[derive(Debug, Serialize)]
struct OrganizationLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'a str,
    name: &'a str,
    url: &'a str,
    description: &'a str,
    logo: String,
}

/// Render the `<script type="application/ld+json">` block for a profile.
pub fn render_script_block(config: &SeoConfig) -> String {
    let payload = OrganizationLd {
        context: SCHEMA_CONTEXT,
        schema_type: config.schema_type(),
        name: &config.business_name,
        url: &config.site_url,
        description: &config.description,
        logo: config.image_url(),
    };
    // String-only payload, serialization cannot fail.
    let json = serde_json::to_string_pretty(&payload).expect("JSON-LD payload serializes");

    format!(
        "    <!-- Structured Data -->\n    <script type=\"application/ld+json\">\n    {json}\n    </script>"
    )
}
