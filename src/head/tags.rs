//! Meta-tag block rendering for the head section.

use crate::config::model::SeoConfig;

/// The generic block injected when no profile exists, for the developer to
/// edit by hand. Carries the `og:title` marker so a later run still detects
/// the document as tagged.
pub const PLACEHOLDER_BLOCK: &str = r#"    <!-- SEO Meta Tags -->
    <meta name="description" content="Your site description">
    <meta name="keywords" content="your, keywords, here">
    <meta name="author" content="Your Name">
    <meta name="robots" content="index, follow">

    <!-- Open Graph Meta Tags -->
    <meta property="og:title" content="Your Site Title">
    <meta property="og:description" content="Your site description">
    <meta property="og:image" content="/og-image.png">
    <meta property="og:url" content="https://example.com">
    <meta property="og:type" content="website">

    <!-- Twitter Card Meta Tags -->
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="Your Site Title">
    <meta name="twitter:description" content="Your site description">
    <meta name="twitter:image" content="/og-image.png">"#;

/// Render the fully parameterized meta-tag block for a profile.
///
/// Group order matches what the tool has always produced: plain SEO tags,
/// Open Graph, Twitter Card, then theme color and canonical link. Values
/// are taken verbatim from the profile; the two Twitter attribution tags
/// are omitted entirely when no handle is configured.
pub fn render_meta_block(config: &SeoConfig) -> String {
    let author = config.author_or_business();
    let image = config.image_url();

    let mut lines = vec![
        "    <!-- SEO Meta Tags -->".to_string(),
        format!(
            r#"    <meta name="description" content="{}">"#,
            config.description
        ),
        format!(
            r#"    <meta name="keywords" content="{}">"#,
            config.keywords.join(", ")
        ),
        format!(r#"    <meta name="author" content="{author}">"#),
        r#"    <meta name="robots" content="index, follow">"#.to_string(),
        String::new(),
        "    <!-- Open Graph Meta Tags -->".to_string(),
        format!(
            r#"    <meta property="og:title" content="{}">"#,
            config.site_name
        ),
        format!(
            r#"    <meta property="og:description" content="{}">"#,
            config.description
        ),
        format!(r#"    <meta property="og:image" content="{image}">"#),
        format!(
            r#"    <meta property="og:url" content="{}">"#,
            config.site_url
        ),
        r#"    <meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"    <meta property="og:site_name" content="{}">"#,
            config.site_name
        ),
        format!(
            r#"    <meta property="og:locale" content="{}">"#,
            config.locale_or_default()
        ),
        String::new(),
        "    <!-- Twitter Card Meta Tags -->".to_string(),
        r#"    <meta name="twitter:card" content="summary_large_image">"#.to_string(),
        format!(
            r#"    <meta name="twitter:title" content="{}">"#,
            config.site_name
        ),
        format!(
            r#"    <meta name="twitter:description" content="{}">"#,
            config.description
        ),
        format!(r#"    <meta name="twitter:image" content="{image}">"#),
    ];

    if let Some(handle) = config.social.as_ref().and_then(|s| s.twitter.as_deref()) {
        lines.push(format!(
            r#"    <meta name="twitter:site" content="@{handle}">"#
        ));
        lines.push(format!(
            r#"    <meta name="twitter:creator" content="@{handle}">"#
        ));
    }

    lines.push(String::new());
    lines.push("    <!-- Additional SEO Meta Tags -->".to_string());
    lines.push(format!(
        r#"    <meta name="theme-color" content="{}">"#,
        config.theme_color_or_default()
    ));
    lines.push(format!(
        r#"    <link rel="canonical" href="{}">"#,
        config.site_url
    ));

    lines.join("\n")
}
