//! robots.txt generation for the target project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Location of the generated file, relative to the project root.
pub const ROBOTS_PATH: &str = "client/public/robots.txt";

/// Crawler policy shared by every generated file. Tuned for a typical
/// static frontend: API and framework internals excluded, assets allowed,
/// polite crawl delay.
const BASE_RULES: &str = "\
# robots.txt
User-agent: *
Allow: /

# Disallow crawling of API routes
Disallow: /api/
Disallow: /_next/
Disallow: /admin/

# Allow crawling of static assets
Allow: /images/
Allow: /*.js$
Allow: /*.css$
Allow: /*.png$
Allow: /*.jpg$
Allow: /*.jpeg$
Allow: /*.gif$
Allow: /*.svg$
Allow: /*.webp$

# Crawl delay
Crawl-delay: 1";

/// Render robots.txt, appending a sitemap stanza when the site URL is
/// known.
pub fn render_robots(domain: Option<&str>) -> String {
    let mut content = BASE_RULES.to_string();
    if let Some(domain) = domain {
        content.push_str(&format!("\n\n# Sitemap\nSitemap: {domain}/sitemap.xml"));
    }
    content
}

/// Write robots.txt into the project's public directory, creating the
/// directory chain first.
pub fn write_robots(project: &Path, domain: Option<&str>) -> Result<PathBuf> {
    let path = project.join(ROBOTS_PATH);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, render_robots(domain))
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(path)
}
