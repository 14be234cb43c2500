//! Runtime meta-tag helper emitted into the target project.
//!
//! The emitted module is plain TypeScript with a per-call API and no
//! module-level state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Location of the emitted helper, relative to the project root.
pub const META_UTIL_PATH: &str = "client/src/utils/metaTags.ts";

const UTIL_SOURCE: &str = r##"/**
 * Runtime meta-tag helper generated by masthead.
 *
 * Call applyMetaTags() on route changes to keep document metadata in sync
 * with the current view. Tags that already exist are updated in place;
 * missing ones are created and appended to the head.
 */

export interface MetaTagsConfig {
  title?: string;
  description?: string;
  keywords?: string;
  author?: string;
  image?: string;
  url?: string;
  type?: string;
}

export class MetaTags {
  updateMetaTags(config: MetaTagsConfig): void {
    if (config.title) {
      document.title = config.title;
      this.setTag('property', 'og:title', config.title);
      this.setTag('name', 'twitter:title', config.title);
    }
    if (config.description) {
      this.setTag('name', 'description', config.description);
      this.setTag('property', 'og:description', config.description);
      this.setTag('name', 'twitter:description', config.description);
    }
    if (config.keywords) {
      this.setTag('name', 'keywords', config.keywords);
    }
    if (config.author) {
      this.setTag('name', 'author', config.author);
    }
    if (config.image) {
      this.setTag('property', 'og:image', config.image);
      this.setTag('name', 'twitter:image', config.image);
    }
    if (config.url) {
      this.setTag('property', 'og:url', config.url);
      this.setCanonical(config.url);
    }
    if (config.type) {
      this.setTag('property', 'og:type', config.type);
    }
  }

  private setTag(attr: string, name: string, content: string): void {
    let element = document.querySelector<HTMLMetaElement>(`meta[${attr}="${name}"]`);
    if (!element) {
      element = document.createElement('meta');
      element.setAttribute(attr, name);
      document.head.appendChild(element);
    }
    element.setAttribute('content', content);
  }

  private setCanonical(url: string): void {
    let element = document.querySelector<HTMLLinkElement>('link[rel="canonical"]');
    if (!element) {
      element = document.createElement('link');
      element.setAttribute('rel', 'canonical');
      document.head.appendChild(element);
    }
    element.setAttribute('href', url);
  }
}

/** Apply metadata for the current view. Each call uses a fresh instance. */
export function applyMetaTags(config: MetaTagsConfig): void {
  new MetaTags().updateMetaTags(config);
}
"##;

/// Write the helper into the project's utils directory, creating the
/// directory chain first. The content is fixed; rewriting is harmless.
pub fn write_meta_util(project: &Path) -> Result<PathBuf> {
    let path = project.join(META_UTIL_PATH);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, UTIL_SOURCE)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_written_under_utils() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta_util(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("client/src/utils/metaTags.ts"));
        assert!(path.exists());
    }

    #[test]
    fn test_helper_exports_per_call_api() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta_util(dir.path()).unwrap();
        let source = std::fs::read_to_string(&path).unwrap();
        assert!(source.contains("export function applyMetaTags"));
        assert!(source.contains("export class MetaTags"));
        assert!(source.contains("new MetaTags().updateMetaTags(config)"));
        // No module-level instance to share state through.
        assert!(!source.contains("getInstance"));
        assert!(!source.contains("static instance"));
    }

    #[test]
    fn test_helper_covers_core_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta_util(dir.path()).unwrap();
        let source = std::fs::read_to_string(&path).unwrap();
        for needle in [
            "og:title",
            "og:description",
            "og:image",
            "og:url",
            "twitter:title",
            "canonical",
        ] {
            assert!(source.contains(needle), "helper misses {needle}");
        }
    }
}
