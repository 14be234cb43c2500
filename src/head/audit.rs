//! Read-only inspection of a document head for status reporting.
//!
//! The injector never parses HTML so that untouched bytes stay untouched;
//! this module parses freely because it only reports.

use scraper::{Html, Selector};

/// Which of the injected tag set a document actually carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadAudit {
    /// Text of the `<title>` element, when present.
    pub title: Option<String>,
    pub description: bool,
    pub keywords: bool,
    pub author: bool,
    pub og_title: bool,
    pub og_description: bool,
    pub og_image: bool,
    pub twitter_card: bool,
    pub canonical: bool,
    pub json_ld: bool,
}

impl HeadAudit {
    /// Size of the audited tag set.
    pub const AUDITED: usize = 9;

    /// How many of the audited tags are present.
    pub fn present(&self) -> usize {
        [
            self.description,
            self.keywords,
            self.author,
            self.og_title,
            self.og_description,
            self.og_image,
            self.twitter_card,
            self.canonical,
            self.json_ld,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// Names of the audited tags that are missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let checks: [(&'static str, bool); Self::AUDITED] = [
            ("description", self.description),
            ("keywords", self.keywords),
            ("author", self.author),
            ("og:title", self.og_title),
            ("og:description", self.og_description),
            ("og:image", self.og_image),
            ("twitter:card", self.twitter_card),
            ("canonical", self.canonical),
            ("JSON-LD", self.json_ld),
        ];
        for (name, present) in checks {
            if !present {
                missing.push(name);
            }
        }
        missing
    }
}

/// Inspect a document and report which of the injected tags it carries.
pub fn audit_head(html: &str) -> HeadAudit {
    let doc = Html::parse_document(html);
    let mut audit = HeadAudit::default();

    if let Ok(selector) = Selector::parse("title") {
        audit.title = doc
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());
    }

    audit.description = has_selector(&doc, r#"meta[name="description"]"#);
    audit.keywords = has_selector(&doc, r#"meta[name="keywords"]"#);
    audit.author = has_selector(&doc, r#"meta[name="author"]"#);
    audit.og_title = has_selector(&doc, r#"meta[property="og:title"]"#);
    audit.og_description = has_selector(&doc, r#"meta[property="og:description"]"#);
    audit.og_image = has_selector(&doc, r#"meta[property="og:image"]"#);
    audit.twitter_card = has_selector(&doc, r#"meta[name="twitter:card"]"#);
    audit.canonical = has_selector(&doc, r#"link[rel="canonical"]"#);
    audit.json_ld = has_selector(&doc, r#"script[type="application/ld+json"]"#);

    audit
}

fn has_selector(doc: &Html, selector: &str) -> bool {
    Selector::parse(selector)
        .map(|selector| doc.select(&selector).next().is_some())
        .unwrap_or(false)
}
