//! The canonical SEO profile and its optional substructures.

use serde::{Deserialize, Serialize};

/// Default Open Graph image path, relative to the site root.
pub const DEFAULT_IMAGE: &str = "/og-image.png";
/// Default Open Graph locale.
pub const DEFAULT_LOCALE: &str = "en_US";
/// Default browser theme color.
pub const DEFAULT_THEME_COLOR: &str = "#ffffff";

/// The complete, normalized SEO profile for a project.
///
/// Built once by [`crate::config::builder`], persisted verbatim as
/// `seo.config.json`, and reused unchanged on later runs. Keys are
/// camelCase so the target project's JS tooling can read the file directly,
/// and field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub site_name: String,
    /// Absolute site URL, never with a trailing slash.
    pub site_url: String,
    pub business_type: String,
    pub description: String,
    /// Ordered and trimmed, with no empty entries.
    pub keywords: Vec<String>,

    pub business_name: String,
    pub target_audience: String,
    pub unique_value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Serialized only when true, matching the persisted shape produced by
    /// earlier generations of the tool.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_local: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_strategy: Option<SeoStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

impl SeoConfig {
    /// Author credited in meta tags; falls back to the business name.
    pub fn author_or_business(&self) -> &str {
        self.author.as_deref().unwrap_or(&self.business_name)
    }

    /// Site-relative path of the social preview image.
    pub fn image_path(&self) -> &str {
        self.default_image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }

    /// Absolute URL of the social preview image.
    pub fn image_url(&self) -> String {
        format!("{}{}", self.site_url, self.image_path())
    }

    pub fn locale_or_default(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub fn theme_color_or_default(&self) -> &str {
        self.theme_color.as_deref().unwrap_or(DEFAULT_THEME_COLOR)
    }

    /// Inferred schema.org type; `Organization` when none was recorded.
    pub fn schema_type(&self) -> &str {
        self.structured_data
            .as_ref()
            .map(|s| s.schema_type.as_str())
            .unwrap_or("Organization")
    }
}

/// Physical location, present only for local businesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Always populated; defaults to `United States`.
    pub country: String,
}

/// Contact channels, attached only when at least one is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl Contact {
    /// True when no channel is populated.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.hours.is_none()
    }
}

/// Social handles, attached only when at least one is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Social {
    /// True when no handle is populated.
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none()
            && self.facebook.is_none()
            && self.instagram.is_none()
            && self.linkedin.is_none()
            && self.youtube.is_none()
            && self.github.is_none()
    }
}

/// Declared SEO strategy. Absent only in default-path profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoStrategy {
    pub primary_goal: PrimaryGoal,
    /// Priority keywords, ordered and trimmed.
    pub target_keywords: Vec<String>,
    /// `None` when the question was never answered; `Some(vec![])` when it
    /// was answered with nothing. The distinction survives round trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<String>>,
}

/// What the site primarily optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryGoal {
    Traffic,
    Leads,
    Sales,
    Awareness,
}

impl std::fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PrimaryGoal::Traffic => "traffic",
            PrimaryGoal::Leads => "leads",
            PrimaryGoal::Sales => "sales",
            PrimaryGoal::Awareness => "awareness",
        };
        write!(f, "{s}")
    }
}

/// Recorded structured-data choice for the JSON-LD payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "type")]
    pub schema_type: String,
}

fn is_false(v: &bool) -> bool {
    !v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> SeoConfig {
        SeoConfig {
            site_name: "Acme".to_string(),
            site_url: "https://acme.test".to_string(),
            business_type: "E-commerce".to_string(),
            description: "Acme sells everything under the sun".to_string(),
            keywords: vec!["acme".to_string(), "shop".to_string()],
            business_name: "Acme Inc".to_string(),
            target_audience: "Everyone".to_string(),
            unique_value: "Everything in one place".to_string(),
            default_image: None,
            theme_color: None,
            locale: None,
            author: None,
            is_local: false,
            location: None,
            contact: None,
            social: None,
            seo_strategy: None,
            structured_data: None,
        }
    }

    #[test]
    fn test_absent_groups_are_not_serialized() {
        let json = serde_json::to_string(&minimal_config()).unwrap();
        assert!(!json.contains("isLocal"));
        assert!(!json.contains("location"));
        assert!(!json.contains("contact"));
        assert!(!json.contains("social"));
        assert!(!json.contains("seoStrategy"));
        assert!(!json.contains("structuredData"));
        assert!(!json.contains("author"));
    }

    #[test]
    fn test_is_local_serialized_only_when_true() {
        let mut config = minimal_config();
        config.is_local = true;
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""isLocal":true"#));
    }

    #[test]
    fn test_camel_case_keys_in_declaration_order() {
        let mut config = minimal_config();
        config.default_image = Some("/banner.png".to_string());
        config.structured_data = Some(StructuredData {
            schema_type: "OnlineStore".to_string(),
        });
        let json = serde_json::to_string(&config).unwrap();
        let pos = |key: &str| json.find(key).unwrap_or_else(|| panic!("missing {key}"));
        assert!(pos("siteName") < pos("siteUrl"));
        assert!(pos("siteUrl") < pos("businessType"));
        assert!(pos("uniqueValue") < pos("defaultImage"));
        assert!(pos("defaultImage") < pos("structuredData"));
        assert!(json.contains(r#""structuredData":{"type":"OnlineStore"}"#));
    }

    #[test]
    fn test_round_trip_preserves_empty_competitors() {
        let mut config = minimal_config();
        config.seo_strategy = Some(SeoStrategy {
            primary_goal: PrimaryGoal::Leads,
            target_keywords: vec!["acme".to_string()],
            competitors: Some(vec![]),
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""competitors":[]"#));
        let back: SeoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_render_fallbacks() {
        let config = minimal_config();
        assert_eq!(config.author_or_business(), "Acme Inc");
        assert_eq!(config.image_path(), "/og-image.png");
        assert_eq!(config.image_url(), "https://acme.test/og-image.png");
        assert_eq!(config.locale_or_default(), "en_US");
        assert_eq!(config.theme_color_or_default(), "#ffffff");
        assert_eq!(config.schema_type(), "Organization");

        let mut custom = minimal_config();
        custom.author = Some("Jane".to_string());
        custom.default_image = Some("/hero.png".to_string());
        custom.structured_data = Some(StructuredData {
            schema_type: "OnlineStore".to_string(),
        });
        assert_eq!(custom.author_or_business(), "Jane");
        assert_eq!(custom.image_url(), "https://acme.test/hero.png");
        assert_eq!(custom.schema_type(), "OnlineStore");
    }

    #[test]
    fn test_primary_goal_serde_and_display() {
        assert_eq!(
            serde_json::to_string(&PrimaryGoal::Awareness).unwrap(),
            r#""awareness""#
        );
        let goal: PrimaryGoal = serde_json::from_str(r#""sales""#).unwrap();
        assert_eq!(goal, PrimaryGoal::Sales);
        assert_eq!(PrimaryGoal::Traffic.to_string(), "traffic");
    }

    #[test]
    fn test_group_emptiness() {
        assert!(Social::default().is_empty());
        assert!(Contact::default().is_empty());
        let social = Social {
            github: Some("acme".to_string()),
            ..Social::default()
        };
        assert!(!social.is_empty());
    }
}
