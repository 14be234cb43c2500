//! The flat answer record and its boundary validation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::model::PrimaryGoal;
use crate::error::ValidationError;

/// Raw answers describing the business, as collected by whatever front end
/// gathered them: a prompt loop, a web form, or a checked-in JSON file.
///
/// Optional fields are genuinely optional, and empty or whitespace-only
/// answers are treated as absent during synthesis. List-valued questions
/// arrive as comma-separated strings and are tokenized later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnswers {
    pub business_name: String,
    pub site_url: String,
    pub business_type: String,
    pub description: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub target_audience: String,
    pub unique_value: String,
    pub is_local: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    pub primary_goal: PrimaryGoal,
    /// Comma-separated priority keyword list.
    pub target_keywords: String,
    /// Comma-separated competitor list; `None` when never asked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

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

impl SeoAnswers {
    /// Check the presence rules that synthesis assumes.
    ///
    /// Synthesis itself never rejects input, so this is the only gate:
    /// business name non-empty, description longer than 10 characters, site
    /// URL parseable, and a city whenever local SEO is enabled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.business_name.is_empty() {
            return Err(ValidationError::MissingBusinessName);
        }
        if self.description.chars().count() <= 10 {
            return Err(ValidationError::DescriptionTooShort);
        }
        if let Err(e) = Url::parse(&self.site_url) {
            return Err(ValidationError::InvalidSiteUrl {
                url: self.site_url.clone(),
                reason: e.to_string(),
            });
        }
        if self.is_local && non_empty(self.city.as_deref()).is_none() {
            return Err(ValidationError::MissingCity);
        }
        Ok(())
    }
}

/// Split a comma-separated answer into trimmed, non-empty tokens.
pub(crate) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Treat empty or whitespace-only optional answers as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Fully valid non-local record shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_answers() -> SeoAnswers {
    SeoAnswers {
        business_name: "Tidewater Coffee".to_string(),
        site_url: "https://tidewater.coffee".to_string(),
        business_type: "Restaurant/Food".to_string(),
        description: "Small-batch coffee roasted on the Oregon coast".to_string(),
        keywords: "coffee, roastery, oregon".to_string(),
        target_audience: "Coffee drinkers in the Pacific Northwest".to_string(),
        unique_value: "Beans roasted within sight of the ocean".to_string(),
        is_local: false,
        street_address: None,
        city: None,
        state: None,
        postal_code: None,
        country: None,
        phone: None,
        email: None,
        hours: None,
        primary_goal: PrimaryGoal::Sales,
        target_keywords: "coffee roastery, oregon coffee".to_string(),
        competitors: None,
        author: None,
        twitter: None,
        facebook: None,
        instagram: None,
        linkedin: None,
        youtube: None,
        github: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_answers_pass() {
        assert_eq!(sample_answers().validate(), Ok(()));
    }

    #[test]
    fn test_empty_business_name_rejected() {
        let mut answers = sample_answers();
        answers.business_name = String::new();
        assert_eq!(
            answers.validate(),
            Err(ValidationError::MissingBusinessName)
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut answers = sample_answers();
        answers.description = "ten chars!".to_string();
        assert_eq!(answers.validate(), Err(ValidationError::DescriptionTooShort));
        answers.description = "eleven char".to_string();
        assert_eq!(answers.validate(), Ok(()));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let mut answers = sample_answers();
        answers.site_url = "tidewater.coffee".to_string();
        match answers.validate() {
            Err(ValidationError::InvalidSiteUrl { url, .. }) => {
                assert_eq!(url, "tidewater.coffee");
            }
            other => panic!("expected InvalidSiteUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_local_without_city_rejected() {
        let mut answers = sample_answers();
        answers.is_local = true;
        assert_eq!(answers.validate(), Err(ValidationError::MissingCity));
        answers.city = Some("   ".to_string());
        assert_eq!(answers.validate(), Err(ValidationError::MissingCity));
        answers.city = Some("Astoria".to_string());
        assert_eq!(answers.validate(), Ok(()));
    }

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv(" coffee,  roastery ,, oregon ,"),
            vec!["coffee", "roastery", "oregon"]
        );
        assert!(split_csv("").is_empty());
        assert!(split_csv(" , ,").is_empty());
    }

    #[test]
    fn test_non_empty_filters_blank_answers() {
        assert_eq!(non_empty(Some(" @acme ")), Some("@acme".to_string()));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let raw = r#"{
            "businessName": "Tidewater Coffee",
            "siteUrl": "https://tidewater.coffee",
            "businessType": "Restaurant/Food",
            "description": "Small-batch coffee roasted on the Oregon coast",
            "keywords": "coffee, roastery",
            "targetAudience": "Coffee drinkers",
            "uniqueValue": "Ocean-side roasting",
            "isLocal": false,
            "primaryGoal": "sales",
            "targetKeywords": "coffee roastery"
        }"#;
        let answers: SeoAnswers = serde_json::from_str(raw).unwrap();
        assert_eq!(answers.city, None);
        assert_eq!(answers.competitors, None);
        assert_eq!(answers.twitter, None);
        assert_eq!(answers.primary_goal, PrimaryGoal::Sales);
    }
}
