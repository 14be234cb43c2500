//! Configuration synthesis: answer record in, normalized profile out.

use std::path::Path;

use tracing::debug;

use crate::config::answers::{non_empty, split_csv, SeoAnswers};
use crate::config::model::{
    Contact, Location, SeoConfig, SeoStrategy, Social, StructuredData, DEFAULT_IMAGE,
    DEFAULT_LOCALE, DEFAULT_THEME_COLOR,
};
use crate::config::schema::structured_data_type;

/// Country recorded for local businesses that left the question blank.
const DEFAULT_COUNTRY: &str = "United States";
/// Site name used when no project name can be determined at all.
const FALLBACK_NAME: &str = "My Website";

/// Build a complete [`SeoConfig`] from an answer record.
///
/// Pure and infallible: the record is assumed to have passed
/// [`SeoAnswers::validate`], and everything here is normalization plus
/// conditional assembly. The same record always produces the same profile.
pub fn build_config(answers: &SeoAnswers) -> SeoConfig {
    let site_url = answers.site_url.trim_end_matches('/').to_string();

    let location = if answers.is_local {
        Some(Location {
            street_address: non_empty(answers.street_address.as_deref()),
            city: non_empty(answers.city.as_deref()).unwrap_or_default(),
            state: non_empty(answers.state.as_deref()),
            postal_code: non_empty(answers.postal_code.as_deref()),
            country: non_empty(answers.country.as_deref())
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        })
    } else {
        None
    };

    let contact = if answers.is_local {
        let contact = Contact {
            phone: non_empty(answers.phone.as_deref()),
            email: non_empty(answers.email.as_deref()),
            hours: non_empty(answers.hours.as_deref()),
        };
        if contact.is_empty() {
            None
        } else {
            Some(contact)
        }
    } else {
        None
    };

    let social = {
        let social = Social {
            twitter: non_empty(answers.twitter.as_deref()),
            facebook: non_empty(answers.facebook.as_deref()),
            instagram: non_empty(answers.instagram.as_deref()),
            linkedin: non_empty(answers.linkedin.as_deref()),
            youtube: non_empty(answers.youtube.as_deref()),
            github: non_empty(answers.github.as_deref()),
        };
        if social.is_empty() {
            None
        } else {
            Some(social)
        }
    };

    let schema_type = structured_data_type(&answers.business_type, answers.is_local);
    debug!(
        "classified {:?} (local: {}) as {schema_type}",
        answers.business_type, answers.is_local
    );

    SeoConfig {
        site_name: answers.business_name.clone(),
        site_url,
        business_type: answers.business_type.clone(),
        description: answers.description.clone(),
        keywords: split_csv(&answers.keywords),
        business_name: answers.business_name.clone(),
        target_audience: answers.target_audience.clone(),
        unique_value: answers.unique_value.clone(),
        default_image: Some(DEFAULT_IMAGE.to_string()),
        theme_color: Some(DEFAULT_THEME_COLOR.to_string()),
        locale: Some(DEFAULT_LOCALE.to_string()),
        author: non_empty(answers.author.as_deref()),
        is_local: answers.is_local,
        location,
        contact,
        social,
        seo_strategy: Some(SeoStrategy {
            primary_goal: answers.primary_goal,
            target_keywords: split_csv(&answers.target_keywords),
            competitors: answers.competitors.as_deref().map(split_csv),
        }),
        structured_data: Some(StructuredData {
            schema_type: schema_type.to_string(),
        }),
    }
}

/// Synthesize the zero-information fallback profile for a project.
///
/// Only the project name is consulted: the `name` field of the target's
/// `package.json` when that file parses, otherwise the directory name. The
/// result is used in memory and never persisted, so a later `setup` starts
/// from a clean slate.
pub fn default_config(project: &Path) -> SeoConfig {
    let name = project_name(project);
    debug!("building default profile for {name:?}");
    SeoConfig {
        site_name: name.clone(),
        site_url: "https://example.com".to_string(),
        business_type: "Corporate/Business".to_string(),
        description: format!("{name} - built with masthead"),
        keywords: vec!["website".to_string(), name.to_lowercase()],
        business_name: name,
        target_audience: "General audience".to_string(),
        unique_value: "Quality products and services".to_string(),
        default_image: None,
        theme_color: None,
        locale: None,
        author: None,
        is_local: false,
        location: None,
        contact: None,
        social: None,
        seo_strategy: None,
        structured_data: Some(StructuredData {
            schema_type: "Organization".to_string(),
        }),
    }
}

/// Best-effort project name. A manifest that exists but does not parse is
/// treated the same as no manifest at all.
fn project_name(project: &Path) -> String {
    let manifest = std::fs::read_to_string(project.join("package.json"))
        .ok()
        .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok());

    match manifest {
        Some(value) => value
            .get("name")
            .and_then(|name| name.as_str())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_NAME.to_string()),
        None => project
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_NAME.to_string()),
    }
}
