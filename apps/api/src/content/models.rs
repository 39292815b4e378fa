//! Data model for content acquisition: the business descriptors coming in
//! and the structured content record going out.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder audience used when the caller leaves the field blank.
pub const DEFAULT_AUDIENCE: &str = "General public";

/// Tones the product UI offers. Unrecognized values are accepted as free
/// text, never rejected; this catalog documents the expected set and seeds
/// the UI dropdown.
pub const RECOGNIZED_TONES: &[&str] = &[
    "Professional",
    "Friendly",
    "Casual",
    "Formal",
    "Creative",
    "Authoritative",
    "Conversational",
    "Inspiring",
    "Motivational",
];

/// Business descriptors for one generation request. Constructed per request,
/// never mutated, discarded after one render.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessInputs {
    // Every field defaults to empty: a missing required field is reported
    // through the pipeline's validation message, not a deserialization error.
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tone: String,
}

impl BusinessInputs {
    /// The audience to use in copy: the caller's value, or the generic
    /// placeholder when blank.
    pub fn audience_or_default(&self) -> &str {
        if self.audience.trim().is_empty() {
            DEFAULT_AUDIENCE
        } else {
            &self.audience
        }
    }
}

/// One entry in the services or features list. Ordering is significant:
/// list position determines visual order and icon assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub title: String,
    pub description: String,
}

/// The structured content payload populating one document.
///
/// Wire contract with the generative backend: every field below is required
/// (a missing field is a parse failure) and extra fields are ignored.
/// `services` and `features` are expected to hold 4 entries each, but the
/// renderer tolerates any length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub page_title: String,
    pub meta_description: String,
    pub main_headline: String,
    pub subheadline: String,
    pub about_text: String,
    pub cta_text: String,
    pub services: Vec<SectionEntry>,
    pub features: Vec<SectionEntry>,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("content record has a blank {0}")]
    BlankField(&'static str),
}

impl ContentRecord {
    /// Checks that every string field carries usable text. A record failing
    /// this check is a contract violation by the provider, not a content gap:
    /// the generative path falls back on it, and the renderer refuses it.
    /// Empty services/features lists are allowed.
    pub fn validate(&self) -> Result<(), RecordError> {
        let fields: [(&'static str, &str); 6] = [
            ("page_title", &self.page_title),
            ("meta_description", &self.meta_description),
            ("main_headline", &self.main_headline),
            ("subheadline", &self.subheadline),
            ("about_text", &self.about_text),
            ("cta_text", &self.cta_text),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(RecordError::BlankField(name));
            }
        }
        for entry in self.services.iter().chain(self.features.iter()) {
            if entry.title.trim().is_empty() {
                return Err(RecordError::BlankField("entry title"));
            }
            if entry.description.trim().is_empty() {
                return Err(RecordError::BlankField("entry description"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ContentRecord {
        ContentRecord {
            page_title: "Acme Co - Leading Consulting Solutions".to_string(),
            meta_description: "Discover Acme Co.".to_string(),
            main_headline: "Welcome to Acme Co".to_string(),
            subheadline: "Your trusted partner.".to_string(),
            about_text: "Acme Co is a leading company.".to_string(),
            cta_text: "Get Started Today".to_string(),
            services: vec![SectionEntry {
                title: "Consulting".to_string(),
                description: "Expert advice.".to_string(),
            }],
            features: vec![],
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(make_record().validate().is_ok());
    }

    #[test]
    fn test_blank_headline_rejected() {
        let mut record = make_record();
        record.main_headline = "   ".to_string();
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("main_headline"));
    }

    #[test]
    fn test_blank_entry_description_rejected() {
        let mut record = make_record();
        record.services[0].description = String::new();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_empty_lists_are_allowed() {
        let mut record = make_record();
        record.services.clear();
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_missing_field_is_a_parse_failure() {
        // No cta_text: the wire contract requires all nine fields.
        let json = r#"{
            "page_title": "t", "meta_description": "d", "main_headline": "h",
            "subheadline": "s", "about_text": "a",
            "services": [], "features": []
        }"#;
        let result: Result<ContentRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{
            "page_title": "t", "meta_description": "d", "main_headline": "h",
            "subheadline": "s", "about_text": "a", "cta_text": "c",
            "services": [], "features": [],
            "testimonials": ["unexpected"]
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.page_title, "t");
    }

    #[test]
    fn test_audience_default_applied_when_blank() {
        let inputs = BusinessInputs {
            business_name: "Acme Co".to_string(),
            industry: "Consulting".to_string(),
            audience: "  ".to_string(),
            keywords: String::new(),
            tone: String::new(),
        };
        assert_eq!(inputs.audience_or_default(), DEFAULT_AUDIENCE);
    }

    #[test]
    fn test_unrecognized_tone_is_accepted_as_free_text() {
        let json = r#"{
            "business_name": "Acme Co",
            "industry": "Consulting",
            "tone": "Swashbuckling"
        }"#;
        let inputs: BusinessInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.tone, "Swashbuckling");
        assert!(!RECOGNIZED_TONES.contains(&inputs.tone.as_str()));
    }
}
