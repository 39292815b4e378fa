// All LLM prompt constants for the content module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for content generation — enforces JSON-only output.
pub const CONTENT_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Content generation prompt template.
/// Replace: {business_name}, {industry}, {audience}, {keywords}, {tone}
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Generate marketing website copy for {business_name}, a business in the {industry} industry targeting {audience}.
SEO keywords: {keywords}
Tone of voice: {tone}

Return a JSON object with this EXACT schema (no extra fields):
{
  "page_title": "concise browser/SEO title naming the business and industry",
  "meta_description": "one-sentence search snippet",
  "main_headline": "hero headline welcoming the visitor",
  "subheadline": "one sentence expanding the headline",
  "about_text": "2-3 sentence company introduction",
  "cta_text": "short call-to-action button label",
  "services": [
    {"title": "service name", "description": "one sentence"}
  ],
  "features": [
    {"title": "reason to choose the business", "description": "one sentence"}
  ]
}

Rules:
- `services` and `features` must each contain exactly 4 entries.
- Every field must be non-empty and written in the requested tone.
- Weave the SEO keywords into the copy naturally — never keyword-stuff."#;

/// Fills the content prompt template from the request's descriptors.
pub fn build_content_prompt(
    business_name: &str,
    industry: &str,
    audience: &str,
    keywords: &str,
    tone: &str,
) -> String {
    CONTENT_PROMPT_TEMPLATE
        .replace("{business_name}", business_name)
        .replace("{industry}", industry)
        .replace("{audience}", audience)
        .replace("{keywords}", keywords)
        .replace("{tone}", tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_five_descriptors() {
        let prompt = build_content_prompt(
            "Acme Co",
            "Consulting",
            "SMBs",
            "consulting,strategy",
            "Professional",
        );
        assert!(prompt.contains("Acme Co"));
        assert!(prompt.contains("Consulting"));
        assert!(prompt.contains("SMBs"));
        assert!(prompt.contains("consulting,strategy"));
        assert!(prompt.contains("Professional"));
        // No placeholder left unfilled
        assert!(!prompt.contains("{business_name}"));
        assert!(!prompt.contains("{tone}"));
    }

    #[test]
    fn test_prompt_names_every_record_field() {
        for field in [
            "page_title",
            "meta_description",
            "main_headline",
            "subheadline",
            "about_text",
            "cta_text",
            "services",
            "features",
        ] {
            assert!(
                CONTENT_PROMPT_TEMPLATE.contains(field),
                "prompt must ask for {field}"
            );
        }
    }
}
