//! Content providers — the two interchangeable strategies that turn
//! business descriptors into a `ContentRecord`.
//!
//! The active strategy is chosen once at startup from credential presence
//! and injected as a trait object; request handling never inspects the
//! environment. `produce` cannot fail: the generative strategy absorbs
//! every backend failure by substituting the template strategy's record,
//! whole — a partially generated, partially templated page risks tone and
//! factual inconsistency, so the fallback boundary is the full record.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::content::models::{BusinessInputs, ContentRecord, SectionEntry};
use crate::content::prompts::{build_content_prompt, CONTENT_SYSTEM};
use crate::llm_client::LlmClient;

/// Strategy interface for content acquisition. Implementations must be
/// usable concurrently from independent requests without shared state.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn produce(&self, inputs: &BusinessInputs) -> ContentRecord;
}

// ────────────────────────────────────────────────────────────────────────────
// Template strategy
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic template-fill strategy. Pure: identical inputs yield a
/// byte-identical record. The service and feature catalogs are fixed and
/// industry-agnostic on purpose — fallback output must stay predictable.
#[derive(Debug, Clone, Default)]
pub struct TemplateProvider;

impl TemplateProvider {
    pub fn fill(&self, inputs: &BusinessInputs) -> ContentRecord {
        let name = inputs.business_name.as_str();
        let industry = inputs.industry.as_str();
        let audience = inputs.audience_or_default();

        ContentRecord {
            page_title: format!("{name} - Leading {industry} Solutions"),
            meta_description: format!(
                "Discover {name}, your trusted partner in {industry}. \
                 We serve {audience} with professional excellence."
            ),
            main_headline: format!("Welcome to {name}"),
            subheadline: format!(
                "Your trusted partner in {industry}, dedicated to serving \
                 {audience} with excellence and innovation."
            ),
            about_text: format!(
                "{name} is a leading company in the {industry} industry, committed to \
                 delivering exceptional results for {audience}. Our team combines years \
                 of experience with cutting-edge technology to provide solutions that \
                 drive success."
            ),
            cta_text: "Get Started Today".to_string(),
            services: catalog(&[
                (
                    "Professional Consultation",
                    "Expert advice tailored to your specific needs and goals.",
                ),
                (
                    "Custom Solutions",
                    "Personalized approaches designed to address your unique challenges.",
                ),
                (
                    "Ongoing Support",
                    "24/7 customer support to ensure your continued success.",
                ),
                (
                    "Strategic Planning",
                    "Long-term strategies that align with your business objectives.",
                ),
            ]),
            features: catalog(&[
                (
                    "Proven Experience",
                    "Years of expertise with a track record of success.",
                ),
                (
                    "Quality Assurance",
                    "Rigorous quality control processes ensure exceptional results.",
                ),
                (
                    "Customer-Centric",
                    "Your success is our priority in everything we do.",
                ),
                (
                    "Innovation Focus",
                    "Cutting-edge solutions that keep you ahead of the competition.",
                ),
            ]),
        }
    }
}

fn catalog(entries: &[(&str, &str)]) -> Vec<SectionEntry> {
    entries
        .iter()
        .map(|(title, description)| SectionEntry {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

#[async_trait]
impl ContentProvider for TemplateProvider {
    async fn produce(&self, inputs: &BusinessInputs) -> ContentRecord {
        self.fill(inputs)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generative strategy
// ────────────────────────────────────────────────────────────────────────────

/// Generative strategy: one completion call, parsed and validated as the
/// full record. Any failure — HTTP, backend error, unparseable or
/// incomplete response — is logged for operators and answered with the
/// template strategy's record for the same inputs. No retry.
pub struct GenerativeProvider {
    llm: LlmClient,
    fallback: TemplateProvider,
}

impl GenerativeProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: TemplateProvider,
        }
    }

    async fn try_generate(&self, inputs: &BusinessInputs) -> Result<ContentRecord> {
        let prompt = build_content_prompt(
            &inputs.business_name,
            &inputs.industry,
            inputs.audience_or_default(),
            &inputs.keywords,
            &inputs.tone,
        );

        let record: ContentRecord = self.llm.call_json(&prompt, CONTENT_SYSTEM).await?;

        // Parsed but unusable counts as a malformed response.
        record.validate().context("generated record failed validation")?;

        Ok(record)
    }
}

#[async_trait]
impl ContentProvider for GenerativeProvider {
    async fn produce(&self, inputs: &BusinessInputs) -> ContentRecord {
        match self.try_generate(inputs).await {
            Ok(record) => {
                info!(
                    "Generated content for {} via completion service",
                    inputs.business_name
                );
                record
            }
            Err(e) => {
                warn!(
                    "Completion service failed for {}; falling back to template content: {e:#}",
                    inputs.business_name
                );
                self.fallback.fill(inputs)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
