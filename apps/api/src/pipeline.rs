//! Generation pipeline — validate inputs, acquire content, render.
//!
//! Errors stay typed (`AppError`) through the pipeline and are flattened to
//! a display string only at the outermost step, `generate_display`. The
//! leading `❌ ` marker is the contract with the UI layer: it branches on
//! that prefix to decide between rendering the document and showing a
//! message.

use chrono::{Datelike, Utc};
use tracing::info;

use crate::content::models::BusinessInputs;
use crate::content::provider::ContentProvider;
use crate::errors::AppError;
use crate::render;

/// Marker prefixing every user-facing failure string.
pub const FAILURE_MARKER: &str = "❌";

/// Runs one generation request end to end and returns the document.
///
/// Input validation happens before any content acquisition; a blank
/// business name or industry never reaches the provider. The provider
/// itself cannot fail (backend failures degrade to template content inside
/// it), so the only errors past validation are renderer contract faults.
pub async fn generate_site(
    provider: &dyn ContentProvider,
    inputs: &BusinessInputs,
) -> Result<String, AppError> {
    if inputs.business_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a business name.".to_string(),
        ));
    }
    if inputs.industry.trim().is_empty() {
        return Err(AppError::Validation("Please enter an industry.".to_string()));
    }

    info!(
        "Generating website for {} in {}",
        inputs.business_name, inputs.industry
    );

    let record = provider.produce(inputs).await;

    // A record failing validation here is a provider contract breach,
    // fatal for this request. Not a recoverable content gap.
    record
        .validate()
        .map_err(|e| AppError::Render(e.to_string()))?;

    Ok(render::render(&record, inputs, Utc::now().year()))
}

/// Boundary flattening: the UI layer receives either the document or a
/// display-ready message starting with the failure marker.
pub async fn generate_display(provider: &dyn ContentProvider, inputs: &BusinessInputs) -> String {
    match generate_site(provider, inputs).await {
        Ok(document) => document,
        Err(e) => format!("{FAILURE_MARKER} {}", e.display_message()),
    }
}
