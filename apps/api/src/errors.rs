use thiserror::Error;

/// Application-level error type for the generation pipeline.
///
/// Backend (completion-service) failures never appear here: they are fully
/// absorbed inside the content provider by the deterministic fallback. Only
/// input validation and unexpected renderer faults reach the caller, and
/// they are flattened to display text at the outermost boundary — see
/// `pipeline::generate_display`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The user-facing message, without the failure marker. Validation
    /// messages are shown as written; render/internal faults get a generic
    /// wrapper carrying the low-level cause.
    pub fn display_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Render(msg) => {
                tracing::error!("Render fault: {msg}");
                format!("Error generating website: {msg}")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                format!("Error generating website: {e}")
            }
        }
    }
}
