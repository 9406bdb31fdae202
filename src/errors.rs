use thiserror::Error;

/// Defect-level failures only. Expected domain conditions (unknown catalog
/// id, malformed MPAN, electrical mismatch, missing optional string values)
/// are represented as data in the relevant result types, never as errors
/// here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Form snapshot was considered invalid due to error: {0}")]
    InvalidFormData(#[from] anyhow::Error),
}
