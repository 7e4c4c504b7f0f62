// src/inspector/error.rs

use thiserror::Error;

/// Failures surfaced by the inspector core.
///
/// None of these escape a redraw: the pipeline logs them and skips the affected
/// member for the current frame. The foldout maintenance commands return them to
/// the caller.
#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("Type information unavailable for '{0}'")]
    MissingTypeInfo(String),
    #[error("'{0}' is not a reflected struct")]
    NotAStruct(String),
    #[error("Field '{field}' unavailable on '{owner}'")]
    FieldUnavailable { owner: String, field: String },
    #[error("Failed to write '{field}' back into '{owner}': {reason}")]
    WriteBack {
        owner: String,
        field: String,
        reason: String,
    },
    #[error("Registered member '{member}' does not accept this target (expected {expected})")]
    TargetMismatch {
        member: String,
        expected: &'static str,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InspectorResult<T> = Result<T, InspectorError>;
