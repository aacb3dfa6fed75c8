//! Error types for the NHL roster table builder

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, NhlError>;

#[derive(Error, Debug)]
pub enum NhlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Birth date {birth_date} is after the age cutoff {cutoff}")]
    BirthAfterCutoff { birth_date: String, cutoff: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Column not found: {name}")]
    MissingColumn { name: String },

    #[error("Column index {index} out of range for {len} columns")]
    ColumnIndexOutOfRange { index: usize, len: usize },
}

/// Coarse classification used when a unit of work is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    NetworkFailure,
    NotFound,
    MalformedResponse,
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::NetworkFailure => "network failure",
            FailureKind::NotFound => "not found",
            FailureKind::MalformedResponse => "malformed response",
            FailureKind::Other => "other",
        };
        f.write_str(s)
    }
}

impl NhlError {
    pub fn not_found(what: impl Into<String>) -> Self {
        NhlError::NotFound { what: what.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        NhlError::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            NhlError::Http(e) if e.is_decode() => FailureKind::MalformedResponse,
            NhlError::Http(e) if e.status() == Some(reqwest::StatusCode::NOT_FOUND) => {
                FailureKind::NotFound
            }
            NhlError::Http(_) => FailureKind::NetworkFailure,
            NhlError::NotFound { .. } => FailureKind::NotFound,
            NhlError::Json(_)
            | NhlError::MalformedResponse { .. }
            | NhlError::InvalidDate { .. }
            | NhlError::BirthAfterCutoff { .. } => FailureKind::MalformedResponse,
            NhlError::Csv(_)
            | NhlError::Io(_)
            | NhlError::InvalidNumber(_)
            | NhlError::MissingColumn { .. }
            | NhlError::ColumnIndexOutOfRange { .. } => FailureKind::Other,
        }
    }
}
