// src/error.rs

//! Unified error handling for the extractor.

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Record extraction failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// A field of an interview or review record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Date,
    Title,
    Rating,
    Application,
    Process,
    Questions,
    Pros,
    Cons,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Date => "date",
            Field::Title => "title",
            Field::Rating => "rating",
            Field::Application => "application",
            Field::Process => "process",
            Field::Questions => "questions",
            Field::Pros => "pros",
            Field::Cons => "cons",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure while pulling records out of a parsed page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The outer list container is absent; nothing can be extracted.
    #[error("failed to find {record} list container ({container})")]
    ContainerNotFound {
        record: &'static str,
        container: &'static str,
    },

    /// A required section is absent from a record fragment.
    #[error("failed to parse {record} {field}: not found")]
    MissingField { record: &'static str, field: Field },

    /// A section was found but its value could not be parsed.
    #[error("failed to parse {record} {field} from '{value}': {message}")]
    InvalidField {
        record: &'static str,
        field: Field,
        value: String,
        message: String,
    },

    /// Interview fragment without a date (featured or promotional entry).
    #[error("no date time")]
    NoDate,
}

impl ExtractError {
    /// Create a missing-section error.
    pub fn missing(record: &'static str, field: Field) -> Self {
        Self::MissingField { record, field }
    }

    /// Create a value parse error.
    pub fn invalid(
        record: &'static str,
        field: Field,
        value: impl Into<String>,
        message: impl fmt::Display,
    ) -> Self {
        Self::InvalidField {
            record,
            field,
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(*field),
            Self::NoDate => Some(Field::Date),
            Self::ContainerNotFound { .. } => None,
        }
    }
}
