use thiserror::Error;

use crate::config::ConfigError;
use crate::source::QuoteSourceError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("configuration failure: {0}")]
    Configuration(#[from] ConfigError),
    #[error("quote source failure: {0}")]
    QuoteSource(#[from] QuoteSourceError),
    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl ApplicationError {
    /// Stable machine-readable class reported by operator tooling.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "config_validation",
            Self::QuoteSource(QuoteSourceError::ReadFile { .. }) => "quote_unreadable",
            Self::QuoteSource(QuoteSourceError::UnsupportedFormat(_)) => "quote_format",
            Self::QuoteSource(QuoteSourceError::OutOfRange { .. }) => "quote_out_of_range",
            Self::QuoteSource(_) => "quote_parse",
            Self::Serialization(_) => "serialization",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 2,
            Self::QuoteSource(_) => 3,
            Self::Serialization(_) => 5,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "Configuration is invalid. Run `devis config` to inspect it.",
            Self::QuoteSource(_) => "The quote could not be loaded. Check the file path and format.",
            Self::Serialization(_) => "The result could not be serialized.",
        }
    }
}
