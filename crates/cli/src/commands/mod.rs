pub mod check;
pub mod config;
pub mod document;
pub mod price;

use anyhow::Context;
use devis_core::config::AppConfig;
use devis_core::{ApplicationError, FileQuoteSource, Quote, QuoteSource};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn output(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_error(command: &str, error: &ApplicationError) -> Self {
        tracing::warn!(
            event_name = "cli.command.failed",
            command,
            error_class = error.error_class(),
            error = %error,
            "command failed"
        );
        Self::failure(command, error.error_class(), error.to_string(), error.exit_code())
    }
}

pub(crate) fn load_quote(config: &AppConfig, reference: &str) -> Result<Quote, ApplicationError> {
    let source = FileQuoteSource::new(config.quotes.directory.clone());
    Ok(source.load(reference)?)
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, ApplicationError> {
    serde_json::to_string_pretty(value)
        .context("rendering JSON output")
        .map_err(|error| ApplicationError::Serialization(format!("{error:#}")))
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
