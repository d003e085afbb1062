use devis_core::config::AppConfig;
use devis_core::{build_priced_document, calculate_quote};

use crate::commands::{load_quote, to_json, CommandResult};

pub fn run(config: &AppConfig, quote_ref: &str) -> CommandResult {
    let quote = match load_quote(config, quote_ref) {
        Ok(quote) => quote,
        Err(error) => return CommandResult::from_error("document", &error),
    };
    let document = build_priced_document(&quote, &calculate_quote(&quote));

    match to_json(&document) {
        Ok(output) => CommandResult::output(output),
        Err(error) => CommandResult::from_error("document", &error),
    }
}
