use devis_core::config::{AppConfig, DisplayConfig};
use devis_core::{CalculatedQuoteData, DeterministicQuoteCalculator, Quote, QuoteCalculator};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::commands::{load_quote, to_json, CommandResult};

pub fn run(config: &AppConfig, quote_ref: &str, json_output: bool) -> CommandResult {
    let quote = match load_quote(config, quote_ref) {
        Ok(quote) => quote,
        Err(error) => return CommandResult::from_error("price", &error),
    };
    let calculated = DeterministicQuoteCalculator.calculate(&quote);

    if json_output {
        return match to_json(&calculated) {
            Ok(output) => CommandResult::output(output),
            Err(error) => CommandResult::from_error("price", &error),
        };
    }

    CommandResult::output(render_human(&quote, &calculated, &config.display))
}

pub fn render_human(quote: &Quote, data: &CalculatedQuoteData, display: &DisplayConfig) -> String {
    let money = |value: Decimal| format_money(value, display);
    let mut lines = Vec::new();

    let title: &str =
        if quote.metadata.title.is_empty() { "untitled" } else { &quote.metadata.title };
    lines.push(format!("quote {} ({title})", quote.id.0));

    lines.push(String::new());
    lines.push("costing:".to_string());
    if data.costing_details.is_empty() {
        lines.push("  (none)".to_string());
    }
    for detail in &data.costing_details {
        lines.push(format!(
            "  - {} / {} / {} [{}] x{} = {} d @ {} = {}",
            detail.category,
            detail.activity,
            detail.component,
            detail.complexity,
            format_days(detail.coefficient),
            format_days(detail.days),
            money(detail.daily_rate),
            money(detail.amount),
        ));
    }

    if !data.transverse_details.is_empty() {
        lines.push(String::new());
        lines.push("transverse:".to_string());
        for detail in &data.transverse_details {
            lines.push(format!(
                "  - L{} {} ({}, {} {}) = {} d @ {} = {}",
                detail.level,
                detail.activity,
                detail.profile,
                detail.kind,
                format_days(detail.value),
                format_days(detail.days),
                money(detail.daily_rate),
                money(detail.amount),
            ));
        }
    }

    lines.push(String::new());
    lines.push("profiles:".to_string());
    for summary in &data.profile_summary {
        lines.push(format!(
            "  - {}: {} d @ {} = {}",
            summary.profile,
            format_days(summary.total_days),
            money(summary.daily_rate),
            money(summary.amount),
        ));
    }

    lines.push(String::new());
    lines.push("categories:".to_string());
    for summary in &data.category_summary {
        lines.push(format!(
            "  - {}: {} d = {}",
            summary.category,
            format_days(summary.total_days),
            money(summary.total_amount),
        ));
    }

    lines.push(String::new());
    lines.push(format!("total days: {}", format_days(data.total_days)));
    lines.push(format!("total HT:   {}", money(data.total_ht)));
    lines.push(format!("VAT:        {}", money(data.total_tva)));
    lines.push(format!("total TTC:  {}", money(data.total_ttc)));

    lines.join("\n")
}

/// Rounds for display only.
pub fn format_money(value: Decimal, display: &DisplayConfig) -> String {
    let rounded =
        value.round_dp_with_strategy(display.decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*} {}", display.decimals as usize, rounded, display.currency)
}

pub fn format_days(value: Decimal) -> String {
    value.normalize().to_string()
}
