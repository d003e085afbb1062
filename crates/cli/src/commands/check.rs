use devis_core::config::AppConfig;
use devis_core::{audit_references, ReferenceReport};

use crate::commands::{load_quote, to_json, CommandResult};

pub const FINDINGS_EXIT_CODE: u8 = 4;

/// Reports the references pricing would silently zero out. Exits non-zero
/// when the quote is not clean, without touching its totals.
pub fn run(config: &AppConfig, quote_ref: &str, json_output: bool) -> CommandResult {
    let quote = match load_quote(config, quote_ref) {
        Ok(quote) => quote,
        Err(error) => return CommandResult::from_error("check", &error),
    };
    let report = audit_references(&quote);
    let exit_code = if report.clean { 0 } else { FINDINGS_EXIT_CODE };

    let output = if json_output {
        match to_json(&report) {
            Ok(output) => output,
            Err(error) => return CommandResult::from_error("check", &error),
        }
    } else {
        render_human(&quote.id.0, &report)
    };

    CommandResult { exit_code, output }
}

fn render_human(quote_id: &str, report: &ReferenceReport) -> String {
    if report.clean {
        return format!("check {quote_id}: all references resolve");
    }

    let mut lines =
        vec![format!("check {quote_id}: {} unresolved reference(s)", report.findings.len())];
    for finding in &report.findings {
        lines.push(format!(
            "- [{}] {}: {}",
            finding.code.as_str(),
            finding.location,
            finding.message
        ));
    }
    lines.join("\n")
}
