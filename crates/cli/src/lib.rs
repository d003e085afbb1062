pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use devis_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use devis_core::ApplicationError;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "devis",
    about = "Devis quote pricing CLI",
    long_about = "Price quote snapshots, audit their references, and produce document-ready totals.",
    after_help = "Examples:\n  devis price quotes/acme.toml\n  devis price quotes/acme.json --json\n  devis check quotes/acme.toml\n  devis document quotes/acme.toml\n  devis config"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a devis.toml configuration file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override logging.level (trace|debug|info|warn|error)")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Override logging.format (compact|pretty|json)")]
    log_format: Option<String>,
    #[arg(long, global = true, help = "Override display.currency")]
    currency: Option<String>,
    #[arg(long, global = true, help = "Override display.decimals")]
    decimals: Option<u32>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compute day and monetary totals for a quote file")]
    Price {
        #[arg(help = "Quote file (.json or .toml), relative to quotes.directory when set")]
        quote: String,
        #[arg(long, help = "Emit full-precision JSON output")]
        json: bool,
    },
    #[command(about = "List references that pricing would silently treat as zero")]
    Check {
        #[arg(help = "Quote file (.json or .toml), relative to quotes.directory when set")]
        quote: String,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Emit the priced line-item table and tax breakdown as JSON")]
    Document {
        #[arg(help = "Quote file (.json or .toml), relative to quotes.directory when set")]
        quote: String,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::from_error(command_name(&cli.command), &error);
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };

    if let Err(error) = logging::init_logging(&config) {
        eprintln!("{error:#}");
    }

    let correlation_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "command",
        command = command_name(&cli.command),
        correlation_id = %correlation_id
    );
    let _entered = span.enter();

    let result = match &cli.command {
        Command::Price { quote, json } => commands::price::run(&config, quote, *json),
        Command::Check { quote, json } => commands::check::run(&config, quote, *json),
        Command::Document { quote } => commands::document::run(&config, quote),
        Command::Config => {
            commands::CommandResult::output(commands::config::run(&config, cli.config.as_deref()))
        }
    };

    tracing::debug!(
        event_name = "cli.command.finished",
        exit_code = result.exit_code,
        "command finished"
    );
    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn load_config(cli: &Cli) -> Result<AppConfig, ApplicationError> {
    let log_format = cli.log_format.as_deref().map(str::parse::<LogFormat>).transpose()?;

    let config = AppConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides {
            currency: cli.currency.clone(),
            decimals: cli.decimals,
            quotes_directory: None,
            log_level: cli.log_level.clone(),
            log_format,
        },
    })?;
    Ok(config)
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Price { .. } => "price",
        Command::Check { .. } => "check",
        Command::Document { .. } => "document",
        Command::Config => "config",
    }
}
