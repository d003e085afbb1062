use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use devis_core::config::AppConfig;
use toml::Value;

pub fn run(config: &AppConfig, explicit_path: Option<&Path>) -> String {
    let config_file_path = detect_config_path(explicit_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines =
        vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "display.currency",
        &config.display.currency,
        source("display.currency", &["DEVIS_DISPLAY_CURRENCY"]),
    ));
    lines.push(render_line(
        "display.decimals",
        &config.display.decimals.to_string(),
        source("display.decimals", &["DEVIS_DISPLAY_DECIMALS"]),
    ));

    let directory = config
        .quotes
        .directory
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<unset>".to_string());
    lines.push(render_line(
        "quotes.directory",
        &directory,
        source("quotes.directory", &["DEVIS_QUOTES_DIRECTORY"]),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["DEVIS_LOGGING_LEVEL", "DEVIS_LOG_LEVEL"]),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        source("logging.format", &["DEVIS_LOGGING_FORMAT", "DEVIS_LOG_FORMAT"]),
    ));

    lines.join("\n")
}

fn detect_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    let root = PathBuf::from("devis.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/devis.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
