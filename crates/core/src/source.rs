use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::domain::quote::Quote;

/// Largest accepted daily rate, in currency units.
pub const MAX_DAILY_RATE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);
/// Largest accepted grid day estimate, coefficient or transverse value.
///
/// Together with [`MAX_DAILY_RATE`] this keeps every product and sum the
/// engine computes far inside `Decimal` range for any realistic quote size.
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

#[derive(Debug, Error)]
pub enum QuoteSourceError {
    #[error("could not read quote file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse JSON quote `{path}`: {source}")]
    ParseJson { path: PathBuf, source: serde_json::Error },
    #[error("could not parse TOML quote `{path}`: {source}")]
    ParseToml { path: PathBuf, source: toml::de::Error },
    #[error("unsupported quote file extension for `{0}` (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
    #[error("quote `{path}`: {field} = {value} exceeds the accepted magnitude {limit}")]
    OutOfRange { path: PathBuf, field: String, value: Decimal, limit: Decimal },
}

/// Hands out fully materialized quote snapshots.
pub trait QuoteSource: Send + Sync {
    fn load(&self, reference: &str) -> Result<Quote, QuoteSourceError>;
}

/// Reads quotes from `.json` or `.toml` files. Relative references resolve
/// against `base_dir` when one is set.
#[derive(Clone, Debug, Default)]
pub struct FileQuoteSource {
    base_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteFormat {
    Json,
    Toml,
}

impl FileQuoteSource {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn resolve_path(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.base_dir {
            Some(base_dir) if path.is_relative() => base_dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl QuoteSource for FileQuoteSource {
    fn load(&self, reference: &str) -> Result<Quote, QuoteSourceError> {
        let path = self.resolve_path(reference);
        let format = detect_format(&path)?;
        let raw = fs::read_to_string(&path)
            .map_err(|source| QuoteSourceError::ReadFile { path: path.clone(), source })?;

        let quote = match format {
            QuoteFormat::Json => serde_json::from_str::<Quote>(&raw)
                .map_err(|source| QuoteSourceError::ParseJson { path: path.clone(), source })?,
            QuoteFormat::Toml => toml::from_str::<Quote>(&raw)
                .map_err(|source| QuoteSourceError::ParseToml { path: path.clone(), source })?,
        };
        check_magnitudes(&quote).map_err(|(field, value, limit)| {
            QuoteSourceError::OutOfRange { path: path.clone(), field, value, limit }
        })?;

        debug!(
            event_name = "source.quote.loaded",
            quote_id = %quote.id.0,
            path = %path.display(),
            "quote snapshot loaded"
        );
        Ok(quote)
    }
}

fn detect_format(path: &Path) -> Result<QuoteFormat, QuoteSourceError> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Ok(QuoteFormat::Json),
        Some("toml") => Ok(QuoteFormat::Toml),
        _ => Err(QuoteSourceError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// First numeric input whose magnitude is above its limit, as
/// `(field, value, limit)`.
fn check_magnitudes(quote: &Quote) -> Result<(), (String, Decimal, Decimal)> {
    let within = |field: String, value: Decimal, limit: Decimal| {
        if value.abs() > limit {
            Err((field, value, limit))
        } else {
            Ok(())
        }
    };

    for profile in &quote.profiles {
        within(format!("profiles[{}].daily_rate", profile.name), profile.daily_rate, MAX_DAILY_RATE)?;
    }
    for entry in &quote.pricing_grid {
        let days = &entry.days_per_tier;
        for (tier, value) in [
            ("very-simple", days.very_simple),
            ("simple", days.simple),
            ("medium", days.medium),
            ("complex", days.complex),
            ("very-complex", days.very_complex),
        ] {
            within(
                format!("pricing_grid[{}].days_per_tier.{tier}", entry.component_name),
                value,
                MAX_QUANTITY,
            )?;
        }
    }
    for category in &quote.costing_categories {
        for activity in &category.activities {
            for component in &activity.components {
                within(
                    format!(
                        "{} / {} / {}.coefficient",
                        category.name, activity.name, component.component_name
                    ),
                    component.coefficient,
                    MAX_QUANTITY,
                )?;
            }
        }
    }
    for level in &quote.transverse_levels {
        for activity in &level.activities {
            within(
                format!("transverse level {} / {}.value", level.level, activity.name),
                activity.value,
                MAX_QUANTITY,
            )?;
        }
    }
    Ok(())
}
