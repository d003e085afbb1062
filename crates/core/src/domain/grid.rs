use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complexity selecting a day estimate from a pricing grid entry.
///
/// Symbols outside the five known tiers are kept verbatim in
/// [`ComplexityTier::Unrecognized`] instead of failing deserialization, so a
/// single mistyped component still lets the rest of the quote price out.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplexityTier {
    VerySimple,
    Simple,
    Medium,
    Complex,
    VeryComplex,
    Unrecognized(String),
}

impl ComplexityTier {
    pub const KNOWN: [ComplexityTier; 5] = [
        ComplexityTier::VerySimple,
        ComplexityTier::Simple,
        ComplexityTier::Medium,
        ComplexityTier::Complex,
        ComplexityTier::VeryComplex,
    ];

    /// Exact match on the canonical lowercase symbol. Case, whitespace or
    /// separator variants are kept as [`ComplexityTier::Unrecognized`].
    pub fn parse(symbol: &str) -> Self {
        match symbol {
            "very-simple" => Self::VerySimple,
            "simple" => Self::Simple,
            "medium" => Self::Medium,
            "complex" => Self::Complex,
            "very-complex" => Self::VeryComplex,
            _ => Self::Unrecognized(symbol.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::VerySimple => "very-simple",
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
            Self::VeryComplex => "very-complex",
            Self::Unrecognized(symbol) => symbol,
        }
    }

    /// Display label used in detail records.
    pub fn label(&self) -> &str {
        match self {
            Self::VerySimple => "Very simple",
            Self::Simple => "Simple",
            Self::Medium => "Medium",
            Self::Complex => "Complex",
            Self::VeryComplex => "Very complex",
            Self::Unrecognized(symbol) => symbol,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for ComplexityTier {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ComplexityTier> for String {
    fn from(value: ComplexityTier) -> Self {
        match value {
            ComplexityTier::Unrecognized(symbol) => symbol,
            known => known.as_str().to_string(),
        }
    }
}

/// Base day estimate per complexity tier. Tiers left out of the input hold
/// zero days.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TierDays {
    pub very_simple: Decimal,
    pub simple: Decimal,
    pub medium: Decimal,
    pub complex: Decimal,
    pub very_complex: Decimal,
}

impl TierDays {
    pub fn new(
        very_simple: Decimal,
        simple: Decimal,
        medium: Decimal,
        complex: Decimal,
        very_complex: Decimal,
    ) -> Self {
        Self { very_simple, simple, medium, complex, very_complex }
    }
}

/// Pricing grid entry ("abaque"): a named unit of work, its day estimate per
/// tier and the profile that executes it by default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingGridEntry {
    pub component_name: String,
    pub profile_name: String,
    #[serde(default)]
    pub days_per_tier: TierDays,
}

pub fn find_grid_entry<'a>(
    grid: &'a [PricingGridEntry],
    component_name: &str,
) -> Option<&'a PricingGridEntry> {
    grid.iter().find(|entry| entry.component_name == component_name)
}
