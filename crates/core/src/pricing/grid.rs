use rust_decimal::Decimal;

use crate::domain::grid::{ComplexityTier, PricingGridEntry};

/// Base day estimate stored under `tier`; zero for a tier outside the known
/// five.
pub fn resolve_days(entry: &PricingGridEntry, tier: &ComplexityTier) -> Decimal {
    let days = &entry.days_per_tier;
    match tier {
        ComplexityTier::VerySimple => days.very_simple,
        ComplexityTier::Simple => days.simple,
        ComplexityTier::Medium => days.medium,
        ComplexityTier::Complex => days.complex,
        ComplexityTier::VeryComplex => days.very_complex,
        ComplexityTier::Unrecognized(_) => Decimal::ZERO,
    }
}
