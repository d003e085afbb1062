//! Quote pricing engine.
//!
//! Turns a quote's pricing configuration into day and monetary totals at line,
//! category, profile and quote level. The computation is a pure function of
//! the [`Quote`] snapshot: references that do not resolve (grid entries,
//! profiles, complexity tiers) degrade to zero-weighted contributions instead
//! of failing, and no value is ever rounded.

pub mod costing;
pub mod grid;
pub mod summary;
pub mod transverse;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::quote::Quote;

use self::{
    costing::aggregate_costing,
    summary::{summarize_categories, summarize_profiles, totalize},
    transverse::resolve_transverse,
};

/// VAT applied to the pre-tax total (20 %).
pub const VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingDetail {
    pub category: String,
    pub activity: String,
    pub component: String,
    pub profile: String,
    pub complexity: String,
    pub coefficient: Decimal,
    pub days: Decimal,
    pub daily_rate: Decimal,
    pub amount: Decimal,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransverseDetail {
    pub level: u32,
    pub activity: String,
    pub profile: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Decimal,
    pub days: Decimal,
    pub daily_rate: Decimal,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub profile: String,
    pub total_days: Decimal,
    pub daily_rate: Decimal,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_days: Decimal,
    pub total_amount: Decimal,
}

/// Everything a rendering or export surface needs, at full precision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedQuoteData {
    pub total_days: Decimal,
    pub total_ht: Decimal,
    pub total_tva: Decimal,
    pub total_ttc: Decimal,
    pub costing_details: Vec<CostingDetail>,
    pub transverse_details: Vec<TransverseDetail>,
    pub profile_summary: Vec<ProfileSummary>,
    pub category_summary: Vec<CategorySummary>,
}

pub trait QuoteCalculator: Send + Sync {
    fn calculate(&self, quote: &Quote) -> CalculatedQuoteData;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeterministicQuoteCalculator;

impl QuoteCalculator for DeterministicQuoteCalculator {
    fn calculate(&self, quote: &Quote) -> CalculatedQuoteData {
        calculate_quote(quote)
    }
}

pub fn calculate_quote(quote: &Quote) -> CalculatedQuoteData {
    let costing = aggregate_costing(quote);
    let transverse =
        resolve_transverse(quote, costing.costing_total_days, costing.profile_totals);

    let profile_summary = summarize_profiles(&quote.profiles, &transverse.profile_totals);
    let category_summary = summarize_categories(&costing.category_totals);
    let totals = totalize(&profile_summary);

    info!(
        event_name = "pricing.quote.calculated",
        quote_id = %quote.id.0,
        costed_days = %costing.costing_total_days,
        total_days = %totals.total_days,
        total_ht = %totals.total_ht,
        "quote priced"
    );

    CalculatedQuoteData {
        total_days: totals.total_days,
        total_ht: totals.total_ht,
        total_tva: totals.total_tva,
        total_ttc: totals.total_ttc,
        costing_details: costing.details,
        transverse_details: transverse.details,
        profile_summary,
        category_summary,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{calculate_quote, DeterministicQuoteCalculator, QuoteCalculator, VAT_RATE};
    use crate::domain::costing::{CostingActivity, CostingCategory, CostingComponent};
    use crate::domain::grid::{ComplexityTier, PricingGridEntry, TierDays};
    use crate::domain::profile::Profile;
    use crate::domain::quote::Quote;
    use crate::domain::transverse::{TransverseActivity, TransverseKind, TransverseLevel};

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn grid_entry(component: &str, profile: &str) -> PricingGridEntry {
        PricingGridEntry {
            component_name: component.to_string(),
            profile_name: profile.to_string(),
            days_per_tier: TierDays::new(dec(1), dec(2), dec(3), dec(5), dec(8)),
        }
    }

    fn component(name: &str, tier: ComplexityTier) -> CostingComponent {
        CostingComponent {
            component_name: name.to_string(),
            complexity: tier,
            coefficient: Decimal::ONE,
            comment: String::new(),
        }
    }

    fn scenario_a() -> Quote {
        let mut quote = Quote::new("Q-A");
        quote.profiles = vec![Profile::new("Dev", dec(500))];
        quote.pricing_grid = vec![grid_entry("Home", "Dev")];
        quote.costing_categories = vec![CostingCategory {
            name: "Front".to_string(),
            activities: vec![CostingActivity {
                name: "Build".to_string(),
                active: true,
                components: vec![component("Home", ComplexityTier::Medium)],
            }],
        }];
        quote
    }

    fn with_pm_rate(mut quote: Quote) -> Quote {
        quote.transverse_levels = vec![TransverseLevel {
            level: 1,
            activities: vec![TransverseActivity {
                name: "PM".to_string(),
                profile_name: "Dev".to_string(),
                kind: TransverseKind::Rate,
                value: dec(10),
            }],
        }];
        quote
    }

    fn with_ghost_component(mut quote: Quote) -> Quote {
        quote.pricing_grid.push(PricingGridEntry {
            component_name: "Report".to_string(),
            profile_name: "Ghost".to_string(),
            days_per_tier: TierDays::new(dec(1), dec(2), dec(2), dec(3), dec(4)),
        });
        quote.costing_categories[0].activities[0]
            .components
            .push(component("Report", ComplexityTier::Simple));
        quote
    }

    #[test]
    fn single_component_quote_prices_out() {
        let result = calculate_quote(&scenario_a());

        assert_eq!(result.costing_details.len(), 1);
        let line = &result.costing_details[0];
        assert_eq!(line.category, "Front");
        assert_eq!(line.activity, "Build");
        assert_eq!(line.component, "Home");
        assert_eq!(line.complexity, "Medium");
        assert_eq!(line.coefficient, Decimal::ONE);
        assert_eq!(line.days, dec(3));
        assert_eq!(line.daily_rate, dec(500));
        assert_eq!(line.amount, dec(1500));

        assert_eq!(result.total_days, dec(3));
        assert_eq!(result.total_ht, dec(1500));
        assert_eq!(result.total_tva, dec(300));
        assert_eq!(result.total_ttc, dec(1800));
    }

    #[test]
    fn rate_transverse_activity_adds_share_of_costed_days() {
        let result = calculate_quote(&with_pm_rate(scenario_a()));

        assert_eq!(result.transverse_details.len(), 1);
        let line = &result.transverse_details[0];
        assert_eq!(line.level, 1);
        assert_eq!(line.kind, "Rate");
        assert_eq!(line.days, Decimal::new(3, 1));
        assert_eq!(line.amount, dec(150));

        assert_eq!(result.total_days, Decimal::new(33, 1));
        assert_eq!(result.total_ht, dec(1650));
        assert_eq!(result.total_tva, dec(330));
        assert_eq!(result.total_ttc, dec(1980));
    }

    #[test]
    fn unknown_profile_line_counts_toward_category_but_not_profiles() {
        let baseline = calculate_quote(&scenario_a());
        let result = calculate_quote(&with_ghost_component(scenario_a()));

        let ghost = &result.costing_details[1];
        assert_eq!(ghost.profile, "Ghost");
        assert_eq!(ghost.days, dec(2));
        assert_eq!(ghost.amount, Decimal::ZERO);

        assert_eq!(result.category_summary[0].total_days, dec(5));
        assert_eq!(result.category_summary[0].total_amount, dec(1500));
        assert_eq!(result.profile_summary, baseline.profile_summary);
        assert_eq!(result.total_days, dec(3));
    }

    #[test]
    fn unknown_profile_days_still_feed_rate_transverse_base() {
        let result = calculate_quote(&with_pm_rate(with_ghost_component(scenario_a())));

        // 10 % of 3 + 2 costed days.
        assert_eq!(result.transverse_details[0].days, Decimal::new(5, 1));
        assert_eq!(result.profile_summary[0].total_days, Decimal::new(35, 1));
    }

    #[test]
    fn profile_summary_sums_to_total_days() {
        let result = calculate_quote(&with_pm_rate(with_ghost_component(scenario_a())));
        let summed: Decimal = result.profile_summary.iter().map(|entry| entry.total_days).sum();
        assert_eq!(summed, result.total_days);
    }

    #[test]
    fn empty_quote_has_zero_totals_and_one_entry_per_profile() {
        let mut quote = Quote::new("Q-empty");
        quote.profiles = vec![Profile::new("Dev", dec(500)), Profile::new("PM", dec(650))];

        let result = calculate_quote(&quote);
        assert_eq!(result.profile_summary.len(), 2);
        assert!(result.category_summary.is_empty());
        assert_eq!(result.total_ht, Decimal::ZERO);
        assert_eq!(result.total_tva, Decimal::ZERO);
        assert_eq!(result.total_ttc, Decimal::ZERO);
    }

    #[test]
    fn calculation_leaves_quote_untouched_and_is_repeatable() {
        let quote = with_pm_rate(scenario_a());
        let snapshot = quote.clone();

        let calculator = DeterministicQuoteCalculator;
        let first = calculator.calculate(&quote);
        let second = calculator.calculate(&quote);

        assert_eq!(quote, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn vat_rate_is_twenty_percent() {
        assert_eq!(VAT_RATE, Decimal::new(2, 1));
    }

    #[test]
    fn calculator_trait_is_usable_as_object() {
        let calculator: Box<dyn QuoteCalculator> = Box::new(DeterministicQuoteCalculator);
        let result = calculator.calculate(&scenario_a());
        assert_eq!(result.total_ttc, dec(1800));
    }
}
