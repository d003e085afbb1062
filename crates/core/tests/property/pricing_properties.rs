use devis_core::{
    calculate_quote, ComplexityTier, CostingActivity, CostingCategory, CostingComponent,
    PricingGridEntry, Profile, Quote, TierDays, TransverseActivity, TransverseKind,
    TransverseLevel, VAT_RATE,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const PROFILE_NAMES: [&str; 4] = ["Dev", "PM", "QA", "Ghost"];
const COMPONENT_NAMES: [&str; 5] = ["Home", "Form", "Api", "Report", "Missing"];

fn tenths(max: i64) -> impl Strategy<Value = Decimal> {
    (0..=max).prop_map(|value| Decimal::new(value, 1))
}

fn tier() -> impl Strategy<Value = ComplexityTier> {
    prop_oneof![
        Just(ComplexityTier::VerySimple),
        Just(ComplexityTier::Simple),
        Just(ComplexityTier::Medium),
        Just(ComplexityTier::Complex),
        Just(ComplexityTier::VeryComplex),
        Just(ComplexityTier::parse("off-grid")),
    ]
}

fn component() -> impl Strategy<Value = CostingComponent> {
    (0..COMPONENT_NAMES.len(), tier(), tenths(30)).prop_map(|(index, complexity, coefficient)| {
        CostingComponent {
            component_name: COMPONENT_NAMES[index].to_string(),
            complexity,
            coefficient,
            comment: String::new(),
        }
    })
}

fn category(index: usize) -> impl Strategy<Value = CostingCategory> {
    prop::collection::vec(
        (any::<bool>(), prop::collection::vec(component(), 0..4)),
        0..3,
    )
    .prop_map(move |activities| CostingCategory {
        name: format!("Category {index}"),
        activities: activities
            .into_iter()
            .enumerate()
            .map(|(position, (active, components))| CostingActivity {
                name: format!("Activity {position}"),
                active,
                components,
            })
            .collect(),
    })
}

fn transverse_level(level: u32) -> impl Strategy<Value = TransverseLevel> {
    prop::collection::vec(
        (0..PROFILE_NAMES.len(), any::<bool>(), 0i64..=50),
        0..3,
    )
    .prop_map(move |activities| TransverseLevel {
        level,
        activities: activities
            .into_iter()
            .enumerate()
            .map(|(position, (profile, fixed, value))| TransverseActivity {
                name: format!("Transverse {level}.{position}"),
                profile_name: PROFILE_NAMES[profile].to_string(),
                kind: if fixed { TransverseKind::Fixed } else { TransverseKind::Rate },
                value: Decimal::new(value, 0),
            })
            .collect(),
    })
}

fn grid() -> impl Strategy<Value = Vec<PricingGridEntry>> {
    prop::collection::vec((0..PROFILE_NAMES.len(), tenths(80), tenths(80), tenths(80)), 4)
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, (profile, low, mid, high))| PricingGridEntry {
                    // "Missing" is never part of the grid.
                    component_name: COMPONENT_NAMES[index].to_string(),
                    profile_name: PROFILE_NAMES[profile].to_string(),
                    days_per_tier: TierDays::new(low, low, mid, high, high + mid),
                })
                .collect()
        })
}

fn quote() -> impl Strategy<Value = Quote> {
    (
        prop::collection::vec(tenths(9_000), 3),
        grid(),
        (category(0), category(1), category(2)),
        (transverse_level(1), transverse_level(2)),
    )
        .prop_map(|(rates, pricing_grid, categories, levels)| {
            let mut quote = Quote::new("Q-prop");
            // "Ghost" is referenced but never declared.
            quote.profiles = PROFILE_NAMES[..3]
                .iter()
                .zip(rates)
                .map(|(name, rate)| Profile::new(*name, rate))
                .collect();
            quote.pricing_grid = pricing_grid;
            quote.costing_categories = vec![categories.0, categories.1, categories.2];
            quote.transverse_levels = vec![levels.0, levels.1];
            quote
        })
}

proptest! {
    #[test]
    fn profile_summary_sums_to_total_days(quote in quote()) {
        let result = calculate_quote(&quote);
        let summed: Decimal = result.profile_summary.iter().map(|entry| entry.total_days).sum();
        prop_assert_eq!(summed, result.total_days);
        prop_assert_eq!(result.profile_summary.len(), quote.profiles.len());
    }

    #[test]
    fn totals_match_line_amounts_of_declared_profiles(quote in quote()) {
        let result = calculate_quote(&quote);
        let declared = |profile: &str| quote.profiles.iter().any(|entry| entry.name == profile);

        let costing: Decimal = result
            .costing_details
            .iter()
            .filter(|detail| declared(&detail.profile))
            .map(|detail| detail.days * detail.daily_rate)
            .sum();
        let transverse: Decimal = result
            .transverse_details
            .iter()
            .filter(|detail| declared(&detail.profile))
            .map(|detail| detail.days * detail.daily_rate)
            .sum();
        let pre_tax = costing + transverse;

        prop_assert_eq!(result.total_ht, pre_tax);
        prop_assert_eq!(result.total_tva, pre_tax * VAT_RATE);
        prop_assert_eq!(result.total_ttc, pre_tax * (Decimal::ONE + VAT_RATE));
    }

    #[test]
    fn totals_do_not_depend_on_category_order(quote in quote()) {
        let mut reversed = quote.clone();
        reversed.costing_categories.reverse();

        let forward = calculate_quote(&quote);
        let backward = calculate_quote(&reversed);
        prop_assert_eq!(forward.total_days, backward.total_days);
        prop_assert_eq!(forward.total_ht, backward.total_ht);
        prop_assert_eq!(&forward.profile_summary, &backward.profile_summary);
        prop_assert_eq!(forward.transverse_details.len(), backward.transverse_details.len());
    }

    #[test]
    fn totals_do_not_depend_on_transverse_level_order(quote in quote()) {
        let mut reversed = quote.clone();
        reversed.transverse_levels.reverse();

        let forward = calculate_quote(&quote);
        let backward = calculate_quote(&reversed);
        prop_assert_eq!(forward.total_days, backward.total_days);
        prop_assert_eq!(forward.total_ttc, backward.total_ttc);
        prop_assert_eq!(&forward.profile_summary, &backward.profile_summary);
    }

    #[test]
    fn inactive_activities_never_produce_details(quote in quote()) {
        let result = calculate_quote(&quote);
        for detail in &result.costing_details {
            let active = quote
                .costing_categories
                .iter()
                .filter(|category| category.name == detail.category)
                .flat_map(|category| category.activities.iter())
                .any(|activity| activity.name == detail.activity && activity.active);
            prop_assert!(active);
        }
    }

    #[test]
    fn unresolved_grid_components_are_never_priced(quote in quote()) {
        let result = calculate_quote(&quote);
        prop_assert!(result.costing_details.iter().all(|detail| detail.component != "Missing"));
    }
}
