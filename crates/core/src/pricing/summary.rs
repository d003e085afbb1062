use rust_decimal::Decimal;

use crate::domain::profile::Profile;
use crate::pricing::costing::{CategoryTotals, ProfileTotals};
use crate::pricing::{CategorySummary, ProfileSummary, VAT_RATE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinancialTotals {
    pub total_days: Decimal,
    pub total_ht: Decimal,
    pub total_tva: Decimal,
    pub total_ttc: Decimal,
}

/// One entry per declared profile, in declaration order, valued at the
/// profile's own daily rate.
pub fn summarize_profiles(profiles: &[Profile], totals: &ProfileTotals) -> Vec<ProfileSummary> {
    profiles
        .iter()
        .map(|profile| {
            let total_days = totals.days_for(&profile.name);
            ProfileSummary {
                profile: profile.name.clone(),
                total_days,
                daily_rate: profile.daily_rate,
                amount: total_days * profile.daily_rate,
            }
        })
        .collect()
}

pub fn summarize_categories(totals: &CategoryTotals) -> Vec<CategorySummary> {
    totals
        .iter()
        .map(|total| CategorySummary {
            category: total.category.clone(),
            total_days: total.days,
            total_amount: total.amount,
        })
        .collect()
}

/// Grand totals are derived from the profile summary only.
pub fn totalize(profile_summary: &[ProfileSummary]) -> FinancialTotals {
    let total_days = profile_summary.iter().map(|summary| summary.total_days).sum::<Decimal>();
    let total_ht = profile_summary.iter().map(|summary| summary.amount).sum::<Decimal>();
    let total_tva = total_ht * VAT_RATE;

    FinancialTotals { total_days, total_ht, total_tva, total_ttc: total_ht + total_tva }
}
