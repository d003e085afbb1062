use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::costing::{CostingActivity, CostingCategory, CostingComponent};
use crate::domain::grid::find_grid_entry;
use crate::domain::profile::find_profile;
use crate::domain::quote::Quote;
use crate::pricing::grid::resolve_days;
use crate::pricing::CostingDetail;

/// Days accrued per declared profile. Only names that resolved against the
/// quote's profiles are ever inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileTotals(BTreeMap<String, Decimal>);

impl ProfileTotals {
    pub fn with_days(mut self, profile_name: &str, days: Decimal) -> Self {
        *self.0.entry(profile_name.to_string()).or_insert(Decimal::ZERO) += days;
        self
    }

    pub fn days_for(&self, profile_name: &str) -> Decimal {
        self.0.get(profile_name).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(name, days)| (name.as_str(), *days))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub days: Decimal,
    pub amount: Decimal,
}

/// Per-category totals in the order categories were first priced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    pub fn with_line(mut self, category: &str, days: Decimal, amount: Decimal) -> Self {
        match self.0.iter_mut().find(|total| total.category == category) {
            Some(total) => {
                total.days += days;
                total.amount += amount;
            }
            None => self.0.push(CategoryTotal { category: category.to_string(), days, amount }),
        }
        self
    }

    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.0.iter().find(|total| total.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }
}

/// One priced component, before it is folded into the running totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostingLine {
    pub detail: CostingDetail,
    pub profile_resolved: bool,
}

/// Snapshot of the costing walk. Every folded line yields a new snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostingAggregate {
    pub details: Vec<CostingDetail>,
    pub costing_total_days: Decimal,
    pub category_totals: CategoryTotals,
    pub profile_totals: ProfileTotals,
}

impl CostingAggregate {
    pub fn with_line(self, line: CostingLine) -> Self {
        let CostingAggregate { mut details, costing_total_days, category_totals, profile_totals } =
            self;
        let CostingLine { detail, profile_resolved } = line;

        let category_totals = category_totals.with_line(&detail.category, detail.days, detail.amount);
        let profile_totals = if profile_resolved {
            profile_totals.with_days(&detail.profile, detail.days)
        } else {
            profile_totals
        };
        let costing_total_days = costing_total_days + detail.days;
        details.push(detail);

        Self { details, costing_total_days, category_totals, profile_totals }
    }
}

/// Walks category, activity, component in declaration order and prices every
/// component of an active activity that resolves to a grid entry.
pub fn aggregate_costing(quote: &Quote) -> CostingAggregate {
    quote
        .costing_categories
        .iter()
        .flat_map(|category| {
            category
                .activities
                .iter()
                .filter(|activity| activity.active)
                .flat_map(move |activity| {
                    activity.components.iter().map(move |component| (category, activity, component))
                })
        })
        .filter_map(|(category, activity, component)| {
            price_component(quote, category, activity, component)
        })
        .fold(CostingAggregate::default(), CostingAggregate::with_line)
}

pub fn price_component(
    quote: &Quote,
    category: &CostingCategory,
    activity: &CostingActivity,
    component: &CostingComponent,
) -> Option<CostingLine> {
    let Some(entry) = find_grid_entry(&quote.pricing_grid, &component.component_name) else {
        debug!(
            event_name = "pricing.costing.grid_entry_unresolved",
            quote_id = %quote.id.0,
            category = %category.name,
            activity = %activity.name,
            component = %component.component_name,
            "component skipped: no pricing grid entry"
        );
        return None;
    };

    let days = resolve_days(entry, &component.complexity) * component.coefficient;
    let profile = find_profile(&quote.profiles, &entry.profile_name);
    if profile.is_none() {
        debug!(
            event_name = "pricing.costing.profile_unresolved",
            quote_id = %quote.id.0,
            component = %component.component_name,
            profile = %entry.profile_name,
            "component priced at zero rate: unknown profile"
        );
    }
    let daily_rate = profile.map(|profile| profile.daily_rate).unwrap_or(Decimal::ZERO);

    Some(CostingLine {
        detail: CostingDetail {
            category: category.name.clone(),
            activity: activity.name.clone(),
            component: component.component_name.clone(),
            profile: entry.profile_name.clone(),
            complexity: component.complexity.label().to_string(),
            coefficient: component.coefficient,
            days,
            daily_rate,
            amount: days * daily_rate,
            comment: component.comment.clone(),
        },
        profile_resolved: profile.is_some(),
    })
}
