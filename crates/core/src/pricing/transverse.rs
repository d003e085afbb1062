use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::profile::find_profile;
use crate::domain::quote::Quote;
use crate::domain::transverse::{TransverseActivity, TransverseKind, TransverseLevel};
use crate::pricing::costing::ProfileTotals;
use crate::pricing::TransverseDetail;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransverseAggregate {
    pub details: Vec<TransverseDetail>,
    pub profile_totals: ProfileTotals,
}

impl TransverseAggregate {
    fn with_line(self, detail: TransverseDetail, profile_resolved: bool) -> Self {
        let TransverseAggregate { mut details, profile_totals } = self;
        let profile_totals = if profile_resolved {
            profile_totals.with_days(&detail.profile, detail.days)
        } else {
            profile_totals
        };
        details.push(detail);
        Self { details, profile_totals }
    }
}

/// Days allocated to a transverse activity. Percentages always apply to the
/// costed days, never to days produced by other transverse levels.
pub fn transverse_days(activity: &TransverseActivity, costing_total_days: Decimal) -> Decimal {
    match activity.kind {
        TransverseKind::Fixed => activity.value,
        TransverseKind::Rate => activity.value / Decimal::ONE_HUNDRED * costing_total_days,
    }
}

/// Prices every transverse activity, level by level, and adds its days to the
/// profile totals carried over from the costing walk.
pub fn resolve_transverse(
    quote: &Quote,
    costing_total_days: Decimal,
    profile_totals: ProfileTotals,
) -> TransverseAggregate {
    let initial = TransverseAggregate { details: Vec::new(), profile_totals };

    quote
        .transverse_levels
        .iter()
        .flat_map(|level| level.activities.iter().map(move |activity| (level, activity)))
        .fold(initial, |aggregate, (level, activity)| {
            let (detail, profile_resolved) =
                price_transverse_activity(quote, level, activity, costing_total_days);
            aggregate.with_line(detail, profile_resolved)
        })
}

fn price_transverse_activity(
    quote: &Quote,
    level: &TransverseLevel,
    activity: &TransverseActivity,
    costing_total_days: Decimal,
) -> (TransverseDetail, bool) {
    let profile = find_profile(&quote.profiles, &activity.profile_name);
    if profile.is_none() {
        debug!(
            event_name = "pricing.transverse.profile_unresolved",
            quote_id = %quote.id.0,
            level = level.level,
            activity = %activity.name,
            profile = %activity.profile_name,
            "transverse activity priced at zero rate: unknown profile"
        );
    }
    let daily_rate = profile.map(|profile| profile.daily_rate).unwrap_or(Decimal::ZERO);
    let days = transverse_days(activity, costing_total_days);

    let detail = TransverseDetail {
        level: level.level,
        activity: activity.name.clone(),
        profile: activity.profile_name.clone(),
        kind: activity.kind.label().to_string(),
        value: activity.value,
        days,
        daily_rate,
        amount: days * daily_rate,
    };
    (detail, profile.is_some())
}
