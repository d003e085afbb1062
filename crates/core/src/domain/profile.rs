use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billable role and the rate charged for one day of its work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub daily_rate: Decimal,
}

impl Profile {
    pub fn new(name: impl Into<String>, daily_rate: Decimal) -> Self {
        Self { name: name.into(), daily_rate }
    }
}

/// First declared profile carrying `name`. Names are expected to be unique,
/// so later duplicates are shadowed.
pub fn find_profile<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles.iter().find(|profile| profile.name == name)
}
