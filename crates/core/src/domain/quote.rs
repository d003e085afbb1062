use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::costing::CostingCategory;
use crate::domain::grid::PricingGridEntry;
use crate::domain::profile::Profile;
use crate::domain::transverse::TransverseLevel;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

/// Fields carried by a quote that play no part in pricing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteMetadata {
    pub title: String,
    pub client: String,
    pub issued_on: Option<NaiveDate>,
    pub validity_days: Option<u32>,
    pub payment_terms: Option<String>,
}

/// Fully materialized quote snapshot, as handed over by whatever layer owns
/// persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    #[serde(default)]
    pub metadata: QuoteMetadata,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub pricing_grid: Vec<PricingGridEntry>,
    #[serde(default)]
    pub costing_categories: Vec<CostingCategory>,
    #[serde(default)]
    pub transverse_levels: Vec<TransverseLevel>,
}

impl Quote {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: QuoteId(id.into()),
            metadata: QuoteMetadata::default(),
            profiles: Vec::new(),
            pricing_grid: Vec::new(),
            costing_categories: Vec::new(),
            transverse_levels: Vec::new(),
        }
    }

    /// Last day the quote is valid, when both the issue date and the validity
    /// period are known.
    pub fn valid_until(&self) -> Option<NaiveDate> {
        let issued_on = self.metadata.issued_on?;
        let validity_days = self.metadata.validity_days?;
        issued_on.checked_add_days(Days::new(u64::from(validity_days)))
    }
}
