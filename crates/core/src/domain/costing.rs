use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::grid::ComplexityTier;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingComponent {
    pub component_name: String,
    pub complexity: ComplexityTier,
    #[serde(default = "default_coefficient")]
    pub coefficient: Decimal,
    #[serde(default)]
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingActivity {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub components: Vec<CostingComponent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingCategory {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<CostingActivity>,
}

fn default_coefficient() -> Decimal {
    Decimal::ONE
}

fn default_active() -> bool {
    true
}
