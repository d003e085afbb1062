use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a transverse activity's `value` is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransverseKind {
    /// `value` is a day count.
    Fixed,
    /// `value` is a percentage of the costed days.
    Rate,
}

impl TransverseKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Rate => "Rate",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransverseActivity {
    pub name: String,
    pub profile_name: String,
    #[serde(rename = "type")]
    pub kind: TransverseKind,
    pub value: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransverseLevel {
    pub level: u32,
    #[serde(default)]
    pub activities: Vec<TransverseActivity>,
}
