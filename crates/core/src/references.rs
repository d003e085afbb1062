//! Advisory audit of references the pricing engine would silently zero out.
//!
//! Pricing never fails on a dangling reference; callers that want to warn
//! about one run this audit next to it. The audit never alters pricing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::grid::find_grid_entry;
use crate::domain::profile::find_profile;
use crate::domain::quote::Quote;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    UnknownGridEntry,
    UnknownCostingProfile,
    UnknownTransverseProfile,
    UnrecognizedComplexity,
    DuplicateProfile,
}

impl FindingCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownGridEntry => "UNKNOWN_GRID_ENTRY",
            Self::UnknownCostingProfile => "UNKNOWN_COSTING_PROFILE",
            Self::UnknownTransverseProfile => "UNKNOWN_TRANSVERSE_PROFILE",
            Self::UnrecognizedComplexity => "UNRECOGNIZED_COMPLEXITY",
            Self::DuplicateProfile => "DUPLICATE_PROFILE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceFinding {
    pub code: FindingCode,
    pub message: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceReport {
    pub clean: bool,
    pub findings: Vec<ReferenceFinding>,
}

impl Default for ReferenceReport {
    fn default() -> Self {
        Self { clean: true, findings: Vec::new() }
    }
}

impl ReferenceReport {
    fn push(&mut self, code: FindingCode, message: String, location: String) {
        self.findings.push(ReferenceFinding { code, message, location });
        self.clean = false;
    }

    pub fn count(&self, code: FindingCode) -> usize {
        self.findings.iter().filter(|finding| finding.code == code).count()
    }
}

pub fn audit_references(quote: &Quote) -> ReferenceReport {
    let mut report = ReferenceReport::default();

    let mut seen_profiles: HashSet<&str> = HashSet::new();
    for (index, profile) in quote.profiles.iter().enumerate() {
        if !seen_profiles.insert(profile.name.as_str()) {
            report.push(
                FindingCode::DuplicateProfile,
                format!("Profile `{}` is declared more than once", profile.name),
                format!("profiles[{index}]"),
            );
        }
    }

    for category in &quote.costing_categories {
        for activity in category.activities.iter().filter(|activity| activity.active) {
            for component in &activity.components {
                let location =
                    format!("{} / {} / {}", category.name, activity.name, component.component_name);

                if !component.complexity.is_recognized() {
                    report.push(
                        FindingCode::UnrecognizedComplexity,
                        format!(
                            "Complexity `{}` is not a known tier; the component counts zero days",
                            component.complexity.as_str()
                        ),
                        location.clone(),
                    );
                }

                let Some(entry) = find_grid_entry(&quote.pricing_grid, &component.component_name)
                else {
                    report.push(
                        FindingCode::UnknownGridEntry,
                        format!(
                            "Component `{}` has no pricing grid entry and is left out of the totals",
                            component.component_name
                        ),
                        location,
                    );
                    continue;
                };

                if find_profile(&quote.profiles, &entry.profile_name).is_none() {
                    report.push(
                        FindingCode::UnknownCostingProfile,
                        format!(
                            "Profile `{}` is not declared on the quote; the line is priced at zero",
                            entry.profile_name
                        ),
                        location,
                    );
                }
            }
        }
    }

    for level in &quote.transverse_levels {
        for activity in &level.activities {
            if find_profile(&quote.profiles, &activity.profile_name).is_none() {
                report.push(
                    FindingCode::UnknownTransverseProfile,
                    format!(
                        "Profile `{}` is not declared on the quote; the activity is priced at zero",
                        activity.profile_name
                    ),
                    format!("level {} / {}", level.level, activity.name),
                );
            }
        }
    }

    report
}
