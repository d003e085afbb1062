pub mod config;
pub mod document;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod references;
pub mod source;

pub use document::{build_priced_document, DocumentLine, PricedDocument, TaxBreakdown};
pub use domain::costing::{CostingActivity, CostingCategory, CostingComponent};
pub use domain::grid::{ComplexityTier, PricingGridEntry, TierDays};
pub use domain::profile::Profile;
pub use domain::quote::{Quote, QuoteId, QuoteMetadata};
pub use domain::transverse::{TransverseActivity, TransverseKind, TransverseLevel};
pub use errors::ApplicationError;
pub use pricing::{
    calculate_quote, CalculatedQuoteData, CategorySummary, CostingDetail,
    DeterministicQuoteCalculator, ProfileSummary, QuoteCalculator, TransverseDetail, VAT_RATE,
};
pub use references::{audit_references, FindingCode, ReferenceFinding, ReferenceReport};
pub use source::{FileQuoteSource, QuoteSource, QuoteSourceError};
