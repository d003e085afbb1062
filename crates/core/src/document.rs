//! Priced line-item table and tax breakdown handed to document generation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::quote::{Quote, QuoteId};
use crate::pricing::{CalculatedQuoteData, VAT_RATE};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub designation: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub rate: Decimal,
    pub base: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedDocument {
    pub quote_id: QuoteId,
    pub title: String,
    pub client: String,
    pub issued_on: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub payment_terms: Option<String>,
    pub total_days: Decimal,
    pub lines: Vec<DocumentLine>,
    pub tax: TaxBreakdown,
}

/// Profiles that accrued no days are left off the line-item table.
pub fn build_priced_document(quote: &Quote, calculated: &CalculatedQuoteData) -> PricedDocument {
    let lines = calculated
        .profile_summary
        .iter()
        .filter(|summary| !summary.total_days.is_zero())
        .map(|summary| DocumentLine {
            designation: summary.profile.clone(),
            quantity: summary.total_days,
            unit_price: summary.daily_rate,
            line_total: summary.amount,
        })
        .collect();

    PricedDocument {
        quote_id: quote.id.clone(),
        title: quote.metadata.title.clone(),
        client: quote.metadata.client.clone(),
        issued_on: quote.metadata.issued_on,
        valid_until: quote.valid_until(),
        payment_terms: quote.metadata.payment_terms.clone(),
        total_days: calculated.total_days,
        lines,
        tax: TaxBreakdown {
            rate: VAT_RATE,
            base: calculated.total_ht,
            tax: calculated.total_tva,
            total: calculated.total_ttc,
        },
    }
}
