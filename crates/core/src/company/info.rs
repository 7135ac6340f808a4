//! Company profile and document defaults.

use billbook_shared::PrefixMatch;
use billbook_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::document::Numbering;

/// Company profile.
///
/// Read-only input to the engine. Only an explicit settings action changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    /// Legal name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Postal code.
    pub zip: String,
    /// City.
    pub city: String,
    /// Phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Tax number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    /// Bank name.
    pub bank_name: String,
    /// IBAN.
    pub iban: String,
    /// BIC.
    pub bic: String,
    /// Account holder.
    pub account_holder: String,
    /// Base64-encoded logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Brand color (CSS hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Text color used on brand backgrounds (CSS hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding_text_color: Option<String>,
    /// Tax rate in percent pre-filled on new documents.
    pub default_tax_rate: Decimal,
    /// Currency shown next to amounts.
    pub currency: Currency,
    /// Prefix for invoice numbers.
    pub invoice_number_prefix: String,
    /// Prefix for offer numbers.
    pub offer_number_prefix: String,
    /// Link printed on invoices for online payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_payment_link: Option<String>,
    /// Signature appended to outgoing mail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_signature: Option<String>,
    /// Payment notice printed on invoices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_notice: Option<String>,
}

impl CompanyInfo {
    /// Numbering rules for invoices.
    #[must_use]
    pub fn invoice_numbering(&self, prefix_match: PrefixMatch) -> Numbering<'_> {
        Numbering::new(&self.invoice_number_prefix, prefix_match)
    }

    /// Numbering rules for offers.
    #[must_use]
    pub fn offer_numbering(&self, prefix_match: PrefixMatch) -> Numbering<'_> {
        Numbering::new(&self.offer_number_prefix, prefix_match)
    }
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Ihre Firma GmbH".to_string(),
            address: "Musterstraße 1".to_string(),
            zip: "12345".to_string(),
            city: "Musterstadt".to_string(),
            phone: "0123 456789".to_string(),
            email: "kontakt@ihrefirma.de".to_string(),
            tax_number: Some("123/456/7890".to_string()),
            bank_name: "Musterbank".to_string(),
            iban: "DE12345678901234567890".to_string(),
            bic: "MUSTERDEFF".to_string(),
            account_holder: "Ihre Firma GmbH".to_string(),
            logo: None,
            primary_color: Some("#3b82f6".to_string()),
            branding_text_color: Some("#000000".to_string()),
            default_tax_rate: Decimal::from(19),
            currency: Currency::Eur,
            invoice_number_prefix: "RE-".to_string(),
            offer_number_prefix: "AN-".to_string(),
            online_payment_link: None,
            email_signature: Some("Mit freundlichen Grüßen,\nIhre Firma GmbH".to_string()),
            payment_notice: None,
        }
    }
}
