//! Typed IDs for type-safe entity references.
//!
//! Ids are opaque strings. Fresh ids are UUID v7 text, but stored data
//! also carries short ids such as `"1"` or `"item-1"` and timestamp ids
//! such as `"1712345678901"`. Any string is accepted on read and written
//! back unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mints a fresh, time-ordered id.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// The id text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(ClientId, "Unique identifier for a client.");
entity_id!(InvoiceId, "Unique identifier for an invoice.");
entity_id!(OfferId, "Unique identifier for an offer.");
entity_id!(LineItemId, "Unique identifier for a line item.");
entity_id!(
    RecurringInvoiceId,
    "Unique identifier for a recurring billing schedule."
);
entity_id!(ExpenseId, "Unique identifier for an expense.");
entity_id!(AppointmentId, "Unique identifier for an appointment.");

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_ids_are_unique_uuids() {
        let a = LineItemId::new();
        assert_ne!(a, LineItemId::new());
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[rstest]
    #[case("1")]
    #[case("item-1")]
    #[case("17123456789010.5328174623")]
    #[case("inv-item-1712345678901-0.42")]
    #[case("0190a5b4-6c1e-7000-8000-000000000001")]
    fn test_stored_ids_round_trip(#[case] raw: &str) {
        let json = format!("\"{raw}\"");
        let id: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(id.as_str(), raw);
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
    }

    #[test]
    fn test_display_is_the_raw_text() {
        assert_eq!(OfferId::from("AN-offer-7").to_string(), "AN-offer-7");
    }
}
