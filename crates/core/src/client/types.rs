//! Client domain types.

use billbook_shared::types::{AppointmentId, ClientId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A billed customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Postal code.
    pub zip: String,
    /// City.
    pub city: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
}

impl Client {
    /// Returns the client with the given id.
    #[must_use]
    pub fn find<'a>(clients: &'a [Self], id: &ClientId) -> Option<&'a Self> {
        clients.iter().find(|client| client.id == *id)
    }

    /// The sample client shipped with a fresh installation.
    ///
    /// Its id is always `"1"`.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            id: ClientId::from("1"),
            name: "Max Mustermann".to_string(),
            address: "Kundenweg 2".to_string(),
            zip: "54321".to_string(),
            city: "Kundenstadt".to_string(),
            phone: "0987 654321".to_string(),
            email: "max@mustermann.de".to_string(),
        }
    }
}

/// A scheduled appointment with a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier.
    pub id: AppointmentId,
    /// Client the appointment is with.
    pub client_id: ClientId,
    /// Short title.
    pub title: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time.
    pub start_time: NaiveTime,
    /// End time.
    pub end_time: NaiveTime,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
