//! Salon clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A client of the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub client_name: String,
    /// Contact phone
    #[serde(default)]
    pub client_phone: String,
    /// Contact email
    #[serde(default)]
    pub client_email: String,
    /// Business-defined client type (e.g. "Regular", "Walk-in")
    #[serde(default)]
    pub client_type: String,
    /// Date of birth, if recorded
    #[serde(default)]
    pub client_dob: Option<NaiveDate>,
    /// Gender, if recorded
    #[serde(default)]
    pub client_gender: Option<String>,
}
