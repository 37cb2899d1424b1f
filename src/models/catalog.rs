//! Services, packages, and service categories offered by a business.

use super::wire::lenient_amount;
use serde::{Deserialize, Serialize};

/// Grouping for services (e.g. "Hair", "Nails").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    /// Backend identifier
    pub id: i64,
    /// Category name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Tier of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    /// Standard offering
    Basic,
    /// Premium offering
    Premium,
    /// Extra added to another service
    #[serde(rename = "Add-on")]
    AddOn,
}

impl ServiceType {
    /// The label the backend uses for this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::AddOn => "Add-on",
        }
    }
}

/// A bookable service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub service_name: String,
    /// Tier, if set
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    /// Category reference
    #[serde(default)]
    pub category: Option<i64>,
    /// Length of the service
    #[serde(default)]
    pub duration_in_mins: u32,
    /// Price
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: f64,
}

/// A bundle sold at a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub package_name: String,
    /// Length of the package
    #[serde(default)]
    pub package_duration_in_mins: u32,
    /// Price
    #[serde(default, deserialize_with = "lenient_amount")]
    pub package_price: f64,
}
