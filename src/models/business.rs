//! Business profile and the aggregate document served by `/api/business/{id}/`.

use super::{Appointment, Client, Package, Service, ServiceCategory, TeamMember, wire::nullable_vec};
use serde::{Deserialize, Serialize};

/// The salon business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Backend identifier
    pub id: i64,
    /// Owner's login phone number
    #[serde(default)]
    pub phone_number: String,
    /// Owner's name
    #[serde(default)]
    pub owner_name: String,
    /// Salon's public name
    #[serde(default)]
    pub salon_name: String,
    /// Owner's email
    #[serde(default)]
    pub owner_email: String,
    /// GST registration, if any
    #[serde(default)]
    pub gst: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub salon_description: String,
}

/// One business with every collection the console needs, fetched in a single
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessAggregate {
    /// Profile fields
    #[serde(flatten)]
    pub business: Business,
    /// Clients
    #[serde(default, deserialize_with = "nullable_vec")]
    pub clients: Vec<Client>,
    /// Staff
    #[serde(
        rename = "business_team_members",
        alias = "team_members",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub team_members: Vec<TeamMember>,
    /// Services
    #[serde(
        rename = "business_services",
        alias = "services",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub services: Vec<Service>,
    /// Packages
    #[serde(
        rename = "business_packages",
        alias = "packages",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub packages: Vec<Package>,
    /// Service categories
    #[serde(
        rename = "business_categories",
        alias = "categories",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub categories: Vec<ServiceCategory>,
    /// Appointments
    #[serde(
        rename = "business_appointments",
        alias = "appointments",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub appointments: Vec<Appointment>,
}

/// Answer of `/api/check-business/` for a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessCheck {
    /// Whether a business is registered for the phone number
    pub exists: bool,
    /// Console page the backend suggests next
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    business_id: Option<i64>,
    #[serde(default)]
    business: Option<BusinessRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct BusinessRef {
    id: i64,
}

impl BusinessCheck {
    /// The registered business id, from either response shape the backend uses.
    #[must_use]
    pub fn business_id(&self) -> Option<i64> {
        if !self.exists {
            return None;
        }
        self.business_id
            .or_else(|| self.business.as_ref().map(|business| business.id))
    }
}
