//! Team members (staff).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Console access level of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessType {
    /// Full access
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    /// Day-to-day management
    Admin,
}

impl AccessType {
    /// The label the backend uses for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
        }
    }
}

const fn available_by_default() -> bool {
    true
}

/// A staff member who can be assigned to appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Backend identifier
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Contact phone
    #[serde(default)]
    pub phone_number: String,
    /// Contact email
    #[serde(default)]
    pub member_email: String,
    /// Joining date
    #[serde(default)]
    pub date_of_joining: Option<NaiveDate>,
    /// Access level
    #[serde(default)]
    pub access_type: Option<AccessType>,
    /// Whether the member currently takes bookings
    #[serde(default = "available_by_default")]
    pub is_available: bool,
}

impl TeamMember {
    /// First and last name joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
