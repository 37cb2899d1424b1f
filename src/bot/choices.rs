//! Fixed-choice command parameters.
//!
//! Discord shows these as dropdowns; each maps onto the matching model enum.

use crate::models::{AccessType, AppointmentStatus, PayMode, PaymentStatus, ServiceType};

/// Appointment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StatusChoice {
    /// Booked and upcoming
    Scheduled,
    /// Service delivered
    Completed,
    /// Called off
    Cancelled,
}

impl From<StatusChoice> for AppointmentStatus {
    fn from(choice: StatusChoice) -> Self {
        match choice {
            StatusChoice::Scheduled => Self::Scheduled,
            StatusChoice::Completed => Self::Completed,
            StatusChoice::Cancelled => Self::Cancelled,
        }
    }
}

/// Payment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PaymentChoice {
    /// Not yet paid
    Pending,
    /// Paid in full
    Completed,
    /// Payment attempt failed
    Failed,
}

impl From<PaymentChoice> for PaymentStatus {
    fn from(choice: PaymentChoice) -> Self {
        match choice {
            PaymentChoice::Pending => Self::Pending,
            PaymentChoice::Completed => Self::Completed,
            PaymentChoice::Failed => Self::Failed,
        }
    }
}

/// Payment channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PayModeChoice {
    /// At the counter
    Offline,
    /// Through an online gateway
    Online,
}

impl From<PayModeChoice> for PayMode {
    fn from(choice: PayModeChoice) -> Self {
        match choice {
            PayModeChoice::Offline => Self::Offline,
            PayModeChoice::Online => Self::Online,
        }
    }
}

/// Service tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum ServiceTierChoice {
    /// Standard offering
    Basic,
    /// Premium offering
    Premium,
    /// Extra added to another service
    #[name = "Add-on"]
    AddOn,
}

impl From<ServiceTierChoice> for ServiceType {
    fn from(choice: ServiceTierChoice) -> Self {
        match choice {
            ServiceTierChoice::Basic => Self::Basic,
            ServiceTierChoice::Premium => Self::Premium,
            ServiceTierChoice::AddOn => Self::AddOn,
        }
    }
}

/// Console access level
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum AccessChoice {
    /// Full access
    #[name = "Super Admin"]
    SuperAdmin,
    /// Day-to-day management
    Admin,
}

impl From<AccessChoice> for AccessType {
    fn from(choice: AccessChoice) -> Self {
        match choice {
            AccessChoice::SuperAdmin => Self::SuperAdmin,
            AccessChoice::Admin => Self::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_map_to_backend_labels() {
        assert_eq!(
            AppointmentStatus::from(StatusChoice::Cancelled).as_str(),
            "Cancelled"
        );
        assert_eq!(PaymentStatus::from(PaymentChoice::Failed).as_str(), "Failed");
        assert_eq!(PayMode::from(PayModeChoice::Online).as_str(), "Online");
        assert_eq!(
            serde_json::to_value(ServiceType::from(ServiceTierChoice::AddOn)).ok(),
            Some(serde_json::json!("Add-on"))
        );
        assert_eq!(
            serde_json::to_value(AccessType::from(AccessChoice::SuperAdmin)).ok(),
            Some(serde_json::json!("Super Admin"))
        );
    }
}
