//! Appointment records as stored by the backend.

use super::{
    TimeOfDay,
    wire::{lenient_amount, nullable_vec},
};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Implements `as_str`, `Display`, and case-insensitive `FromStr` for a
/// fieldless enum whose serde names equal the given labels.
macro_rules! labelled_enum {
    ($name:ident, $what:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The label the backend uses for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| Error::validation(format!("unknown {} '{}'", $what, s)))
            }
        }
    };
}

/// Whether an appointment has been paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Not yet paid
    #[default]
    Pending,
    /// Paid in full
    Completed,
    /// Payment attempt failed
    Failed,
}

labelled_enum!(PaymentStatus, "payment status", {
    Pending => "Pending",
    Completed => "Completed",
    Failed => "Failed",
});

/// How the client pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayMode {
    /// At the counter
    #[default]
    Offline,
    /// Through an online gateway
    Online,
}

labelled_enum!(PayMode, "pay mode", {
    Offline => "Offline",
    Online => "Online",
});

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Booked and upcoming
    #[default]
    Scheduled,
    /// Service delivered
    Completed,
    /// Called off
    Cancelled,
}

labelled_enum!(AppointmentStatus, "appointment status", {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Cancelled => "Cancelled",
});

/// A booked appointment. References point into the business's client, team,
/// service, and package collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Backend identifier
    pub id: i64,
    /// Client reference
    #[serde(rename = "client_appointments", alias = "client", default)]
    pub client: Option<i64>,
    /// Staff reference; `None` when unassigned
    #[serde(default)]
    pub staff: Option<i64>,
    /// Service references, in booking order
    #[serde(default, deserialize_with = "nullable_vec")]
    pub services: Vec<i64>,
    /// Package references, in booking order
    #[serde(default, deserialize_with = "nullable_vec")]
    pub packages: Vec<i64>,
    /// Calendar day of the appointment
    pub appointment_date: NaiveDate,
    /// Start time, minute resolution
    pub appointment_time: TimeOfDay,
    /// Amount charged
    #[serde(default, alias = "total_price", deserialize_with = "lenient_amount")]
    pub total_amount: f64,
    /// Payment state
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Payment channel
    #[serde(default)]
    pub pay_mode: PayMode,
    /// Lifecycle state
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}
