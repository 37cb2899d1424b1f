//! Wire types for the salon booking backend.
//!
//! These mirror the JSON documents served by the REST backend. Collections that
//! the backend may send as `null` decode to empty vectors, and monetary values
//! accept either numbers or decimal strings.

/// Appointments and their status enumerations
pub mod appointment;
/// Business profile and the one-document business aggregate
pub mod business;
/// Services, packages, and service categories
pub mod catalog;
/// Salon clients
pub mod client;
/// Team members (staff)
pub mod team;
/// Hour:minute time of day
pub mod time;
/// Lenient serde helpers shared by the wire types
pub mod wire;

pub use appointment::{Appointment, AppointmentStatus, PayMode, PaymentStatus};
pub use business::{Business, BusinessAggregate, BusinessCheck};
pub use catalog::{Package, Service, ServiceCategory, ServiceType};
pub use client::Client;
pub use team::{AccessType, TeamMember};
pub use time::TimeOfDay;
