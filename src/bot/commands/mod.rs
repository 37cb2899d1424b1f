//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Appointment booking and status commands
pub mod appointment;

/// Service, package, and category management commands
pub mod catalog;

/// Client management commands
pub mod clients;

/// General utility commands
pub mod general;

/// Dashboard, bookings, calendar, and sync commands
pub mod schedule;

/// Team management commands
pub mod team;

// Export commands
pub use appointment::*;
pub use catalog::*;
pub use clients::*;
pub use general::*;
pub use schedule::*;
pub use team::*;
