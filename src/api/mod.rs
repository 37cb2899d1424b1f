//! REST client for the salon booking backend.
//!
//! [`HttpTransport`] abstracts the wire so the typed [`SalonApi`] endpoints can
//! be exercised against an in-memory transport in tests.

/// Typed endpoint methods
pub mod client;
/// Request bodies and their validation
pub mod payloads;
/// Transport trait and the reqwest implementation
pub mod transport;

pub use client::{DateRange, SalonApi};
pub use payloads::{
    AppointmentPayload, AvailabilityPatch, NewCategory, NewClient, NewPackage, NewService,
    NewTeamMember,
};
pub use transport::{HttpTransport, ReqwestTransport};
