//! Core business logic, independent of Discord.
//!
//! Everything here works on plain model values or a [`sea_orm::DatabaseConnection`]
//! and a [`crate::api::SalonApi`]; the bot layer only parses input and formats
//! output.

/// Appointment drafts and status-change payloads
pub mod appointment;
/// Appointment read-model assembly
pub mod assembler;
/// Business identity resolution
pub mod business;
/// Day filtering and the half-hour grid
pub mod calendar;
/// Dashboard figures
pub mod dashboard;
/// Id and name lookups over reference collections
pub mod directory;
/// Text formatting helpers
pub mod report;
/// Local snapshot of the business aggregate
pub mod snapshot;
