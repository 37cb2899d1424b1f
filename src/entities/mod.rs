//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod business_snapshot;

pub use business_snapshot::{
    Column as BusinessSnapshotColumn, Entity as BusinessSnapshot, Model as BusinessSnapshotModel,
};
