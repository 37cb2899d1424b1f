//! Business snapshot entity - The last business aggregate fetched from the backend.
//!
//! One row per business. The aggregate is stored as its JSON document so the
//! console can answer read commands without refetching on every interaction.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Business snapshot database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_snapshots")]
pub struct Model {
    /// Unique identifier for the row
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Backend id of the business this snapshot belongs to
    #[sea_orm(unique)]
    pub business_id: i64,
    /// Serialized `BusinessAggregate`
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    /// When the aggregate was fetched (UTC)
    pub fetched_at: DateTime,
}

/// `BusinessSnapshot` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
