//! Hierarchical categories for transactions.
//!
//! Categories form a forest: each node has at most one parent and following
//! parent links never leads back to the starting node.

use sea_orm::{FromQueryResult, entity::prelude::*};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct TransactionCategory {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    /// Name of the parent, resolved when reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transaction_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id"
    )]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}
