//! Expense entity - Represents one recorded cost attributed to a property.
//!
//! Expenses are created by the owner and may later be linked to a bank
//! transaction during reconciliation; only the link itself
//! (`transaction_id`) is stored here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the property this expense is attributed to
    pub property_id: i64,
    /// Identifier of the user who recorded the expense
    pub user_id: String,
    /// Expense amount in euros
    pub amount: f64,
    /// When the expense was incurred
    pub date: DateTimeUtc,
    /// Human-readable description
    pub description: String,
    /// Budget category (e.g., "limpieza", "suministros")
    pub category: String,
    /// Supplier or service provider, if known
    pub provider: Option<String>,
    /// Reference to an uploaded receipt document
    pub receipt_url: Option<String>,
    /// Bank transaction this expense is reconciled against, if any
    pub transaction_id: Option<String>,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
