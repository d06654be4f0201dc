//! Expense business logic - Handles expense recording and listing.
//!
//! Creating an expense verifies that the target property belongs to the
//! caller; a foreign property id behaves exactly like a missing one.

use crate::{
    entities::{expense, Expense, ExpenseColumn},
    errors::{Error, Result},
};
use sea_orm::{prelude::*, QueryFilter, QueryOrder, Set};
use serde::Deserialize;

/// Fields accepted when recording a new expense.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    /// Property the expense is attributed to
    pub property_id: i64,
    /// Expense amount in euros
    pub amount: f64,
    /// When the expense was incurred
    pub date: DateTimeUtc,
    /// Human-readable description
    pub description: String,
    /// Budget category
    pub category: String,
    /// Supplier or service provider
    #[serde(default)]
    pub provider: Option<String>,
    /// Reference to an uploaded receipt document
    #[serde(default)]
    pub receipt_url: Option<String>,
    /// Bank transaction to link this expense to
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Records a new expense for one of the caller's properties.
pub async fn create_expense(
    db: &DatabaseConnection,
    user_id: &str,
    input: NewExpense,
) -> Result<expense::Model> {
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("invalid expense amount: {}", input.amount),
        });
    }

    // Ownership check; foreign ids fail the same way as missing ones
    crate::core::property::find_owned(db, user_id, input.property_id).await?;

    let model = expense::ActiveModel {
        property_id: Set(input.property_id),
        user_id: Set(user_id.to_string()),
        amount: Set(input.amount),
        date: Set(input.date),
        description: Set(input.description),
        category: Set(input.category),
        provider: Set(input.provider),
        receipt_url: Set(input.receipt_url),
        transaction_id: Set(input.transaction_id),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Lists the caller's expenses, optionally restricted to one property,
/// newest first.
pub async fn list_expenses(
    db: &DatabaseConnection,
    user_id: &str,
    property_id: Option<i64>,
) -> Result<Vec<expense::Model>> {
    let mut query = Expense::find().filter(ExpenseColumn::UserId.eq(user_id));
    if let Some(id) = property_id {
        query = query.filter(ExpenseColumn::PropertyId.eq(id));
    }
    query
        .order_by_desc(ExpenseColumn::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_expense, create_test_property, setup_test_db};

    fn minimal_input(property_id: i64, amount: f64) -> NewExpense {
        NewExpense {
            property_id,
            amount,
            date: chrono::Utc::now(),
            description: "Limpieza semanal".to_string(),
            category: "limpieza".to_string(),
            provider: None,
            receipt_url: None,
            transaction_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_expense_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let property = create_test_property(&db, "user1", "Piso Centro").await?;

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = create_expense(&db, "user1", minimal_input(property.id, amount)).await;
            assert!(matches!(result, Err(Error::InvalidInput { .. })));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_expense_checks_ownership() -> Result<()> {
        let db = setup_test_db().await?;
        let property = create_test_property(&db, "owner", "Piso Centro").await?;

        let result = create_expense(&db, "intruder", minimal_input(property.id, 25.0)).await;
        assert!(matches!(result, Err(Error::PropertyNotFound { .. })));

        let expense = create_expense(&db, "owner", minimal_input(property.id, 25.0)).await?;
        assert_eq!(expense.amount, 25.0);
        assert_eq!(expense.user_id, "owner");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_expenses_filters_and_orders() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_property(&db, "user1", "Piso Centro").await?;
        let second = create_test_property(&db, "user1", "Casa Playa").await?;
        create_test_expense(&db, "user1", first.id, 10.0).await?;
        create_test_expense(&db, "user1", second.id, 20.0).await?;
        create_test_expense(&db, "user2", second.id, 30.0).await?;

        let all_mine = list_expenses(&db, "user1", None).await?;
        assert_eq!(all_mine.len(), 2);

        let only_first = list_expenses(&db, "user1", Some(first.id)).await?;
        assert_eq!(only_first.len(), 1);
        assert_eq!(only_first[0].amount, 10.0);

        Ok(())
    }
}
