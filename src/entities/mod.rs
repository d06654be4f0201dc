//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod booking;
pub mod expense;
pub mod property;
pub mod session;

// Re-export specific types to avoid conflicts
pub use booking::{
    BookingSource, Column as BookingColumn, Entity as Booking, Model as BookingModel,
};
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use property::{Column as PropertyColumn, Entity as Property, Model as PropertyModel};
pub use session::{Column as SessionColumn, Entity as Session, Model as SessionModel};
