//! Core business logic for `Casaflow`.
//!
//! Framework-agnostic operations over the persistence store. The HTTP layer
//! in [`crate::api`] is a thin shell over these functions, so everything here
//! is testable against an in-memory database without a running server.

/// Booking listing and feed-driven replacement
pub mod booking;
/// Expense recording and listing
pub mod expense;
/// Property CRUD and ownership checks
pub mod property;
/// Bearer-token session resolution
pub mod session;
/// Per-property sync orchestration across feed sources
pub mod sync;
