//! JSON-file storage backend: one document per key, whole-value replace on
//! every write.

pub mod connection;
pub mod expense_repository;
pub mod trip_repository;

pub use connection::{JsonConnection, EXPENSES_KEY, TRIPS_KEY};
pub use expense_repository::ExpenseRepository;
pub use trip_repository::TripRepository;
