//! # Storage Traits
//!
//! Abstraction over the persisted key-value stores so the domain layer can
//! run against any backend (JSON files today, a database later) without
//! modification.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Expense, Trip};

/// Trait defining the interface for trip collection storage
///
/// The persisted value is the full trip collection: every save replaces the
/// entire value, there are no partial writes and no migration versioning.
/// Absent or undecodable content loads as an empty collection, never as an
/// error that aborts a read.
#[async_trait]
pub trait TripStorage: Send + Sync {
    /// Load the full trip collection, in storage (creation) order
    async fn load_trips(&self) -> Result<Vec<Trip>>;

    /// Replace the full trip collection
    async fn save_trips(&self, trips: &[Trip]) -> Result<()>;
}

/// Trait defining the interface for expense collection storage
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Load all recorded expenses
    async fn load_expenses(&self) -> Result<Vec<Expense>>;

    /// Replace the full expense collection
    async fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// Abstracts the concrete connection type and provides factory methods for
/// creating repositories, so the domain layer can work with any backend
/// without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    type TripRepository: TripStorage;
    type ExpenseRepository: ExpenseStorage;

    /// Create a new trip repository for this connection
    fn create_trip_repository(&self) -> Self::TripRepository;

    /// Create a new expense repository for this connection
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
