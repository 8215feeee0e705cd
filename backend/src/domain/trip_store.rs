use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, warn};

use shared::Trip;

use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::TripStorage;

/// Single authoritative owner of the trip collection.
///
/// All trip data lives in memory behind one write lock; every mutation goes
/// through [`TripStore::mutate`], which applies the change and then
/// re-serializes the full collection to the persisted store. Reads always
/// observe the latest committed mutation (read-your-writes, single process).
///
/// A persistence failure is reported to the caller as
/// [`DomainError::SaveFailed`] but never rolls back memory: the in-memory
/// collection stays the source of truth for the rest of the session.
pub struct TripStore {
    storage: Arc<dyn TripStorage>,
    trips: RwLock<Vec<Trip>>,
    current_trip_id: RwLock<Option<String>>,
}

impl TripStore {
    /// Hydrate the store from persistent storage. An unreadable store loads
    /// as an empty collection; it must never prevent startup.
    pub async fn load(storage: Arc<dyn TripStorage>) -> Self {
        let trips = match storage.load_trips().await {
            Ok(trips) => trips,
            Err(e) => {
                warn!("Could not load trip collection, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            storage,
            trips: RwLock::new(trips),
            current_trip_id: RwLock::new(None),
        }
    }

    /// Snapshot of all known trips in storage (creation) order
    pub async fn snapshot(&self) -> Vec<Trip> {
        self.trips.read().await.clone()
    }

    /// Run a read-only closure over the collection
    pub async fn with_trips<T>(&self, f: impl FnOnce(&[Trip]) -> T) -> T {
        let trips = self.trips.read().await;
        f(&trips)
    }

    /// Apply a mutation and persist the full collection.
    ///
    /// The closure must either fully apply its change or return an error
    /// before touching the collection; partial mutations would become
    /// observable. When the closure succeeds but the save fails, the
    /// mutation is kept in memory and `SaveFailed` is returned.
    pub async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Vec<Trip>) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut trips = self.trips.write().await;
        let out = f(&mut trips)?;

        if let Err(e) = self.storage.save_trips(&trips).await {
            error!("Failed to persist trip collection: {}", e);
            return Err(DomainError::SaveFailed(e));
        }

        Ok(out)
    }

    /// Select the current trip. Purely a selection pointer, not a data
    /// mutation; the id must name a known trip.
    pub async fn set_current_trip(&self, trip_id: &str) -> DomainResult<Trip> {
        let trips = self.trips.read().await;
        let trip = trips
            .iter()
            .find(|t| t.id == trip_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Trip not found: {}", trip_id)))?;
        drop(trips);

        *self.current_trip_id.write().await = Some(trip_id.to_string());
        Ok(trip)
    }

    /// The currently selected trip, if any. Resolved against live state so
    /// the returned trip reflects every committed mutation.
    pub async fn current_trip(&self) -> Option<Trip> {
        let trip_id = self.current_trip_id.read().await.clone()?;
        let trips = self.trips.read().await;
        trips.iter().find(|t| t.id == trip_id).cloned()
    }
}
