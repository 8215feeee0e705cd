use std::sync::Arc;

use tracing::info;

use shared::{
    CreateTripRequest, CurrentTripResponse, SetCurrentTripRequest, TravelDay, Trip,
    TripListResponse, TripResponse, UpdateTripRequest,
};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::trip_store::TripStore;

/// Service for trip-level operations: creation, listing, partial updates
/// and the current-trip selection.
#[derive(Clone)]
pub struct TripService {
    store: Arc<TripStore>,
}

impl TripService {
    pub fn new(store: Arc<TripStore>) -> Self {
        Self { store }
    }

    /// List all known trips in storage (creation) order
    pub async fn list_trips(&self) -> TripListResponse {
        let trips = self.store.snapshot().await;
        info!("Listing {} trips", trips.len());
        TripListResponse { trips }
    }

    /// Create a new trip with exactly one initial day dated at the start
    /// date. The new trip becomes the current selection.
    pub async fn create_trip(&self, request: CreateTripRequest) -> DomainResult<TripResponse> {
        info!("Creating trip: name={}", request.name);
        validate_create_request(&request)?;

        let trip = Trip {
            id: Trip::generate_id(),
            name: request.name.trim().to_string(),
            start_date: request.start_date.clone(),
            end_date: request.end_date,
            participants: request.participants,
            status: request.status.unwrap_or_default(),
            days: vec![TravelDay {
                id: TravelDay::generate_id(),
                date: request.start_date,
                items: Vec::new(),
            }],
        };

        let stored = trip.clone();
        self.store
            .mutate(move |trips| {
                trips.push(stored);
                Ok(())
            })
            .await?;
        self.store.set_current_trip(&trip.id).await?;

        info!("Created trip: {} with ID: {}", trip.name, trip.id);
        Ok(TripResponse {
            trip,
            success_message: "Viaggio creato con successo!".to_string(),
        })
    }

    /// Patch an existing trip; only fields present in the request change
    pub async fn update_trip(
        &self,
        trip_id: &str,
        request: UpdateTripRequest,
    ) -> DomainResult<TripResponse> {
        info!("Updating trip: {}", trip_id);

        if let Some(ref name) = request.name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation("Trip name cannot be empty".to_string()));
            }
        }

        let trip_id = trip_id.to_string();
        let trip = self
            .store
            .mutate(move |trips| {
                let trip = trips
                    .iter_mut()
                    .find(|t| t.id == trip_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Trip not found: {}", trip_id)))?;

                if let Some(name) = request.name {
                    trip.name = name.trim().to_string();
                }
                if let Some(start_date) = request.start_date {
                    trip.start_date = start_date;
                }
                if let Some(end_date) = request.end_date {
                    trip.end_date = end_date;
                }
                if let Some(participants) = request.participants {
                    trip.participants = participants;
                }
                if let Some(status) = request.status {
                    trip.status = status;
                }

                Ok(trip.clone())
            })
            .await?;

        Ok(TripResponse {
            trip,
            success_message: "Viaggio aggiornato".to_string(),
        })
    }

    /// Select the current trip for single-trip-focused views
    pub async fn set_current_trip(
        &self,
        request: SetCurrentTripRequest,
    ) -> DomainResult<TripResponse> {
        let trip = self.store.set_current_trip(&request.trip_id).await?;
        info!("Current trip set to: {}", trip.id);
        Ok(TripResponse {
            trip,
            success_message: "Viaggio selezionato".to_string(),
        })
    }

    /// The currently selected trip, if any
    pub async fn current_trip(&self) -> CurrentTripResponse {
        CurrentTripResponse {
            current_trip: self.store.current_trip().await,
        }
    }
}

fn validate_create_request(request: &CreateTripRequest) -> DomainResult<()> {
    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Trip name cannot be empty".to_string()));
    }
    if request.start_date.trim().is_empty() {
        return Err(DomainError::Validation("Trip start date cannot be empty".to_string()));
    }
    if request.end_date.trim().is_empty() {
        return Err(DomainError::Validation("Trip end date cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{JsonConnection, TripRepository};
    use crate::storage::traits::Connection;
    use shared::TripStatus;
    use tempfile::TempDir;

    async fn setup_test() -> (TripService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let repository: Arc<TripRepository> = Arc::new(connection.create_trip_repository());
        let store = Arc::new(TripStore::load(repository).await);
        (TripService::new(store), temp_dir)
    }

    fn create_request(name: &str) -> CreateTripRequest {
        CreateTripRequest {
            name: name.to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-03".to_string(),
            participants: 2,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let (service, _temp_dir) = setup_test().await;

        service.create_trip(create_request("X")).await.expect("Failed to create trip");

        let response = service.list_trips().await;
        assert_eq!(response.trips.len(), 1);

        let trip = &response.trips[0];
        assert_eq!(trip.name, "X");
        assert_eq!(trip.status, TripStatus::Planning);
        assert_eq!(trip.days.len(), 1);
        assert_eq!(trip.days[0].date, "2024-01-01");
        assert!(trip.days[0].items.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let (service, _temp_dir) = setup_test().await;

        let result = service.create_trip(create_request("")).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        // No partial write
        assert!(service.list_trips().await.trips.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_dates() {
        let (service, _temp_dir) = setup_test().await;

        let mut request = create_request("Tour della Toscana");
        request.start_date = String::new();
        assert!(matches!(
            service.create_trip(request).await,
            Err(DomainError::Validation(_))
        ));

        let mut request = create_request("Tour della Toscana");
        request.end_date = "  ".to_string();
        assert!(matches!(
            service.create_trip(request).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_created_trip_becomes_current() {
        let (service, _temp_dir) = setup_test().await;

        let created = service.create_trip(create_request("Tour della Toscana")).await.unwrap();
        let current = service.current_trip().await.current_trip.unwrap();
        assert_eq!(current.id, created.trip.id);
    }

    #[tokio::test]
    async fn test_update_trip_patches_only_present_fields() {
        let (service, _temp_dir) = setup_test().await;
        let created = service.create_trip(create_request("Tour della Toscana")).await.unwrap();

        let response = service
            .update_trip(
                &created.trip.id,
                UpdateTripRequest {
                    status: Some(TripStatus::Active),
                    participants: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(response.trip.name, "Tour della Toscana");
        assert_eq!(response.trip.start_date, "2024-01-01");
        assert_eq!(response.trip.status, TripStatus::Active);
        assert_eq!(response.trip.participants, 4);
    }

    #[tokio::test]
    async fn test_update_unknown_trip_is_not_found() {
        let (service, _temp_dir) = setup_test().await;

        let result = service
            .update_trip("trip::missing", UpdateTripRequest::default())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_current_trip_by_id() {
        let (service, _temp_dir) = setup_test().await;
        let first = service.create_trip(create_request("Primo")).await.unwrap();
        let _second = service.create_trip(create_request("Secondo")).await.unwrap();

        // Creating the second trip moved the selection; move it back
        service
            .set_current_trip(SetCurrentTripRequest {
                trip_id: first.trip.id.clone(),
            })
            .await
            .unwrap();

        let current = service.current_trip().await.current_trip.unwrap();
        assert_eq!(current.name, "Primo");
    }

    #[tokio::test]
    async fn test_trips_persist_across_reload() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        {
            let repository: Arc<TripRepository> = Arc::new(connection.create_trip_repository());
            let store = Arc::new(TripStore::load(repository).await);
            let service = TripService::new(store);
            service.create_trip(create_request("Persistito")).await.unwrap();
        }

        // A fresh store over the same directory sees the trip
        let repository: Arc<TripRepository> = Arc::new(connection.create_trip_repository());
        let store = Arc::new(TripStore::load(repository).await);
        let service = TripService::new(store);

        let response = service.list_trips().await;
        assert_eq!(response.trips.len(), 1);
        assert_eq!(response.trips[0].name, "Persistito");
    }
}
