use std::sync::Arc;

use tracing::info;

use shared::ExportTripResponse;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::trip_store::TripStore;

/// Service for exporting a trip as a downloadable JSON document, byte-shape
/// identical to the persisted representation.
#[derive(Clone)]
pub struct ExportService {
    store: Arc<TripStore>,
}

impl ExportService {
    pub fn new(store: Arc<TripStore>) -> Self {
        Self { store }
    }

    pub async fn export_trip(&self, trip_id: &str) -> DomainResult<ExportTripResponse> {
        let trip = self
            .store
            .with_trips(|trips| trips.iter().find(|t| t.id == trip_id).cloned())
            .await
            .ok_or_else(|| DomainError::NotFound(format!("Trip not found: {}", trip_id)))?;

        let content = serde_json::to_string_pretty(&trip).map_err(anyhow::Error::from)?;
        let file_name = export_file_name(&trip.name);
        info!("Exported trip {} as {}", trip.id, file_name);

        Ok(ExportTripResponse { file_name, content })
    }
}

/// Download file name for a trip: lowercased, whitespace runs replaced with
/// underscores, ".json" suffix.
fn export_file_name(trip_name: &str) -> String {
    let base: Vec<&str> = trip_name.split_whitespace().collect();
    format!("{}.json", base.join("_").to_lowercase())
}
