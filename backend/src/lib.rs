//! # Wanderlust Backend
//!
//! Travel-itinerary planning backend: trips, travel days, ordered stops,
//! drag-reorder, import/export, expense tracking and an assistant proxy.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! View Layer (external collaborator)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, trip store)
//!     ↓
//! Storage Layer (JSON key-value store)
//! ```
//!
//! All trip mutation flows through the domain layer's trip store, the
//! single authoritative writer of the persisted collection.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    AssistantService, ExpenseService, ExportService, ImportService, ItineraryService, TripService,
    TripStore,
};
use crate::storage::{Connection, JsonConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub trip_service: TripService,
    pub itinerary_service: ItineraryService,
    pub import_service: ImportService,
    pub export_service: ExportService,
    pub assistant_service: Arc<AssistantService>,
    pub expense_service: Arc<ExpenseService>,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage");
    let connection = match &config.data_dir {
        Some(dir) => JsonConnection::new(dir)?,
        None => JsonConnection::new_default()?,
    };
    let trip_repository = Arc::new(connection.create_trip_repository());
    let expense_repository = Arc::new(connection.create_expense_repository());

    info!("Setting up domain services");
    let store = Arc::new(TripStore::load(trip_repository).await);

    let app_state = AppState {
        trip_service: TripService::new(store.clone()),
        itinerary_service: ItineraryService::new(store.clone()),
        import_service: ImportService::new(store.clone()),
        export_service: ExportService::new(store),
        assistant_service: Arc::new(AssistantService::new(config.assistant.clone())?),
        expense_service: Arc::new(
            ExpenseService::load(expense_repository, config.budget_limit).await,
        ),
    };

    Ok(app_state)
}
