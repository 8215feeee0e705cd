//! # Domain Module
//!
//! Contains all business logic for the itinerary planner.
//!
//! This module encapsulates the core rules, entities and services that
//! define how trips, travel days and itinerary items are modeled and
//! managed. It operates independently of any specific UI framework or
//! storage mechanism.
//!
//! ## Module Organization
//!
//! - **trip_store**: single authoritative owner of the trip collection
//! - **trip_service**: trip CRUD and the current-trip selection
//! - **itinerary_service**: item CRUD, reorder and day summaries
//! - **reorder**: drag gesture to permutation translation
//! - **day_stats**: advisory duration/cost aggregation
//! - **import_service / export_service**: file format conversion
//! - **assistant_service**: proxy to the external chat model
//! - **expense_service**: travel expense tracking
//!
//! ## Key Invariants
//!
//! - All mutation flows through the trip store; no other component writes
//!   the persisted collection
//! - Every mutation re-serializes the full collection before reporting
//!   success; a failed save keeps the in-memory state authoritative
//! - Item order within a day is positional and only changed by reorder
//! - Deleting an absent item is success, not an error

pub mod assistant_service;
pub mod day_stats;
pub mod errors;
pub mod expense_service;
pub mod export_service;
pub mod import_service;
pub mod itinerary_service;
pub mod reorder;
pub mod trip_service;
pub mod trip_store;

pub use assistant_service::AssistantService;
pub use errors::{DomainError, DomainResult};
pub use expense_service::ExpenseService;
pub use export_service::ExportService;
pub use import_service::ImportService;
pub use itinerary_service::ItineraryService;
pub use trip_service::TripService;
pub use trip_store::TripStore;
