//! # Storage Module
//!
//! Data persistence for the itinerary planner. The domain layer only sees
//! the traits defined in [`traits`]; the JSON backend in [`json`] is the
//! concrete implementation wired up at startup.

pub mod json;
pub mod traits;

pub use json::{JsonConnection, EXPENSES_KEY, TRIPS_KEY};
pub use traits::{Connection, ExpenseStorage, TripStorage};
