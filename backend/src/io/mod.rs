//! # IO Module
//!
//! Interface layer exposing the domain services to external callers. The
//! only surface is the REST API; the view layer is an external collaborator
//! consuming it.

pub mod rest;
