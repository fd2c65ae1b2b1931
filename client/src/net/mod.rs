//! Networking modules for the articles REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the backend's JSON
//! schema.

pub mod api;
pub mod types;
