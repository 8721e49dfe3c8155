//! Networking modules for the dashboard's JSON API and map artifacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single-shot GET requests, `error` classifies their
//! failures, and `types` defines the wire schema shared with the server.

pub mod api;
pub mod error;
pub mod types;
