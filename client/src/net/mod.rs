//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls and `types` defines the wire schema. Routing never
//! touches the network; only view components do.

pub mod api;
pub mod types;
