//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the leaf a `ViewId` mounts. Pages own their form state and
//! fetches, and delegate shared chrome to `components`.

pub mod admin;
pub mod login;
pub mod not_found;
pub mod register;
pub mod user;
