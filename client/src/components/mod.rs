//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared by several pages. They read the
//! `ApiConfig` from Leptos context and build links through the route table.

pub mod nav_bar;
pub mod resource_list;
