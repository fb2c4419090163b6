//! Shared contracts between backend and frontend.
//!
//! Everything that crosses the wire lives here: aggregates, request/response
//! DTOs, enums. Both crates depend on this one, nothing here depends on them.

pub mod dashboards;
pub mod domain;
pub mod enums;
