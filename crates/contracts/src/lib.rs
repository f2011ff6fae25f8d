//! Shared contracts between the dashboard frontend and the analytics service.
//!
//! Everything in this crate is plain data plus pure functions over it, so it
//! compiles for both the WASM frontend and native test runs.

pub mod dashboards;
