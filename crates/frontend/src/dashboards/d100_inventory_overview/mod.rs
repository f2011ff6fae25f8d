//! Inventory overview dashboard: analytics-service client, session store,
//! controller state machine, and the tabbed UI.

pub mod api;
pub mod controller;
pub mod session;
pub mod ui;
