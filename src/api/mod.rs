//! HTTP API module for the Termination Settlement Engine.
//!
//! This module provides the REST API endpoint for calculating termination
//! settlements under the 2024 CLT tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SettlementRequest;
pub use response::ApiError;
pub use state::AppState;
