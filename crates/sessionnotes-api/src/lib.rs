//! Session Notes API
//!
//! axum server exposing liveness/info endpoints and the audio upload endpoints.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
