//! GlucoScreen Server
//!
//! Axum serving layer over the pre-trained diabetes risk classifier.
//!
//! The server loads two artifacts once at startup (a fitted feature scaler
//! and the classifier weights), holds them in an explicit [`state::AppState`]
//! shared by reference across requests, and exposes a single screening
//! endpoint plus health and metrics surfaces.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;
