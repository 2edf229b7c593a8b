//! HTTP server module for the restaurant backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! restaurant data-access layer as a REST API. Every request follows the
//! same sequence: validate the request parameters, invoke the service
//! layer, translate the outcome into JSON.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Parameter validation (params.rs)                       │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (db/services.rs)                           │
//! │  - One stateless function per operation                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository / PostgresRepository                   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;

pub mod error;

pub mod handlers;

pub mod params;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
