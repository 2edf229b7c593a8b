//! # RSVP Rust Backend
//!
//! Restaurant reservation query backend.
//!
//! This crate provides the data-access layer for a restaurant reservation
//! system: restaurants, their weekly operating hours, and the reservations
//! booked against them, all backed by a relational store. The backend exposes
//! a REST API via Axum for the frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types and DTOs for API responses
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Request handling follows a fixed sequence: validate the request parameters,
//! issue a single parameterized query through the repository, and translate
//! the outcome into a JSON response. No business logic beyond parameter
//! presence checking lives in this layer.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
