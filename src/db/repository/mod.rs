//! Repository trait for restaurant data access.
//!
//! The trait abstracts the backing relational store so that different
//! implementations can be swapped: Postgres with Diesel for production,
//! an in-memory store for unit testing and local development.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{OperatingHours, Reservation, Restaurant, RestaurantId};

/// Repository trait for restaurant, hours, and reservation operations.
///
/// Each method issues exactly one parameterized query against the store;
/// no method spans more than one logical write, so no transactions are
/// required. Failures are always returned as [`RepositoryError`], never
/// raised as panics.
///
/// Nonexistent restaurant IDs are not an error at this level: reads for
/// an unknown ID return an empty row set and deletes report success after
/// removing zero rows. Referential integrity between tables is a concern
/// of the storage schema, not of this interface.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Fetch the restaurant row for an ID.
    ///
    /// # Returns
    /// * `Ok(Vec<Restaurant>)` - Zero-or-one matching rows
    /// * `Err(RepositoryError)` - If the query fails
    async fn fetch_restaurant(&self, id: RestaurantId) -> RepositoryResult<Vec<Restaurant>>;

    /// Fetch the weekly operating hours for a restaurant, in storage order.
    async fn fetch_open_hours(&self, id: RestaurantId) -> RepositoryResult<Vec<OperatingHours>>;

    /// Fetch all restaurant rows.
    async fn fetch_all_restaurants(&self) -> RepositoryResult<Vec<Restaurant>>;

    /// Insert a new restaurant with the given name.
    ///
    /// The generated ID is not surfaced to the caller; a subsequent
    /// [`fetch_all_restaurants`](Self::fetch_all_restaurants) will include
    /// the new row.
    async fn create_restaurant(&self, name: &str) -> RepositoryResult<()>;

    /// Delete the restaurant row for an ID.
    ///
    /// Deleting a nonexistent ID removes zero rows and still reports
    /// success.
    async fn delete_restaurant(&self, id: RestaurantId) -> RepositoryResult<()>;

    /// Fetch all reservation rows for a restaurant.
    async fn fetch_reservations(&self, id: RestaurantId) -> RepositoryResult<Vec<Reservation>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
