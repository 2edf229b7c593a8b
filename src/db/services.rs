//! High-level service functions over the repository trait.
//!
//! Each function sequences exactly one repository operation for one of the
//! boundary endpoints. The service layer is a stateless orchestrator: it
//! holds no state between calls and performs no business logic beyond what
//! the validated input already guarantees. In particular it never checks
//! that a referenced restaurant ID exists; nonexistence surfaces as an
//! empty row set on reads and as a silent no-op on delete.

use tracing::debug;

use crate::api::{OperatingHours, Reservation, Restaurant, RestaurantId};
use crate::db::repository::{RepositoryResult, RestaurantRepository};

/// Fetch the restaurant row for an ID (zero-or-one rows).
pub async fn get_restaurant(
    repo: &dyn RestaurantRepository,
    id: RestaurantId,
) -> RepositoryResult<Vec<Restaurant>> {
    debug!(restaurant_id = id.value(), "fetching restaurant");
    repo.fetch_restaurant(id).await
}

/// Fetch the weekly operating hours for a restaurant.
pub async fn get_open_hours(
    repo: &dyn RestaurantRepository,
    id: RestaurantId,
) -> RepositoryResult<Vec<OperatingHours>> {
    debug!(restaurant_id = id.value(), "fetching operating hours");
    repo.fetch_open_hours(id).await
}

/// List all restaurants.
pub async fn list_restaurants(
    repo: &dyn RestaurantRepository,
) -> RepositoryResult<Vec<Restaurant>> {
    debug!("fetching all restaurants");
    repo.fetch_all_restaurants().await
}

/// Create a restaurant with the given name.
///
/// The generated ID stays inside the store; callers observe the new row
/// through [`list_restaurants`].
pub async fn add_restaurant(
    repo: &dyn RestaurantRepository,
    name: &str,
) -> RepositoryResult<()> {
    debug!(name, "creating restaurant");
    repo.create_restaurant(name).await
}

/// Delete the restaurant row for an ID.
///
/// Succeeds whether or not a matching row existed.
pub async fn remove_restaurant(
    repo: &dyn RestaurantRepository,
    id: RestaurantId,
) -> RepositoryResult<()> {
    debug!(restaurant_id = id.value(), "deleting restaurant");
    repo.delete_restaurant(id).await
}

/// List all reservations for a restaurant.
pub async fn list_reservations(
    repo: &dyn RestaurantRepository,
    id: RestaurantId,
) -> RepositoryResult<Vec<Reservation>> {
    debug!(restaurant_id = id.value(), "fetching reservations");
    repo.fetch_reservations(id).await
}

/// Check that the backing store is reachable.
pub async fn health_check(repo: &dyn RestaurantRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
