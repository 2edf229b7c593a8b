//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and follows the same
//! sequence: validate the request parameters, delegate to the service
//! layer, serialize the outcome. The fixed rejection messages are kept
//! byte-identical to the boundary's documented behavior.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{CreateRestaurantForm, DayHoursDto, HealthResponse, RestaurantQuery};
use super::error::AppError;
use super::params;
use super::state::AppState;
use crate::api::{Reservation, Restaurant};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

pub const RESTAURANT_GET_NEEDS_ID: &str =
    "/restaurant GET endpoint needs a restaurantID query param";
pub const OPENHOURS_GET_NEEDS_ID: &str =
    "/restaurant/openhours GET endpoint needs a restaurantID query param";
pub const GETALL_NEEDS_NO_PARAMS: &str = "/restaurant/getall GET endpoint needs no query param";
pub const RESTAURANT_POST_NEEDS_NAME: &str = "/restaurant POST endpoint needs name body param";
pub const RESTAURANT_DELETE_NEEDS_ID: &str = "/restaurant DELETE endpoint needs a restaurantID";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Restaurant Endpoints
// =============================================================================

/// GET /restaurant?restaurantID=...
///
/// Fetch a restaurant row set (zero-or-one rows) by ID.
pub async fn fetch_restaurant(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> HandlerResult<Vec<Restaurant>> {
    let id = params::require_identifier(query.restaurant_id.as_deref(), RESTAURANT_GET_NEEDS_ID)?;
    let rows = db_services::get_restaurant(state.repository.as_ref(), id).await?;
    Ok(Json(rows))
}

/// GET /restaurant/openhours?restaurantID=...
///
/// Fetch the weekly opening hours for a restaurant, used by the front end
/// to build the opening-hours view.
pub async fn fetch_open_hours(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> HandlerResult<Vec<DayHoursDto>> {
    let id = params::require_identifier(query.restaurant_id.as_deref(), OPENHOURS_GET_NEEDS_ID)?;
    let rows = db_services::get_open_hours(state.repository.as_ref(), id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /restaurant/getall
///
/// Fetch all restaurant rows. Accepts no query parameters.
pub async fn fetch_all_restaurants(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> HandlerResult<Vec<Restaurant>> {
    params::require_no_params(&query, GETALL_NEEDS_NO_PARAMS)?;
    let rows = db_services::list_restaurants(state.repository.as_ref()).await?;
    Ok(Json(rows))
}

/// POST /restaurant (form field: name)
///
/// Add a restaurant. Returns the literal confirmation token `"added"`;
/// the generated ID is not surfaced.
pub async fn create_restaurant(
    State(state): State<AppState>,
    form: CreateRestaurantForm,
) -> HandlerResult<&'static str> {
    let name = params::require_field(form.name.as_deref(), RESTAURANT_POST_NEEDS_NAME)?;
    db_services::add_restaurant(state.repository.as_ref(), &name).await?;
    Ok(Json("added"))
}

/// DELETE /restaurant?restaurantID=...
///
/// Delete a restaurant. Returns `"deleted"` whether or not a matching row
/// existed.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> HandlerResult<&'static str> {
    let id =
        params::require_identifier(query.restaurant_id.as_deref(), RESTAURANT_DELETE_NEEDS_ID)?;
    db_services::remove_restaurant(state.repository.as_ref(), id).await?;
    Ok(Json("deleted"))
}

// =============================================================================
// Reservations
// =============================================================================

/// GET /restaurant/{restaurantID}/reservations
///
/// Fetch all reservation rows for a restaurant.
pub async fn fetch_reservations(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> HandlerResult<Vec<Reservation>> {
    let id = params::require_path_identifier(&restaurant_id)?;
    let rows = db_services::list_reservations(state.repository.as_ref(), id).await?;
    Ok(Json(rows))
}
