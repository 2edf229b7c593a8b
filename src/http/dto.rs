//! Data Transfer Objects for the HTTP API.
//!
//! Each operation gets an explicit structure enumerating exactly the
//! fields it accepts; required-ness is checked by `params`, not by serde,
//! so missing input produces the endpoint's fixed error message instead
//! of a deserialization rejection.

use axum::extract::{FromRequest, Request};
use axum::Form;
use serde::{Deserialize, Serialize};

// Re-export domain types that serialize directly as response rows
pub use crate::api::{OperatingHours, Reservation, Restaurant};

/// Query parameters for the restaurant-scoped GET/DELETE endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RestaurantQuery {
    /// Primary key of the restaurant table
    #[serde(default, rename = "restaurantID")]
    pub restaurant_id: Option<String>,
}

/// Form body for the create endpoint.
///
/// Extraction never rejects: a body that cannot be parsed as an
/// urlencoded form simply carries no fields, so required-ness is
/// reported by `params::require_field` with the endpoint's fixed
/// message instead of an extractor rejection in a different shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateRestaurantForm {
    /// Name of the restaurant
    #[serde(default)]
    pub name: Option<String>,
}

impl<S> FromRequest<S> for CreateRestaurantForm
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Form::<CreateRestaurantForm>::from_request(req, state)
            .await
            .map(|Form(form)| form)
            .unwrap_or_default())
    }
}

/// One row of the openhours response: the three time columns only, the
/// owning restaurant ID is not echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursDto {
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "OpenTime")]
    pub open_time: chrono::NaiveTime,
    #[serde(rename = "CloseTime")]
    pub close_time: chrono::NaiveTime,
}

impl From<OperatingHours> for DayHoursDto {
    fn from(hours: OperatingHours) -> Self {
        Self {
            day_of_week: hours.day_of_week,
            open_time: hours.open_time,
            close_time: hours.close_time,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
