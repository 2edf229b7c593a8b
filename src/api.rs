//! Public API surface for the restaurant backend.
//!
//! This file consolidates the domain types exposed over the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization. Field
//! names are renamed to match the relational schema's column casing so
//! responses stay byte-compatible with the original wire format.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Restaurant identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RestaurantId(pub i64);

impl RestaurantId {
    pub fn new(value: i64) -> Self {
        RestaurantId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named restaurant, the root of the hours/reservation relations.
///
/// The ID is assigned by storage on creation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A per-day open/close time window associated with one restaurant.
///
/// Read-only from this layer's perspective; rows are maintained directly
/// in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: i64,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "OpenTime")]
    pub open_time: NaiveTime,
    #[serde(rename = "CloseTime")]
    pub close_time: NaiveTime,
}

/// A booking record associated with one restaurant.
///
/// This layer only reads reservation rows; creation and mutation happen
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: i64,
    #[serde(rename = "GuestName")]
    pub guest_name: String,
    #[serde(rename = "PartySize")]
    pub party_size: i32,
    #[serde(rename = "ReservedAt")]
    pub reserved_at: NaiveDateTime,
}
