//! Diesel row models and conversions to the API domain types.

use chrono::{NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use super::schema::{hours, reservation, restaurant};
use crate::api::{OperatingHours, Reservation, Restaurant};

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = restaurant)]
pub struct RestaurantRow {
    pub id: i64,
    pub name: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = restaurant)]
pub struct NewRestaurantRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = hours)]
pub struct HoursRow {
    pub id: i64,
    pub restaurant_id: i64,
    pub day_of_week: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl From<HoursRow> for OperatingHours {
    fn from(row: HoursRow) -> Self {
        OperatingHours {
            restaurant_id: row.restaurant_id,
            day_of_week: row.day_of_week,
            open_time: row.open_time,
            close_time: row.close_time,
        }
    }
}

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = reservation)]
pub struct ReservationRow {
    pub id: i64,
    pub restaurant_id: i64,
    pub guest_name: String,
    pub party_size: i32,
    pub reserved_at: NaiveDateTime,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            id: row.id,
            restaurant_id: row.restaurant_id,
            guest_name: row.guest_name,
            party_size: row.party_size,
            reserved_at: row.reserved_at,
        }
    }
}
