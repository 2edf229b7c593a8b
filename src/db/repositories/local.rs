//! In-memory repository for unit testing and local development.
//!
//! Rows live in plain vectors behind a `parking_lot::RwLock`. IDs are
//! assigned from a monotonically increasing counter, mirroring the
//! auto-increment primary keys of the relational schema. Deleting a
//! restaurant also removes its hours and reservation rows, matching the
//! `ON DELETE CASCADE` constraints of the Postgres schema.
//!
//! Because this layer exposes no write operations for hours or
//! reservations, the local repository provides seeding helpers
//! ([`LocalRepository::insert_hours`], [`LocalRepository::insert_reservation`])
//! so tests and local setups can populate those tables directly.

use async_trait::async_trait;
use chrono::{NaiveDateTime, NaiveTime};
use parking_lot::RwLock;

use crate::api::{OperatingHours, Reservation, Restaurant, RestaurantId};
use crate::db::repository::{RepositoryResult, RestaurantRepository};

#[derive(Debug, Default)]
struct Tables {
    restaurants: Vec<Restaurant>,
    hours: Vec<OperatingHours>,
    reservations: Vec<Reservation>,
    next_restaurant_id: i64,
    next_reservation_id: i64,
}

/// In-memory implementation of [`RestaurantRepository`].
#[derive(Debug)]
pub struct LocalRepository {
    tables: RwLock<Tables>,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_restaurant_id: 1,
                next_reservation_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Seed an operating-hours row for a restaurant.
    ///
    /// The referenced restaurant is not required to exist; like the real
    /// store, referential integrity is not this layer's concern.
    pub fn insert_hours(
        &self,
        restaurant_id: RestaurantId,
        day_of_week: &str,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) {
        self.tables.write().hours.push(OperatingHours {
            restaurant_id: restaurant_id.value(),
            day_of_week: day_of_week.to_string(),
            open_time,
            close_time,
        });
    }

    /// Seed a reservation row for a restaurant. Returns the assigned ID.
    pub fn insert_reservation(
        &self,
        restaurant_id: RestaurantId,
        guest_name: &str,
        party_size: i32,
        reserved_at: NaiveDateTime,
    ) -> i64 {
        let mut tables = self.tables.write();
        let id = tables.next_reservation_id;
        tables.next_reservation_id += 1;
        tables.reservations.push(Reservation {
            id,
            restaurant_id: restaurant_id.value(),
            guest_name: guest_name.to_string(),
            party_size,
            reserved_at,
        });
        id
    }
}

#[async_trait]
impl RestaurantRepository for LocalRepository {
    async fn fetch_restaurant(&self, id: RestaurantId) -> RepositoryResult<Vec<Restaurant>> {
        let tables = self.tables.read();
        Ok(tables
            .restaurants
            .iter()
            .filter(|r| r.id == id.value())
            .cloned()
            .collect())
    }

    async fn fetch_open_hours(&self, id: RestaurantId) -> RepositoryResult<Vec<OperatingHours>> {
        let tables = self.tables.read();
        Ok(tables
            .hours
            .iter()
            .filter(|h| h.restaurant_id == id.value())
            .cloned()
            .collect())
    }

    async fn fetch_all_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        Ok(self.tables.read().restaurants.clone())
    }

    async fn create_restaurant(&self, name: &str) -> RepositoryResult<()> {
        let mut tables = self.tables.write();
        let id = tables.next_restaurant_id;
        tables.next_restaurant_id += 1;
        tables.restaurants.push(Restaurant {
            id,
            name: name.to_string(),
        });
        Ok(())
    }

    async fn delete_restaurant(&self, id: RestaurantId) -> RepositoryResult<()> {
        let mut tables = self.tables.write();
        tables.restaurants.retain(|r| r.id != id.value());
        // Cascade like the Postgres schema's foreign keys.
        tables.hours.retain(|h| h.restaurant_id != id.value());
        tables
            .reservations
            .retain(|r| r.restaurant_id != id.value());
        Ok(())
    }

    async fn fetch_reservations(&self, id: RestaurantId) -> RepositoryResult<Vec<Reservation>> {
        let tables = self.tables.read();
        Ok(tables
            .reservations
            .iter()
            .filter(|r| r.restaurant_id == id.value())
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = LocalRepository::new();
        repo.create_restaurant("First").await.unwrap();
        repo.create_restaurant("Second").await.unwrap();

        let all = repo.fetch_all_restaurants().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[tokio::test]
    async fn duplicate_names_are_distinct_rows() {
        let repo = LocalRepository::new();
        repo.create_restaurant("Twin").await.unwrap();
        repo.create_restaurant("Twin").await.unwrap();

        let all = repo.fetch_all_restaurants().await.unwrap();
        let twins: Vec<_> = all.iter().filter(|r| r.name == "Twin").collect();
        assert_eq!(twins.len(), 2);
        assert_ne!(twins[0].id, twins[1].id);
    }

    #[tokio::test]
    async fn unknown_id_reads_return_empty() {
        let repo = LocalRepository::new();
        let missing = RestaurantId::new(99);
        assert!(repo.fetch_restaurant(missing).await.unwrap().is_empty());
        assert!(repo.fetch_open_hours(missing).await.unwrap().is_empty());
        assert!(repo.fetch_reservations(missing).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_and_is_idempotent() {
        let repo = LocalRepository::new();
        repo.create_restaurant("Cascade").await.unwrap();
        let id = RestaurantId::new(1);
        repo.insert_hours(id, "Monday", time(9, 0), time(22, 0));
        repo.insert_reservation(id, "Alice", 4, NaiveDateTime::default());

        repo.delete_restaurant(id).await.unwrap();
        assert!(repo.fetch_restaurant(id).await.unwrap().is_empty());
        assert!(repo.fetch_open_hours(id).await.unwrap().is_empty());
        assert!(repo.fetch_reservations(id).await.unwrap().is_empty());

        // Deleting again removes zero rows and still succeeds.
        repo.delete_restaurant(id).await.unwrap();
    }

    #[tokio::test]
    async fn hours_keep_insertion_order() {
        let repo = LocalRepository::new();
        repo.create_restaurant("Ordered").await.unwrap();
        let id = RestaurantId::new(1);
        repo.insert_hours(id, "Monday", time(9, 0), time(17, 0));
        repo.insert_hours(id, "Tuesday", time(10, 0), time(18, 0));

        let hours = repo.fetch_open_hours(id).await.unwrap();
        assert_eq!(hours[0].day_of_week, "Monday");
        assert_eq!(hours[1].day_of_week, "Tuesday");
    }
}
