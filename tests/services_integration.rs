//! Service-layer integration tests with seeded hours and reservations.

use chrono::{NaiveDate, NaiveTime};

use rsvp_rust::api::RestaurantId;
use rsvp_rust::db::repositories::LocalRepository;
use rsvp_rust::db::services;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[tokio::test]
async fn open_hours_follow_their_restaurant() {
    let repo = LocalRepository::new();
    services::add_restaurant(&repo, "Weekly").await.unwrap();
    services::add_restaurant(&repo, "Other").await.unwrap();
    let weekly = RestaurantId::new(1);
    let other = RestaurantId::new(2);

    repo.insert_hours(weekly, "Monday", time(9, 0), time(22, 0));
    repo.insert_hours(weekly, "Tuesday", time(9, 0), time(22, 0));
    repo.insert_hours(other, "Sunday", time(12, 0), time(20, 0));

    let hours = services::get_open_hours(&repo, weekly).await.unwrap();
    assert_eq!(hours.len(), 2);
    assert!(hours.iter().all(|h| h.restaurant_id == weekly.value()));

    let hours = services::get_open_hours(&repo, other).await.unwrap();
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].day_of_week, "Sunday");
}

#[tokio::test]
async fn reservations_follow_their_restaurant() {
    let repo = LocalRepository::new();
    services::add_restaurant(&repo, "Busy").await.unwrap();
    let busy = RestaurantId::new(1);
    let at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(19, 30, 0)
        .unwrap();

    repo.insert_reservation(busy, "Alice", 4, at);
    repo.insert_reservation(busy, "Bob", 2, at);

    let reservations = services::list_reservations(&repo, busy).await.unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].guest_name, "Alice");
    assert_eq!(reservations[1].guest_name, "Bob");
}

#[tokio::test]
async fn deleting_restaurant_drops_dependent_rows() {
    let repo = LocalRepository::new();
    services::add_restaurant(&repo, "Closing Down").await.unwrap();
    let id = RestaurantId::new(1);
    repo.insert_hours(id, "Friday", time(17, 0), time(23, 0));
    repo.insert_reservation(
        id,
        "Dana",
        6,
        NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap(),
    );

    services::remove_restaurant(&repo, id).await.unwrap();

    assert!(services::get_open_hours(&repo, id).await.unwrap().is_empty());
    assert!(services::list_reservations(&repo, id)
        .await
        .unwrap()
        .is_empty());
}
