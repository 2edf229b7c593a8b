//! Error-path tests: storage failures pass through to the client and
//! rejected requests never reach the repository.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use rsvp_rust::api::{OperatingHours, Reservation, Restaurant, RestaurantId};
use rsvp_rust::db::repository::{RepositoryError, RepositoryResult, RestaurantRepository};
use rsvp_rust::http::{create_router, AppState};

/// Repository whose every operation fails with a query error.
struct FailingRepository;

#[async_trait]
impl RestaurantRepository for FailingRepository {
    async fn fetch_restaurant(&self, _id: RestaurantId) -> RepositoryResult<Vec<Restaurant>> {
        Err(RepositoryError::query("simulated query failure"))
    }

    async fn fetch_open_hours(&self, _id: RestaurantId) -> RepositoryResult<Vec<OperatingHours>> {
        Err(RepositoryError::query("simulated query failure"))
    }

    async fn fetch_all_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        Err(RepositoryError::query("simulated query failure"))
    }

    async fn create_restaurant(&self, _name: &str) -> RepositoryResult<()> {
        Err(RepositoryError::query("simulated query failure"))
    }

    async fn delete_restaurant(&self, _id: RestaurantId) -> RepositoryResult<()> {
        Err(RepositoryError::query("simulated query failure"))
    }

    async fn fetch_reservations(&self, _id: RestaurantId) -> RepositoryResult<Vec<Reservation>> {
        Err(RepositoryError::query("simulated query failure"))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Err(RepositoryError::connection("simulated connection failure"))
    }
}

/// Repository that counts how many operations reach it.
#[derive(Default)]
struct CountingRepository {
    calls: AtomicUsize,
}

impl CountingRepository {
    fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RestaurantRepository for CountingRepository {
    async fn fetch_restaurant(&self, _id: RestaurantId) -> RepositoryResult<Vec<Restaurant>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn fetch_open_hours(&self, _id: RestaurantId) -> RepositoryResult<Vec<OperatingHours>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn fetch_all_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn create_restaurant(&self, _name: &str) -> RepositoryResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete_restaurant(&self, _id: RestaurantId) -> RepositoryResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn fetch_reservations(&self, _id: RestaurantId) -> RepositoryResult<Vec<Reservation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

fn app(repo: Arc<dyn RestaurantRepository>) -> Router {
    create_router(AppState::new(repo))
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn storage_failure_is_surfaced_unredacted() {
    let router = app(Arc::new(FailingRepository));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/restaurant?restaurantID=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("simulated query failure"), "{}", message);
}

#[tokio::test]
async fn create_failure_is_surfaced() {
    let router = app(Arc::new(FailingRepository));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/restaurant")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Doomed"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("simulated query failure"));
}

#[tokio::test]
async fn health_reports_storage_failure_without_failing_the_request() {
    let router = app(Arc::new(FailingRepository));

    let response = router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["database"].as_str().unwrap().starts_with("error:"));
}

#[tokio::test]
async fn rejected_requests_never_reach_storage() {
    let repo = Arc::new(CountingRepository::default());
    let router = app(repo.clone() as Arc<dyn RestaurantRepository>);

    let rejected = [
        ("GET", "/restaurant"),
        ("GET", "/restaurant/openhours"),
        ("GET", "/restaurant/getall?extra=1"),
        ("DELETE", "/restaurant"),
        ("GET", "/restaurant/bogus/reservations"),
        ("POST", "/restaurant"),
    ];

    for (method, uri) in rejected {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", method, uri);
    }

    // Missing name on POST, with a well-formed form body.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/restaurant")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(""))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(repo.count(), 0);
}
