//! Postgres repository implementation using Diesel.
//!
//! This module implements [`RestaurantRepository`] against a Postgres
//! database. Each trait method maps to a single parameterized query; no
//! operation spans more than one statement, so no explicit transactions
//! are used. Queries run on the blocking thread pool via
//! `tokio::task::spawn_blocking` since Diesel is synchronous.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic migration execution on startup
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;
use tokio::task;

use crate::api::{OperatingHours, Reservation, Restaurant, RestaurantId};
use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, RestaurantRepository,
};

mod models;
mod schema;

use models::{HoursRow, NewRestaurantRow, ReservationRow, RestaurantRow};
use schema::{hours, reservation, restaurant};

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
        })
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .build(manager)
            .map_err(|e| {
                RepositoryError::ConnectionError {
                    message: format!("Failed to create connection pool: {}", e),
                    context: ErrorContext::new("pool_init"),
                }
            })?;

        let repo = Self { pool };
        repo.run_migrations()?;
        Ok(repo)
    }

    fn run_migrations(&self) -> RepositoryResult<()> {
        let mut conn = self.pool.get()?;
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::configuration(format!("Migration failed: {}", e))
        })?;
        tracing::info!("Database migrations up to date");
        Ok(())
    }

    /// Run a synchronous Diesel closure on the blocking thread pool.
    async fn run_query<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, diesel::result::Error> + Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn).map_err(RepositoryError::from)
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))?
        .map_err(|e| e.with_operation(operation))
    }
}

#[async_trait]
impl RestaurantRepository for PostgresRepository {
    async fn fetch_restaurant(&self, id: RestaurantId) -> RepositoryResult<Vec<Restaurant>> {
        let rows = self
            .run_query("fetch_restaurant", move |conn| {
                restaurant::table
                    .filter(restaurant::id.eq(id.value()))
                    .load::<RestaurantRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_open_hours(&self, id: RestaurantId) -> RepositoryResult<Vec<OperatingHours>> {
        let rows = self
            .run_query("fetch_open_hours", move |conn| {
                hours::table
                    .filter(hours::restaurant_id.eq(id.value()))
                    .load::<HoursRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_all_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        let rows = self
            .run_query("fetch_all_restaurants", |conn| {
                restaurant::table.load::<RestaurantRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_restaurant(&self, name: &str) -> RepositoryResult<()> {
        let name = name.to_string();
        self.run_query("create_restaurant", move |conn| {
            diesel::insert_into(restaurant::table)
                .values(NewRestaurantRow { name: &name })
                .execute(conn)
        })
        .await?;
        Ok(())
    }

    async fn delete_restaurant(&self, id: RestaurantId) -> RepositoryResult<()> {
        // Deleting zero rows is not an error; the row count is discarded.
        self.run_query("delete_restaurant", move |conn| {
            diesel::delete(restaurant::table.filter(restaurant::id.eq(id.value()))).execute(conn)
        })
        .await?;
        Ok(())
    }

    async fn fetch_reservations(&self, id: RestaurantId) -> RepositoryResult<Vec<Reservation>> {
        let rows = self
            .run_query("fetch_reservations", move |conn| {
                reservation::table
                    .filter(reservation::restaurant_id.eq(id.value()))
                    .load::<ReservationRow>(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.run_query("health_check", |conn| sql_query("SELECT 1").execute(conn))
            .await?;
        Ok(true)
    }
}
