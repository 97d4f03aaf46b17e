//! PostgreSQL adapters built on Diesel, `diesel-async` and a `bb8` pool.
//!
//! Repositories only translate between row structs and domain types. Row
//! structs (`models`) and table definitions (`schema`) stay private to this
//! module.
//!
//! ```ignore
//! use temple_backend::outbound::persistence::{DbPool, DieselBookingRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/temple")).await?;
//! let bookings = DieselBookingRepository::new(pool.clone());
//! ```

mod diesel_activity_repository;
mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod diesel_database_probe;
mod diesel_gallery_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_activity_repository::DieselActivityRepository;
pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_database_probe::DieselDatabaseProbe;
pub use diesel_gallery_repository::DieselGalleryRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
