//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the student and course repository ports,
//! backed by a single SQLite database file through `diesel-async`'s
//! synchronous connection wrapper and `bb8` pooling.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module; adapters translate them into domain types before
//! returning.
//!
//! # Example
//!
//! ```ignore
//! use coursedesk::outbound::persistence::{
//!     DbPool, DieselCourseRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("database.db")?;
//! let pool = DbPool::new(PoolConfig::new("database.db")).await?;
//! let courses = DieselCourseRepository::new(pool);
//! ```

mod diesel_course_repository;
mod diesel_error_mapping;
mod diesel_student_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::run_migrations;
pub use pool::{DbPool, PoolConfig, PoolError, SqliteAsyncConnection};
