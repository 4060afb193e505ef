//! Domain primitives, services, and ports.
//!
//! Purpose: keep student accounts and the course catalogue free of HTTP and
//! storage concerns. Inbound adapters call the driving ports in [`ports`];
//! outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failures.
//! - Student, StudentId, PasswordHash — registered accounts.
//! - Course, CourseId, NewCourse — catalogue records.
//! - StudentAccountService, CourseCatalogService — port implementations.

pub mod account_service;
pub mod auth;
pub mod catalog_service;
pub mod course;
pub mod error;
pub mod ports;
pub mod student;

pub use self::account_service::StudentAccountService;
pub use self::auth::{LoginCredentials, Registration};
pub use self::catalog_service::CourseCatalogService;
pub use self::course::{Course, CourseField, CourseFieldError, CourseId, NewCourse};
pub use self::error::{Error, ErrorCode};
pub use self::student::{NewStudent, PasswordHash, Student, StudentId};

/// Response header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
