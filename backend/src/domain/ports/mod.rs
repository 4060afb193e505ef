//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`AccountService`], [`CourseCatalog`]) are called by
//! inbound adapters. Driven ports ([`StudentRepository`],
//! [`CourseRepository`], [`PasswordHasher`]) are implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod course_catalog;
mod course_repository;
mod password_hasher;
mod store_error;
mod student_repository;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::{
    AccountService, DUPLICATE_ACCOUNT_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
};
#[cfg(test)]
pub use course_catalog::MockCourseCatalog;
pub use course_catalog::{CourseCatalog, DashboardStats};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::CourseRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::PasswordHasher;
pub use store_error::StoreError;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::StudentRepository;
