//! Driving port for registration and login.
//!
//! Inbound adapters call this port to register and authenticate students
//! without knowing which store or hasher backs it.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, Student, StudentId};

/// Message returned when registration collides with an existing email.
pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "User already exists";
/// Message returned for any failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Account use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new student.
    ///
    /// Fails with [`ErrorCode::DuplicateAccount`](crate::domain::ErrorCode)
    /// when the email is already registered.
    async fn register(&self, registration: &Registration) -> Result<Student, Error>;

    /// Validate credentials and return the authenticated student id.
    ///
    /// Fails with [`ErrorCode::InvalidCredentials`](crate::domain::ErrorCode)
    /// for an unknown email or a wrong password alike.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<StudentId, Error>;
}
