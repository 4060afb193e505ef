//! Student account domain service.
//!
//! Implements the [`AccountService`] driving port on top of the student
//! repository and the password hasher. The duplicate-email check and the
//! insert are two separate store calls; concurrent registrations for the
//! same email are not serialised here.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    AccountService, DUPLICATE_ACCOUNT_MESSAGE, INVALID_CREDENTIALS_MESSAGE, PasswordHasher,
    StoreError, StudentRepository,
};
use crate::domain::{Error, LoginCredentials, NewStudent, Registration, Student, StudentId};

pub(crate) fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("store unavailable: {message}"))
        }
        StoreError::Query { message } => Error::internal(format!("store error: {message}")),
    }
}

/// Registration and login backed by a student repository.
#[derive(Clone)]
pub struct StudentAccountService<S, H> {
    students: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> StudentAccountService<S, H> {
    /// Create a new service from its repository and hasher.
    pub fn new(students: Arc<S>, hasher: Arc<H>) -> Self {
        Self { students, hasher }
    }
}

#[async_trait]
impl<S, H> AccountService for StudentAccountService<S, H>
where
    S: StudentRepository,
    H: PasswordHasher,
{
    async fn register(&self, registration: &Registration) -> Result<Student, Error> {
        let existing = self
            .students
            .find_by_email(registration.email())
            .await
            .map_err(map_store_error)?;
        if existing.is_some() {
            info!("registration rejected: email already registered");
            return Err(Error::duplicate_account(DUPLICATE_ACCOUNT_MESSAGE));
        }

        let password = self.hasher.hash(registration.password())?;
        let student = self
            .students
            .create(NewStudent {
                username: registration.username().to_owned(),
                email: registration.email().to_owned(),
                password,
            })
            .await
            .map_err(map_store_error)?;

        info!(student_id = %student.id(), "student registered");
        Ok(student)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<StudentId, Error> {
        let Some(student) = self
            .students
            .find_by_email(credentials.email())
            .await
            .map_err(map_store_error)?
        else {
            warn!("login rejected: unknown email");
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        };

        if !self.hasher.verify(credentials.password(), student.password()) {
            warn!(student_id = %student.id(), "login rejected: password mismatch");
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        }

        info!(student_id = %student.id(), "student authenticated");
        Ok(student.id())
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
