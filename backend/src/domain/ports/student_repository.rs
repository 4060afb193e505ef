//! Driven port for student persistence.

use async_trait::async_trait;

use crate::domain::{NewStudent, Student, StudentId};

use super::StoreError;

/// Student side of the persistent store.
///
/// Email uniqueness is not guaranteed by this port; callers check with
/// [`StudentRepository::find_by_email`] before creating.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persist a new student and return it with its assigned id.
    async fn create(&self, student: NewStudent) -> Result<Student, StoreError>;

    /// Fetch a student by identifier.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StoreError>;

    /// Fetch the student registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError>;

    /// Number of stored students.
    async fn count(&self) -> Result<u64, StoreError>;
}
