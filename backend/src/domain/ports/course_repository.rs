//! Driven port for course persistence.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, NewCourse};

use super::StoreError;

/// Course side of the persistent store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist a new course and return it with its assigned id.
    async fn create(&self, course: NewCourse) -> Result<Course, StoreError>;

    /// Fetch a course by identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, StoreError>;

    /// All courses in ascending id order.
    async fn list(&self) -> Result<Vec<Course>, StoreError>;

    /// Remove a course. Returns `false` when no row matched.
    async fn delete(&self, id: CourseId) -> Result<bool, StoreError>;

    /// Number of stored courses.
    async fn count(&self) -> Result<u64, StoreError>;
}
