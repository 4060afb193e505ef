//! Driving port for course catalogue use-cases.
//!
//! Gated operations take the authenticated [`StudentId`]; inbound adapters
//! can only obtain one from an active session.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Error, NewCourse, StudentId};

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_courses: u64,
    pub total_students: u64,
}

/// Course catalogue use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// List every course. Public.
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;

    /// Persist a new course on behalf of `actor`.
    async fn create_course(&self, actor: StudentId, course: NewCourse) -> Result<Course, Error>;

    /// Delete a course on behalf of `actor`.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode) when the
    /// course does not exist.
    async fn delete_course(&self, actor: StudentId, id: CourseId) -> Result<(), Error>;

    /// Live course and student counts.
    async fn dashboard_stats(&self, actor: StudentId) -> Result<DashboardStats, Error>;
}
