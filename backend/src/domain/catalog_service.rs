//! Course catalogue domain service.
//!
//! Implements the [`CourseCatalog`] driving port. Gated operations receive
//! the acting student's id; they use it only for audit logging.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::account_service::map_store_error;
use crate::domain::ports::{CourseCatalog, CourseRepository, DashboardStats, StudentRepository};
use crate::domain::{Course, CourseId, Error, NewCourse, StudentId};

/// Catalogue use-cases backed by the course and student repositories.
#[derive(Clone)]
pub struct CourseCatalogService<C, S> {
    courses: Arc<C>,
    students: Arc<S>,
}

impl<C, S> CourseCatalogService<C, S> {
    /// Create a new service over the two repositories.
    pub fn new(courses: Arc<C>, students: Arc<S>) -> Self {
        Self { courses, students }
    }
}

#[async_trait]
impl<C, S> CourseCatalog for CourseCatalogService<C, S>
where
    C: CourseRepository,
    S: StudentRepository,
{
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        self.courses.list().await.map_err(map_store_error)
    }

    async fn create_course(&self, actor: StudentId, course: NewCourse) -> Result<Course, Error> {
        let course = self.courses.create(course).await.map_err(map_store_error)?;
        info!(student_id = %actor, course_id = %course.id, "course created");
        Ok(course)
    }

    async fn delete_course(&self, actor: StudentId, id: CourseId) -> Result<(), Error> {
        let not_found = || Error::not_found(format!("course {id} not found"));

        self.courses
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(not_found)?;

        // Another request may have removed the row since the lookup.
        if !self.courses.delete(id).await.map_err(map_store_error)? {
            return Err(not_found());
        }

        info!(student_id = %actor, course_id = %id, "course deleted");
        Ok(())
    }

    async fn dashboard_stats(&self, _actor: StudentId) -> Result<DashboardStats, Error> {
        let total_courses = self.courses.count().await.map_err(map_store_error)?;
        let total_students = self.students.count().await.map_err(map_store_error)?;
        Ok(DashboardStats {
            total_courses,
            total_students,
        })
    }
}
