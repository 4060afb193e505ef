//! SQLite-backed `CourseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CourseRepository, StoreError};
use crate::domain::{Course, CourseId, NewCourse};

use super::diesel_error_mapping::{count_to_u64, map_diesel_error, map_pool_error};
use super::models::{CourseRow, NewCourseRow};
use super::pool::DbPool;
use super::schema::courses;

/// Diesel-backed implementation of the `CourseRepository` port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn create(&self, course: NewCourse) -> Result<Course, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CourseRow = diesel::insert_into(courses::table)
            .values(NewCourseRow::from(&course))
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CourseRow> = courses::table
            .find(id.get())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Course::from))
    }

    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CourseRow> = courses::table
            .order(courses::id.asc())
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn delete(&self, id: CourseId) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(courses::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(course_id = %id, deleted, "course delete executed");
        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = courses::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        count_to_u64(total)
    }
}
