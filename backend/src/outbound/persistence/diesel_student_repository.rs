//! SQLite-backed `StudentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreError, StudentRepository};
use crate::domain::{NewStudent, Student, StudentId};

use super::diesel_error_mapping::{count_to_u64, map_diesel_error, map_pool_error};
use super::models::{NewStudentRow, StudentRow};
use super::pool::DbPool;
use super::schema::students;

/// Diesel-backed implementation of the `StudentRepository` port.
///
/// The `students.email` column carries a UNIQUE constraint, so a concurrent
/// duplicate insert that slips past the service's lookup fails as a query
/// error rather than creating a second account.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn create(&self, student: NewStudent) -> Result<Student, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: StudentRow = diesel::insert_into(students::table)
            .values(NewStudentRow::from(&student))
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<StudentRow> = students::table
            .find(id.get())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Student::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<StudentRow> = students::table
            .filter(students::email.eq(email))
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Student::from))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = students::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        count_to_u64(total)
    }
}
