//! Process-local repositories for `--in-memory` runs and tests.
//!
//! Identifiers start at 1 and are never reused, matching SQLite's
//! `AUTOINCREMENT` columns. Contents are lost when the process exits.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{CourseRepository, StoreError, StudentRepository};
use crate::domain::{Course, CourseId, NewCourse, NewStudent, Student, StudentId};

struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> Result<i32, StoreError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::query("identifier space exhausted"))?;
        Ok(id)
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> Result<MutexGuard<'_, Table<T>>, StoreError> {
    table
        .lock()
        .map_err(|_| StoreError::connection("in-memory store lock poisoned"))
}

fn row_count<T>(table: &Table<T>) -> u64 {
    u64::try_from(table.rows.len()).unwrap_or(u64::MAX)
}

/// In-memory implementation of the `StudentRepository` port.
///
/// Rejects a second student with the same email the way the SQLite UNIQUE
/// constraint does.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    table: Mutex<Table<Student>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, student: NewStudent) -> Result<Student, StoreError> {
        let mut table = lock(&self.table)?;
        if table.rows.values().any(|s| s.email() == student.email) {
            return Err(StoreError::query("unique constraint violated"));
        }
        let id = table.allocate_id()?;
        let stored = student.into_student(StudentId::new(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        Ok(lock(&self.table)?.rows.get(&id.get()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        Ok(lock(&self.table)?
            .rows
            .values()
            .find(|s| s.email() == email)
            .cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(row_count(&*lock(&self.table)?))
    }
}

/// In-memory implementation of the `CourseRepository` port.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    table: Mutex<Table<Course>>,
}

impl InMemoryCourseRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: NewCourse) -> Result<Course, StoreError> {
        let mut table = lock(&self.table)?;
        let id = table.allocate_id()?;
        let stored = course.into_course(CourseId::new(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        Ok(lock(&self.table)?.rows.get(&id.get()).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        Ok(lock(&self.table)?.rows.values().cloned().collect())
    }

    async fn delete(&self, id: CourseId) -> Result<bool, StoreError> {
        Ok(lock(&self.table)?.rows.remove(&id.get()).is_some())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(row_count(&*lock(&self.table)?))
    }
}
