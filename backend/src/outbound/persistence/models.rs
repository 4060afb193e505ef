//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence module; adapters convert them to
//! domain records.

use diesel::prelude::*;

use crate::domain::{Course, CourseId, NewCourse, NewStudent, PasswordHash, Student, StudentId};

use super::schema::{courses, students};

/// Row struct for reading from the students table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct StudentRow {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(
            StudentId::new(row.id),
            row.username,
            row.email,
            PasswordHash::new(row.password),
        )
    }
}

/// Insertable struct for creating student records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a NewStudent> for NewStudentRow<'a> {
    fn from(student: &'a NewStudent) -> Self {
        Self {
            username: &student.username,
            password: student.password.as_str(),
            email: &student.email,
        }
    }
}

/// Row struct for reading from the courses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CourseRow {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub duration: i32,
    pub discount: i32,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: CourseId::new(row.id),
            name: row.name,
            price: row.price,
            duration: row.duration,
            discount: row.discount,
        }
    }
}

/// Insertable struct for creating course records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub name: &'a str,
    pub price: i32,
    pub duration: i32,
    pub discount: i32,
}

impl<'a> From<&'a NewCourse> for NewCourseRow<'a> {
    fn from(course: &'a NewCourse) -> Self {
        Self {
            name: &course.name,
            price: course.price,
            duration: course.duration,
            discount: course.discount,
        }
    }
}
