//! Course catalogue model.
//!
//! Courses carry no range invariants: negative prices, durations, or
//! discounts are stored as given.

use std::fmt;

/// System-assigned course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(i32);

impl CourseId {
    /// Wrap a raw identifier assigned by the store.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub price: i32,
    pub duration: i32,
    pub discount: i32,
}

/// Course awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub price: i32,
    pub duration: i32,
    pub discount: i32,
}

impl NewCourse {
    /// Attach the identifier assigned by the store.
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            name: self.name,
            price: self.price,
            duration: self.duration,
            discount: self.discount,
        }
    }

    /// Build a course from raw form text, parsing the numeric fields.
    ///
    /// Surrounding whitespace is ignored on numeric fields; anything else
    /// that is not a base-10 `i32` is rejected.
    ///
    /// # Examples
    /// ```
    /// use coursedesk::domain::NewCourse;
    ///
    /// let course = NewCourse::try_from_form("Algebra", "100", " 30 ", "-10").unwrap();
    /// assert_eq!(course.duration, 30);
    /// assert_eq!(course.discount, -10);
    /// assert!(NewCourse::try_from_form("Algebra", "cheap", "30", "10").is_err());
    /// ```
    pub fn try_from_form(
        name: &str,
        price: &str,
        duration: &str,
        discount: &str,
    ) -> Result<Self, CourseFieldError> {
        Ok(Self {
            name: name.to_owned(),
            price: parse_field(CourseField::Price, price)?,
            duration: parse_field(CourseField::Duration, duration)?,
            discount: parse_field(CourseField::Discount, discount)?,
        })
    }
}

/// Numeric course fields accepted from forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Price,
    Duration,
    Discount,
}

impl CourseField {
    /// Form field name used by the course creation form.
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::Price => "course_price",
            Self::Duration => "course_duration",
            Self::Discount => "course_discount",
        }
    }
}

/// A numeric course field could not be parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} must be an integer, got '{value}'", field.form_name())]
pub struct CourseFieldError {
    pub field: CourseField,
    pub value: String,
}

fn parse_field(field: CourseField, raw: &str) -> Result<i32, CourseFieldError> {
    raw.trim().parse().map_err(|_| CourseFieldError {
        field,
        value: raw.to_owned(),
    })
}
