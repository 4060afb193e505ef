//! Student account model.
//!
//! Students are created on registration and never updated or deleted. The
//! stored password is always a digest produced by a
//! [`PasswordHasher`](crate::domain::ports::PasswordHasher).

use std::fmt;
use std::str::FromStr;

/// System-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(i32);

impl StudentId {
    /// Wrap a raw identifier assigned by the store.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// One-way password digest as persisted alongside a student.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded digest.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded digest text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Student record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    username: String,
    email: String,
    password: PasswordHash,
}

impl Student {
    /// Assemble a stored student.
    pub fn new(
        id: StudentId,
        username: impl Into<String>,
        email: impl Into<String>,
        password: PasswordHash,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Username chosen at registration.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Account email; unique across students.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored password digest.
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }
}

/// Student awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub username: String,
    pub email: String,
    pub password: PasswordHash,
}

impl NewStudent {
    /// Attach the identifier assigned by the store.
    pub fn into_student(self, id: StudentId) -> Student {
        Student::new(id, self.username, self.email, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7", Some(7))]
    #[case("-3", Some(-3))]
    #[case("seven", None)]
    #[case("", None)]
    fn student_id_parses_integers(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(raw.parse::<StudentId>().ok().map(StudentId::get), expected);
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$2b$04$secret");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }

    #[rstest]
    fn new_student_keeps_fields_when_stored() {
        let pending = NewStudent {
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            password: PasswordHash::new("digest"),
        };
        let student = pending.into_student(StudentId::new(1));
        assert_eq!(student.id(), StudentId::new(1));
        assert_eq!(student.username(), "alice");
        assert_eq!(student.email(), "a@x.com");
        assert_eq!(student.password().as_str(), "digest");
    }
}
