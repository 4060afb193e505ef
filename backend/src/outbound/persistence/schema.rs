//! Diesel table definitions for the SQLite schema.
//!
//! Must match `migrations/` exactly. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Registered student accounts.
    students (id) {
        id -> Integer,
        username -> Text,
        /// bcrypt digest, never plaintext.
        password -> Text,
        email -> Text,
    }
}

diesel::table! {
    /// Course catalogue.
    courses (id) {
        id -> Integer,
        name -> Text,
        price -> Integer,
        duration -> Integer,
        discount -> Integer,
    }
}
