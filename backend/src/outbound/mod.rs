//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: SQLite-backed repositories using Diesel ORM
//! - **memory**: process-local repositories for `--in-memory` runs
//! - **security**: bcrypt password hashing
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod security;
