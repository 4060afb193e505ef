//! Course Desk: student registration and a session-gated course catalogue.
//!
//! Layout follows ports and adapters: [`domain`] holds records, services,
//! and ports; [`inbound`] serves HTTP; [`outbound`] implements storage and
//! hashing; [`server`] wires them into an Actix server.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::Trace;
