//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! Browser-facing HTTP handlers live under [`http`].

pub mod http;
