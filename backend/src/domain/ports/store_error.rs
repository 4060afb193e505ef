//! Failures shared by the student and course repository ports.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by store adapters.
    pub enum StoreError {
        /// The store could not be reached or a connection could not be checked out.
        Connection => "store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query => "store query failed: {message}",
    }
}
