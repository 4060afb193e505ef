//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};

use crate::outbound::persistence::DbPool;
use crate::outbound::security::BcryptPasswordHasher;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) hasher: BcryptPasswordHasher,
}

impl ServerConfig {
    /// Construct a server configuration from session settings and an address.
    ///
    /// Without [`ServerConfig::with_db_pool`] the server keeps its data in
    /// process memory.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            hasher: BcryptPasswordHasher::default(),
        }
    }

    /// Store students and courses in SQLite through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Replace the default-cost password hasher.
    #[must_use]
    pub fn with_password_hasher(mut self, hasher: BcryptPasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
