//! bcrypt-backed `PasswordHasher` implementation.

use tracing::{error, warn};

use crate::domain::ports::PasswordHasher;
use crate::domain::{Error, PasswordHash};

/// Hashes passwords with bcrypt at a configurable cost.
///
/// bcrypt only reads the first 72 bytes of a password.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Lowest cost bcrypt accepts; intended for tests.
    pub const MIN_COST: u32 = 4;

    /// Create a hasher with the given cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured cost factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, Error> {
        bcrypt::hash(plaintext, self.cost)
            .map(PasswordHash::new)
            .map_err(|err| {
                error!(error = %err, cost = self.cost, "password hashing failed");
                Error::internal(format!("password hashing failed: {err}"))
            })
    }

    fn verify(&self, plaintext: &str, digest: &PasswordHash) -> bool {
        bcrypt::verify(plaintext, digest.as_str()).unwrap_or_else(|err| {
            warn!(error = %err, "stored password digest is malformed");
            false
        })
    }
}
