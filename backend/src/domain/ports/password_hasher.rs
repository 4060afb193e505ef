//! Driven port for one-way credential hashing.

use crate::domain::{Error, PasswordHash};

/// Salted one-way password hashing.
///
/// Hashing the same plaintext twice may yield different digests, but
/// [`PasswordHasher::verify`] accepts every digest produced by
/// [`PasswordHasher::hash`] for that plaintext.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest for `plaintext`.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, Error>;

    /// Return `true` iff `plaintext` matches `digest`. Malformed digests
    /// never match.
    fn verify(&self, plaintext: &str, digest: &PasswordHash) -> bool;
}
