//! Admin password gate.
//!
//! The admin panel is protected by a single shared password. Only its
//! SHA-256 digest is configured; a plaintext fallback exists for deployments
//! where the digest is missing or malformed.

use sha2::{Digest, Sha256};

/// Digest accepted when none is configured.
pub const DEFAULT_PASSWORD_DIGEST: &str =
    "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Denied,
}

impl AuthOutcome {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Checks an admin password.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, password: &str) -> AuthOutcome;
}

/// Lowercase hex SHA-256 of a password.
#[must_use]
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Returns true if `digest` is 64 hex characters.
#[must_use]
pub fn is_valid_digest(digest: &str) -> bool {
    digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit())
}

/// Compares the SHA-256 of the password with a configured digest.
///
/// If the digest is unusable the gate compares the plaintext against the
/// fallback password instead, and denies everything when there is none.
#[derive(Clone)]
pub struct DigestGate {
    digest: Option<String>,
    fallback: Option<String>,
}

impl DigestGate {
    #[must_use]
    pub fn new(digest: Option<&str>, fallback: Option<String>) -> Self {
        let digest = digest
            .map(str::trim)
            .filter(|d| is_valid_digest(d))
            .map(str::to_ascii_lowercase);
        if digest.is_none() {
            tracing::warn!("admin password digest unavailable, using plaintext fallback");
        }
        Self { digest, fallback }
    }

    /// Returns true if the digest path is active.
    #[must_use]
    pub const fn uses_digest(&self) -> bool {
        self.digest.is_some()
    }
}

impl Default for DigestGate {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PASSWORD_DIGEST), None)
    }
}

impl std::fmt::Debug for DigestGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestGate")
            .field("digest", &self.digest)
            .field("fallback", &self.fallback.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Authenticator for DigestGate {
    fn authenticate(&self, password: &str) -> AuthOutcome {
        let granted = match (&self.digest, &self.fallback) {
            (Some(expected), _) => password_digest(password) == *expected,
            (None, Some(fallback)) => password == fallback,
            (None, None) => false,
        };
        if granted {
            AuthOutcome::Granted
        } else {
            AuthOutcome::Denied
        }
    }
}
