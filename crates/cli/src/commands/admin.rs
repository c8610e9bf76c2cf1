//! Admin password commands.
//!
//! # Usage
//!
//! ```bash
//! cnb-cli admin hash-password 'new password'
//! ```
//!
//! Put the printed digest in `ADMIN_PASSWORD_SHA256`.

use cakes_n_bells_core::auth::password_digest;

/// Print the hex SHA-256 digest of `password`.
#[allow(clippy::print_stdout)]
pub fn hash_password(password: &str) {
    println!("{}", password_digest(password));
}
