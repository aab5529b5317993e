//! Password hashing and verification.
//!
//! bcrypt with a fixed work factor, executed on the blocking pool so a
//! multi-millisecond hash never stalls the async executor. Verification
//! relies on bcrypt's internal constant-time comparison, so a mismatch
//! costs the same as a match.

use tokio::task;
use zeroize::Zeroizing;

use crate::domain::error::Error;
use crate::domain::user::PasswordHash;

/// bcrypt work factor applied when hashing new passwords.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage.
///
/// Each call draws a fresh salt, so hashing the same plaintext twice
/// yields different strings; [`verify`] still accepts both.
pub async fn hash(plaintext: &str) -> Result<PasswordHash, Error> {
    let plaintext = Zeroizing::new(plaintext.to_owned());
    let hash = task::spawn_blocking(move || bcrypt::hash(plaintext.as_str(), HASH_COST))
        .await
        .map_err(|error| Error::internal(format!("password hashing task failed: {error}")))?
        .map_err(|error| Error::internal(format!("password hashing failed: {error}")))?;
    Ok(PasswordHash::new(hash))
}

/// Check a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch. `Err` is reserved for a malformed
/// stored hash or a failed blocking task, both of which surface as opaque
/// internal errors rather than as authentication feedback.
pub async fn verify(plaintext: &str, hash: &PasswordHash) -> Result<bool, Error> {
    let plaintext = Zeroizing::new(plaintext.to_owned());
    let hash = hash.as_str().to_owned();
    task::spawn_blocking(move || bcrypt::verify(plaintext.as_str(), &hash))
        .await
        .map_err(|error| Error::internal(format!("password verification task failed: {error}")))?
        .map_err(|error| Error::internal(format!("password verification failed: {error}")))
}
