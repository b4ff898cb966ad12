//! Argon2 password hashing.
//!
//! The original service hashed passwords with a single unsalted round of
//! SHA-256; that scheme is not ported. Every digest here is an Argon2id
//! PHC string with a fresh random salt, so equal passwords produce
//! distinct digests and verification goes through the PHC parser rather
//! than string equality.

use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

/// Minimum accepted password length, enforced at registration and on
/// password change.
pub const MIN_PASSWORD: usize = 8;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}
