use bcrypt::{hash, verify};

/// Hash a plaintext password with a fresh salt. Two calls with the same
/// input produce different hashes; `match_password` verifies either.
pub fn encrypt_password(plain: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(plain, cost)
}

/// Check a plaintext password against a stored hash. Mismatch is a normal
/// `false`, never an error; a malformed stored hash is also `false`.
pub fn match_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}
