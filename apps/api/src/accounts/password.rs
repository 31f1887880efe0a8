use anyhow::{Context, Result};

/// Work factor for stored hashes (2^10 rounds).
const BCRYPT_COST: u32 = 10;

/// bcrypt is deliberately slow, so hashing runs on the blocking pool.
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .context("Password hashing task failed")?
        .context("Failed to hash password")
}
