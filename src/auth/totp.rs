//! One-time password generation for the SmartAPI login flow.
//!
//! The broker enrolls accounts through Google Authenticator, so codes follow
//! the RFC 6238 defaults: SHA-1, 6 digits, 30 second step, base32 secret.

use anyhow::{Context, Result};
use totp_rs::{Algorithm, Secret, TOTP};

fn build(secret: &str) -> Result<TOTP> {
    let key = Secret::Encoded(secret.to_string())
        .to_bytes()
        .map_err(|e| anyhow::anyhow!("TOTP secret is not valid base32: {:?}", e))?;
    TOTP::new(Algorithm::SHA1, 6, 1, 30, key)
        .map_err(|e| anyhow::anyhow!("Invalid TOTP secret: {:?}", e))
}

/// Code for the current 30 second window.
pub fn generate_code(secret: &str) -> Result<String> {
    build(secret)?
        .generate_current()
        .context("System clock is before the unix epoch")
}

/// Code for a fixed unix timestamp.
pub fn generate_code_at(secret: &str, unix_seconds: u64) -> Result<String> {
    Ok(build(secret)?.generate(unix_seconds))
}
