use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use rand_core::{OsRng, RngCore};
use std::sync::OnceLock;
use uuid::Uuid;

use crate::types::error::AppError;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random token secret. Only its hash is stored.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Bearer value handed to clients: base64 of `<user id>.<secret>`.
pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    STANDARD.encode(format!("{user_id}.{secret}"))
}

/// Reverse of [`construct_token`]. `None` for anything malformed.
pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = STANDARD.decode(token.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    if secret.is_empty() {
        return None;
    }
    Some((Uuid::parse_str(id).ok()?, secret.to_string()))
}

/// Argon2id hashing for passwords and token secrets.
pub struct SecretHasher {
    argon: Argon2<'static>,
    dummy_hash: OnceLock<String>,
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self { argon: Argon2::default(), dummy_hash: OnceLock::new() }
    }
}

impl SecretHasher {
    /// Custom cost, memory in KiB.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::Internal(format!("invalid argon2 params: {e}")))?;
        Ok(Self {
            argon: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            dummy_hash: OnceLock::new(),
        })
    }

    pub fn hash(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// False for a mismatch and for a hash that does not parse.
    pub fn verify(&self, secret: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self.argon.verify_password(secret.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }

    /// Spends one verification's worth of work when there is no stored hash to
    /// check against, so a missing account costs as much as a wrong password.
    pub fn verify_against_dummy(&self, secret: &str) {
        let dummy = self
            .dummy_hash
            .get_or_init(|| self.hash(&new_token()).unwrap_or_default());
        let _ = self.verify(secret, dummy);
    }
}
