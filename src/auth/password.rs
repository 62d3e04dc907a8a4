use bcrypt::{hash, verify, DEFAULT_COST};
use std::sync::OnceLock;
use crate::errors::{AppError, Result};

// Verified against when the username is unknown so both failure paths pay for a bcrypt round.
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

pub struct PasswordService;

impl PasswordService {
    pub fn hash_password(password: &str) -> Result<String> {
        hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {}", e)))
    }

    pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
        verify(password, hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to verify password: {}", e)))
    }

    pub fn burn_verification(password: &str) {
        let dummy = DUMMY_HASH.get_or_init(|| hash("unknown-user-placeholder", DEFAULT_COST).ok());
        if let Some(dummy) = dummy {
            let _ = verify(password, dummy);
        }
    }
}
