use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Lifetime of a bootstrap code after generation.
const CODE_TTL_MINUTES: i64 = 10;
const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Clone)]
struct BootstrapCode {
    code: String,
    expires_at: DateTime<Utc>,
}

/// Holds the one-time code that lets the first admin account be created.
///
/// At most one code is live at a time; generating a new one replaces the old.
/// A successful validation consumes the code, so it cannot be replayed even
/// within its lifetime. Codes are only ever generated when no admin exists.
#[derive(Clone, Default)]
pub struct BootstrapCodeService {
    current: Arc<RwLock<Option<BootstrapCode>>>,
}

impl BootstrapCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh code, replacing any previous one, and returns it so
    /// the caller can surface it in the startup log.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(BootstrapCode {
            code: code.clone(),
            expires_at: Utc::now() + Duration::minutes(CODE_TTL_MINUTES),
        });

        code
    }

    /// Checks the submitted code against the live one and consumes it on
    /// success. Expired or mismatching codes leave the stored code untouched.
    pub fn validate_and_consume(&self, submitted: &str) -> bool {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match guard.as_ref() {
            Some(live) if live.code == submitted && live.expires_at > Utc::now() => {
                *guard = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn set_expired(&self, code: &str) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(BootstrapCode {
            code: code.to_string(),
            expires_at: Utc::now() - Duration::seconds(1),
        });
    }
}
