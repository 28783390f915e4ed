//! Outstanding verification challenge for a phone number.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a verification code (5 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 300;

/// One outstanding verification challenge.
///
/// The entry lives in the ledger from issuance until it is consumed by a
/// successful password reset, removed on detected expiry, or swept by the
/// scheduled purge. `id` identifies this exact issuance: a purge armed for an
/// entry that has since been overwritten carries a stale id and must not
/// touch the replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Identity of this issuance
    pub id: Uuid,

    /// Canonical phone number the code was issued for
    pub phone: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully verified
    pub verified: bool,
}

impl OtpEntry {
    /// Creates a fresh challenge for `phone`, valid for `ttl_seconds` from
    /// `issued_at`.
    pub fn new(phone: String, issued_at: DateTime<Utc>, ttl_seconds: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone,
            code: Self::generate_code(),
            issued_at,
            expires_at: issued_at + Duration::seconds(ttl_seconds),
            verified: false,
        }
    }

    /// Generates a random 6-digit code, uniform in [100000, 999999].
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..1_000_000).to_string()
    }

    /// Whether the challenge has passed its deadline at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether `submitted` is this challenge's code.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }

    /// Marks the challenge verified. The flag only ever flips false to true.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}
