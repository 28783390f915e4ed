//! Authoritative store of outstanding OTP challenges.
//!
//! The ledger owns every [`OtpEntry`] outright: callers only ever see the
//! code string returned by [`OtpLedger::issue`] and the outcome of the other
//! operations. At most one entry exists per canonical phone number; issuing
//! again overwrites the previous challenge, which invalidates its code.
//!
//! Expiry is enforced twice. [`OtpLedger::check`] compares against the
//! injected clock on every read and deletes an entry it finds stale, and a
//! purge armed at issue time sweeps the entry after its full lifetime in case
//! no read ever touches it again. The purge carries the entry id it was armed
//! for and skips the key when a newer issuance has taken its place.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration as StdDuration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use wt_shared::utils::phone::mask_phone_number;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::{OtpError, OtpResult};
use crate::schedule::PurgeScheduler;
use crate::time::Clock;

/// Process-local challenge ledger keyed by canonical phone number
pub struct OtpLedger {
    entries: Mutex<HashMap<String, OtpEntry>>,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn PurgeScheduler>,
    ttl_seconds: i64,
}

impl OtpLedger {
    /// Create a ledger with an injected clock and purge scheduler
    pub fn new(
        clock: Arc<dyn Clock>,
        scheduler: Arc<dyn PurgeScheduler>,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            scheduler,
            ttl_seconds,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, OtpEntry>> {
        self.entries.lock().expect("otp ledger lock poisoned")
    }

    /// Seconds a freshly issued code stays valid
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Number of entries currently held, expired or not
    pub fn active_count(&self) -> usize {
        self.entries().len()
    }

    /// Issue a fresh code for `phone`, overwriting any outstanding challenge,
    /// and arm a purge for this exact issuance one lifetime from now.
    ///
    /// Always succeeds; the returned code is the only copy handed out.
    pub fn issue(self: &Arc<Self>, phone: &str) -> String {
        let entry = OtpEntry::new(phone.to_string(), self.clock.now(), self.ttl_seconds);
        let code = entry.code.clone();
        let entry_id = entry.id;

        let replaced = self.entries().insert(phone.to_string(), entry).is_some();
        if replaced {
            info!(
                phone = %mask_phone_number(phone),
                event = "otp_reissued",
                "previous challenge overwritten by a new code"
            );
        } else {
            info!(
                phone = %mask_phone_number(phone),
                event = "otp_issued",
                "created verification challenge"
            );
        }

        // The purge is never cancelled; it must tolerate firing after the
        // entry was consumed or replaced.
        let ledger = Arc::downgrade(self);
        let key = phone.to_string();
        self.scheduler.schedule(
            StdDuration::from_secs(self.ttl_seconds.max(0) as u64),
            Box::new(move || {
                if let Some(ledger) = ledger.upgrade() {
                    ledger.purge(&key, entry_id);
                }
            }),
        );

        code
    }

    /// Compare `submitted` against the outstanding challenge for `phone`.
    ///
    /// The only path that flips an entry to verified. Re-checking an entry
    /// that is already verified re-succeeds with the same code; verification
    /// is idempotent, not single-shot.
    pub fn check(&self, phone: &str, submitted: &str) -> OtpResult<()> {
        let now = self.clock.now();
        let mut entries = self.entries();

        let entry = entries.get_mut(phone).ok_or(OtpError::NotFound)?;

        if entry.is_expired(now) {
            entries.remove(phone);
            warn!(
                phone = %mask_phone_number(phone),
                event = "otp_expired",
                "challenge passed its deadline and was removed"
            );
            return Err(OtpError::Expired);
        }

        if !entry.matches(submitted) {
            warn!(
                phone = %mask_phone_number(phone),
                event = "otp_mismatch",
                "submitted code does not match"
            );
            return Err(OtpError::Mismatch);
        }

        entry.mark_verified();
        info!(
            phone = %mask_phone_number(phone),
            event = "otp_verified",
            "challenge verified"
        );
        Ok(())
    }

    /// Remove the challenge for `phone` if and only if it has been verified.
    ///
    /// The sole happy-path removal, and at most once: a second call for the
    /// same key fails because the entry no longer exists.
    pub fn consume_if_verified(&self, phone: &str) -> OtpResult<()> {
        let mut entries = self.entries();
        match entries.get(phone) {
            Some(entry) if entry.verified => {
                entries.remove(phone);
                info!(
                    phone = %mask_phone_number(phone),
                    event = "otp_consumed",
                    "verified challenge consumed"
                );
                Ok(())
            }
            _ => Err(OtpError::NotVerified),
        }
    }

    /// Scheduled cleanup callback. Removes the entry only when it is still
    /// the exact issuance the purge was armed for; anything else is a no-op.
    pub fn purge(&self, phone: &str, entry_id: Uuid) {
        let mut entries = self.entries();
        if entries.get(phone).map(|entry| entry.id) == Some(entry_id) {
            entries.remove(phone);
            debug!(
                phone = %mask_phone_number(phone),
                event = "otp_purged",
                "scheduled purge removed challenge"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use crate::time::ManualClock;
    use chrono::Duration;

    const PHONE: &str = "6281234567890";

    struct Fixture {
        clock: Arc<ManualClock>,
        scheduler: Arc<ManualScheduler>,
        ledger: Arc<OtpLedger>,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(ManualClock::starting_now());
        let scheduler = Arc::new(ManualScheduler::new());
        let ledger = Arc::new(OtpLedger::new(clock.clone(), scheduler.clone(), 300));
        Fixture {
            clock,
            scheduler,
            ledger,
        }
    }

    #[test]
    fn test_issue_then_check_verifies() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);

        assert_eq!(f.ledger.check(PHONE, &code), Ok(()));
        // verified entries may be consumed
        assert_eq!(f.ledger.consume_if_verified(PHONE), Ok(()));
    }

    #[test]
    fn test_check_is_idempotent_once_verified() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);

        assert_eq!(f.ledger.check(PHONE, &code), Ok(()));
        assert_eq!(f.ledger.check(PHONE, &code), Ok(()));
    }

    #[test]
    fn test_check_wrong_code_leaves_entry_unverified() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);
        let wrong = if code == "111111" { "222222" } else { "111111" };

        assert_eq!(f.ledger.check(PHONE, wrong), Err(OtpError::Mismatch));
        assert_eq!(f.ledger.consume_if_verified(PHONE), Err(OtpError::NotVerified));
        // the right code still works afterwards
        assert_eq!(f.ledger.check(PHONE, &code), Ok(()));
    }

    #[test]
    fn test_check_unknown_phone() {
        let f = fixture();
        assert_eq!(f.ledger.check(PHONE, "123456"), Err(OtpError::NotFound));
    }

    #[test]
    fn test_expired_entry_is_deleted_on_check() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);

        f.clock.advance(Duration::seconds(301));

        assert_eq!(f.ledger.check(PHONE, &code), Err(OtpError::Expired));
        // the lazy expiry deleted the entry
        assert_eq!(f.ledger.check(PHONE, &code), Err(OtpError::NotFound));
        assert_eq!(f.ledger.active_count(), 0);
    }

    #[test]
    fn test_consume_before_verify_fails() {
        let f = fixture();
        f.ledger.issue(PHONE);
        assert_eq!(f.ledger.consume_if_verified(PHONE), Err(OtpError::NotVerified));
    }

    #[test]
    fn test_consume_is_at_most_once() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);

        assert_eq!(f.ledger.check(PHONE, &code), Ok(()));
        assert_eq!(f.ledger.consume_if_verified(PHONE), Ok(()));
        assert_eq!(f.ledger.consume_if_verified(PHONE), Err(OtpError::NotVerified));
        assert_eq!(f.ledger.check(PHONE, &code), Err(OtpError::NotFound));
    }

    #[test]
    fn test_reissue_invalidates_previous_code() {
        let f = fixture();
        let first = f.ledger.issue(PHONE);
        let second = f.ledger.issue(PHONE);

        assert_ne!(first, second, "regenerated code collided; rerun");
        assert_eq!(f.ledger.check(PHONE, &first), Err(OtpError::Mismatch));
        assert_eq!(f.ledger.check(PHONE, &second), Ok(()));
        assert_eq!(f.ledger.active_count(), 1);
    }

    #[test]
    fn test_scheduled_purge_sweeps_entry() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);
        assert_eq!(f.scheduler.pending_count(), 1);

        f.scheduler.fire_all();

        assert_eq!(f.ledger.check(PHONE, &code), Err(OtpError::NotFound));
        assert_eq!(f.ledger.active_count(), 0);
    }

    #[test]
    fn test_stale_purge_spares_newer_issuance() {
        let f = fixture();
        f.ledger.issue(PHONE);
        let second = f.ledger.issue(PHONE);

        // fire only the purge armed for the first issuance
        assert!(f.scheduler.fire_one());

        assert_eq!(f.ledger.check(PHONE, &second), Ok(()));
    }

    #[test]
    fn test_purge_after_consume_is_noop() {
        let f = fixture();
        let code = f.ledger.issue(PHONE);

        assert_eq!(f.ledger.check(PHONE, &code), Ok(()));
        assert_eq!(f.ledger.consume_if_verified(PHONE), Ok(()));

        // the armed purge now fires against a deleted key
        f.scheduler.fire_all();
        assert_eq!(f.ledger.active_count(), 0);
    }

    #[test]
    fn test_active_count_tracks_entries() {
        let f = fixture();
        assert_eq!(f.ledger.active_count(), 0);
        f.ledger.issue(PHONE);
        f.ledger.issue("6289876543210");
        assert_eq!(f.ledger.active_count(), 2);
    }
}
