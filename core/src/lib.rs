//! # WaTicket Core
//!
//! Core domain layer for the WaTicket password-reset backend. This crate
//! contains the OTP entry entity, the challenge ledger, the verification
//! gateway service, and the clock/scheduler seams that keep the code
//! lifecycle testable without sleeping.

pub mod domain;
pub mod errors;
pub mod ledger;
pub mod schedule;
pub mod services;
pub mod time;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use ledger::OtpLedger;
pub use schedule::{ManualScheduler, PurgeScheduler, TokioScheduler};
pub use time::{Clock, ManualClock, SystemClock};
