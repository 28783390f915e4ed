//! Gateway lifecycle tests with mock delivery and a manual clock

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;

use crate::errors::OtpError;
use crate::ledger::OtpLedger;
use crate::schedule::ManualScheduler;
use crate::services::gateway::{GatewayConfig, VerificationGateway};
use crate::time::ManualClock;

use super::mocks::MockSender;

struct Fixture {
    clock: Arc<ManualClock>,
    scheduler: Arc<ManualScheduler>,
    sender: Arc<MockSender>,
    gateway: VerificationGateway<MockSender>,
}

fn fixture_with(sender: MockSender) -> Fixture {
    let clock = Arc::new(ManualClock::starting_now());
    let scheduler = Arc::new(ManualScheduler::new());
    let ledger = Arc::new(OtpLedger::new(clock.clone(), scheduler.clone(), 300));
    let sender = Arc::new(sender);
    let gateway = VerificationGateway::new(ledger, sender.clone(), GatewayConfig::default());
    Fixture {
        clock,
        scheduler,
        sender,
        gateway,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockSender::new())
}

/// Let the detached delivery task run to completion
async fn drain_delivery() {
    tokio::time::sleep(StdDuration::from_millis(20)).await;
}

/// The code is the only 6-digit run in the message template
fn extract_code(body: &str) -> String {
    body.split(|c: char| !c.is_ascii_digit())
        .find(|segment| segment.len() == 6)
        .expect("message should embed a 6-digit code")
        .to_string()
}

#[tokio::test]
async fn test_request_delivers_to_whatsapp_chat() {
    let f = fixture();

    let issued = f.gateway.request_otp("081234567890", Some("Budi"));
    assert_eq!(issued.expires_in, 300);

    drain_delivery().await;

    let sent = f.sender.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "6281234567890@c.us");
    assert!(sent[0].1.contains("Budi"));
    assert!(sent[0].1.contains("valid for 5 minutes"));
}

#[tokio::test]
async fn test_verify_accepts_any_equivalent_number_format() {
    let f = fixture();

    f.gateway.request_otp("081234567890", None);
    drain_delivery().await;

    let code = extract_code(&f.sender.sent_messages()[0].1);
    assert_eq!(f.gateway.verify_otp("+62 812-3456-7890", &code), Ok(()));
}

#[tokio::test]
async fn test_delivery_failure_does_not_undo_issuance() {
    let f = fixture_with(MockSender::failing());

    let issued = f.gateway.request_otp("081234567890", None);
    assert_eq!(issued.expires_in, 300);

    drain_delivery().await;

    // nothing was delivered, but the challenge is live
    assert!(f.sender.sent_messages().is_empty());
    assert_eq!(f.gateway.active_challenges(), 1);
    assert_eq!(
        f.gateway.verify_otp("081234567890", "000000"),
        Err(OtpError::Mismatch)
    );
}

#[tokio::test]
async fn test_full_reset_flow_consumes_challenge() {
    let f = fixture();

    f.gateway.request_otp("081234567890", Some("Budi"));
    drain_delivery().await;
    let code = extract_code(&f.sender.sent_messages()[0].1);

    assert_eq!(f.gateway.verify_otp("081234567890", &code), Ok(()));
    assert_eq!(f.gateway.reset_password("081234567890"), Ok(()));

    // at most once: the challenge is gone
    assert_eq!(
        f.gateway.reset_password("081234567890"),
        Err(OtpError::NotVerified)
    );
    assert_eq!(
        f.gateway.verify_otp("081234567890", &code),
        Err(OtpError::NotFound)
    );
}

#[tokio::test]
async fn test_reset_without_verification_is_rejected() {
    let f = fixture();

    f.gateway.request_otp("081234567890", None);
    assert_eq!(
        f.gateway.reset_password("081234567890"),
        Err(OtpError::NotVerified)
    );
}

#[tokio::test]
async fn test_verify_after_expiry_is_rejected() {
    let f = fixture();

    f.gateway.request_otp("081234567890", None);
    drain_delivery().await;
    let code = extract_code(&f.sender.sent_messages()[0].1);

    f.clock.advance(Duration::seconds(301));

    assert_eq!(
        f.gateway.verify_otp("081234567890", &code),
        Err(OtpError::Expired)
    );
}

#[tokio::test]
async fn test_scheduled_purge_closes_unused_challenge() {
    let f = fixture();

    f.gateway.request_otp("081234567890", None);
    drain_delivery().await;
    let code = extract_code(&f.sender.sent_messages()[0].1);

    f.scheduler.fire_all();

    assert_eq!(f.gateway.active_challenges(), 0);
    assert_eq!(
        f.gateway.verify_otp("081234567890", &code),
        Err(OtpError::NotFound)
    );
}

#[tokio::test]
async fn test_sender_availability_is_passed_through() {
    let f = fixture();

    assert!(f.gateway.sender_available().await);
    f.sender.set_available(false);
    assert!(!f.gateway.sender_available().await);
}
