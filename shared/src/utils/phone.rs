//! Phone number utilities
//!
//! Numbers arrive in whatever shape the storefront collected them:
//! `0812-3456-7890`, `+62 812 3456 7890`, `628123456789`. The ledger keys on
//! the canonical form so equivalent representations address the same
//! outstanding challenge.

use once_cell::sync::Lazy;
use regex::Regex;

// Canonical numbers: 9-15 digits, country code first, no leading zero
static CANONICAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9]\d{8,14}$").unwrap()
});

/// Strip every non-digit character
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Canonical ledger key: bare digits with the country code up front.
///
/// A leading `0` (local format) is rewritten to the country code, and a
/// number carrying neither prefix gets the country code prepended.
pub fn canonicalize_phone(phone: &str, country_code: &str) -> String {
    let digits = digits_only(phone);
    if let Some(rest) = digits.strip_prefix('0') {
        return format!("{}{}", country_code, rest);
    }
    if digits.starts_with(country_code) {
        digits
    } else {
        format!("{}{}", country_code, digits)
    }
}

/// Check whether two representations address the same subscriber
pub fn same_number(a: &str, b: &str, country_code: &str) -> bool {
    canonicalize_phone(a, country_code) == canonicalize_phone(b, country_code)
}

/// Check that a number canonicalizes to a plausible mobile number
pub fn is_valid_phone(phone: &str, country_code: &str) -> bool {
    CANONICAL_PHONE_REGEX.is_match(&canonicalize_phone(phone, country_code))
}

/// WhatsApp chat address for a canonical number
pub fn chat_id(canonical: &str) -> String {
    format!("{}@c.us", digits_only(canonical))
}

/// Mask a phone number for logs (e.g. 628****7890)
pub fn mask_phone_number(phone: &str) -> String {
    let digits = digits_only(phone);
    if digits.len() >= 7 {
        format!(
            "{}****{}",
            &digits[0..3],
            &digits[digits.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
