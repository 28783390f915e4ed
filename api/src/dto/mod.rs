//! Request and response payloads for the HTTP surface

pub mod otp;
