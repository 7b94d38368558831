//! One-time-code session, shared by the college-email confirmation and
//! the account signup flow.
//!
//! The countdown is driven by a one-second tick delivered from the UI
//! runtime. The tick subscription exists if and only if the session is in
//! the `Sent` state, so exactly one countdown can run per session and it
//! cannot survive verification, expiry or an email change.

use std::time::Duration;

/// How long an issued code stays valid.
pub const OTP_VALIDITY: Duration = Duration::from_secs(120);

/// Codes are always 6 characters.
pub const OTP_CODE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpState {
    Idle,
    Sent { remaining: u64 },
    Verified,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSession {
    email: String,
    state: OtpState,
}

impl Default for OtpSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpSession {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            state: OtpState::Idle,
        }
    }

    pub fn with_email(email: String) -> Self {
        Self {
            email,
            state: OtpState::Idle,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> &OtpState {
        &self.state
    }

    /// A code is only ever valid for the email it was issued to: any edit
    /// of the target email resets the attempt and cancels the countdown.
    pub fn edit_email(&mut self, email: String) {
        if email != self.email {
            self.email = email;
            self.state = OtpState::Idle;
        }
    }

    /// A code was issued (or re-issued) for the current email.
    pub fn sent(&mut self) {
        self.state = OtpState::Sent {
            remaining: OTP_VALIDITY.as_secs(),
        };
    }

    /// The backend confirmed the code, or reported the email as already
    /// verified.
    pub fn verified(&mut self) {
        self.state = OtpState::Verified;
    }

    /// One tick of the countdown. Returns true when this tick caused the
    /// transition to `Expired`.
    pub fn tick(&mut self) -> bool {
        if let OtpState::Sent { remaining } = &mut self.state {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.state = OtpState::Expired;
                return true;
            }
        }
        false
    }

    /// Whether the countdown subscription must be running.
    pub fn is_counting(&self) -> bool {
        matches!(self.state, OtpState::Sent { .. })
    }

    pub fn is_verified(&self) -> bool {
        self.state == OtpState::Verified
    }

    pub fn is_expired(&self) -> bool {
        self.state == OtpState::Expired
    }

    pub fn remaining(&self) -> Option<u64> {
        if let OtpState::Sent { remaining } = self.state {
            Some(remaining)
        } else {
            None
        }
    }

    /// The countdown as displayed next to the code input, `mm:ss`.
    pub fn format_remaining(&self) -> String {
        let remaining = self.remaining().unwrap_or(0);
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_reaching_zero_expires_and_stops() {
        let mut otp = OtpSession::with_email("jane@students.lpu.in".to_string());
        otp.sent();
        assert_eq!(otp.remaining(), Some(OTP_VALIDITY.as_secs()));
        assert!(otp.is_counting());

        for _ in 0..(OTP_VALIDITY.as_secs() - 1) {
            assert!(!otp.tick());
        }
        assert_eq!(otp.remaining(), Some(1));
        // the tick reaching exactly 0 triggers the transition
        assert!(otp.tick());
        assert!(otp.is_expired());
        assert!(!otp.is_counting());

        // no further decrement is observed
        let before = otp.clone();
        assert!(!otp.tick());
        assert_eq!(otp, before);
    }

    #[test]
    fn email_edit_resets_from_any_state() {
        let mut otp = OtpSession::with_email("jane@students.lpu.in".to_string());
        otp.sent();
        otp.edit_email("john@students.lpu.in".to_string());
        assert_eq!(*otp.state(), OtpState::Idle);
        assert!(!otp.is_counting());

        otp.sent();
        while !otp.tick() {}
        assert!(otp.is_expired());
        otp.edit_email("jane@students.lpu.in".to_string());
        assert_eq!(*otp.state(), OtpState::Idle);
    }

    #[test]
    fn email_edit_with_same_value_keeps_the_attempt() {
        let mut otp = OtpSession::with_email("jane@students.lpu.in".to_string());
        otp.sent();
        otp.tick();
        let state = otp.state().clone();
        otp.edit_email("jane@students.lpu.in".to_string());
        assert_eq!(*otp.state(), state);
    }

    #[test]
    fn verification_stops_the_countdown() {
        let mut otp = OtpSession::with_email("jane@students.lpu.in".to_string());
        otp.sent();
        otp.tick();
        otp.verified();
        assert!(otp.is_verified());
        assert!(!otp.is_counting());
        assert!(!otp.tick());
        assert!(otp.is_verified());
    }

    #[test]
    fn resend_restarts_the_countdown() {
        let mut otp = OtpSession::with_email("jane@students.lpu.in".to_string());
        otp.sent();
        for _ in 0..30 {
            otp.tick();
        }
        assert_eq!(otp.remaining(), Some(OTP_VALIDITY.as_secs() - 30));
        otp.sent();
        assert_eq!(otp.remaining(), Some(OTP_VALIDITY.as_secs()));
    }

    #[test]
    fn remaining_display() {
        let mut otp = OtpSession::new();
        assert_eq!(otp.format_remaining(), "00:00");
        otp.sent();
        assert_eq!(otp.format_remaining(), "02:00");
        for _ in 0..29 {
            otp.tick();
        }
        assert_eq!(otp.format_remaining(), "01:31");
    }
}
