//! Response status classification.
//!
//! The frontend reports success or failure of the whole envelope through
//! `ResponseEnvelope::status_code`, independently of the per-result
//! payloads. [`classify`] maps that code to an [`Outcome`].

use std::fmt;

/// What a response status code means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `OK` (1) or `OK_RPC_URL_IN_RESPONSE` (2).
    Success,

    /// The request was malformed or used an unsupported platform block
    /// (`BAD_REQUEST` 3, `INVALID_REQUEST` 51, `INVALID_PLATFORM_REQUEST` 52).
    BadRequest(i32),

    /// `REDIRECT` (53): this endpoint can't serve the session right now.
    ServerUnavailable,

    /// `SESSION_INVALIDATED` (100): the token was valid but has expired.
    AuthExpired,

    /// `INVALID_AUTH_TOKEN` (102): the token was rejected.
    InvalidAuth,

    /// Any code not listed above.
    Unknown(i32),
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::BadRequest(code) => write!(f, "bad request (status {code})"),
            Self::ServerUnavailable => write!(f, "server unavailable"),
            Self::AuthExpired => write!(f, "auth token expired"),
            Self::InvalidAuth => write!(f, "invalid auth token"),
            Self::Unknown(code) => write!(f, "unknown status {code}"),
        }
    }
}

/// Maps a response status code to an [`Outcome`].
pub fn classify(status_code: i32) -> Outcome {
    match status_code {
        1 | 2 => Outcome::Success,
        3 | 51 | 52 => Outcome::BadRequest(status_code),
        53 => Outcome::ServerUnavailable,
        100 => Outcome::AuthExpired,
        102 => Outcome::InvalidAuth,
        other => Outcome::Unknown(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ok_codes_are_success() {
        assert_eq!(classify(1), Outcome::Success);
        assert_eq!(classify(2), Outcome::Success);
        assert!(classify(1).is_success());
    }

    #[test]
    fn test_classify_auth_codes() {
        assert_eq!(classify(100), Outcome::AuthExpired);
        assert_eq!(classify(102), Outcome::InvalidAuth);
    }

    #[test]
    fn test_classify_redirect_is_server_unavailable() {
        assert_eq!(classify(53), Outcome::ServerUnavailable);
    }

    #[test]
    fn test_classify_bad_request_keeps_code() {
        assert_eq!(classify(3), Outcome::BadRequest(3));
        assert_eq!(classify(51), Outcome::BadRequest(51));
        assert_eq!(classify(52), Outcome::BadRequest(52));
    }

    #[test]
    fn test_classify_unlisted_codes_are_unknown() {
        assert_eq!(classify(0), Outcome::Unknown(0));
        assert_eq!(classify(-1), Outcome::Unknown(-1));
        assert_eq!(classify(101), Outcome::Unknown(101));
        assert!(!classify(101).is_success());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::InvalidAuth.to_string(), "invalid auth token");
        assert_eq!(Outcome::Unknown(7).to_string(), "unknown status 7");
    }
}
