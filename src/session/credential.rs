// ABOUTME: Opaque session credential newtype read from or written to the admin cookie
// ABOUTME: Rejects empty values and never prints the token in Debug output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use folio_core::constants::session;
use rand::RngCore;
use std::fmt;

/// Opaque, unverified admin session token
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Wrap a cookie value. An empty value is treated the same as no cookie.
    #[must_use]
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_owned()))
        }
    }

    /// Draw a fresh random credential (hex-encoded random bytes)
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; session::CREDENTIAL_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// The raw token, for writing the cookie or looking it up in a registry
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cookie_value_is_absent() {
        assert!(SessionCredential::from_cookie_value("").is_none());
        assert_eq!(
            SessionCredential::from_cookie_value("xyz").map(|c| c.expose().to_owned()),
            Some("xyz".to_owned())
        );
    }

    #[test]
    fn test_generated_credentials_are_distinct_hex() {
        let first = SessionCredential::generate();
        let second = SessionCredential::generate();
        assert_ne!(first, second);
        assert_eq!(first.expose().len(), session::CREDENTIAL_BYTES * 2);
        assert!(first.expose().bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = SessionCredential::from_cookie_value("secret-token").unwrap();
        assert!(!format!("{credential:?}").contains("secret-token"));
    }
}
