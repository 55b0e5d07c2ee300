// ABOUTME: Cookie helpers for reading the admin credential and writing Set-Cookie headers
// ABOUTME: Issued cookies are HttpOnly, SameSite=Strict, Path=/ and optionally Secure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use crate::session::SessionCredential;
use axum::http::{header, HeaderMap, HeaderValue};
use folio_core::errors::{AppError, AppResult};

/// `SameSite` attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Sent only on same-site requests
    Strict,
    /// Sent on same-site requests and top-level navigations
    Lax,
}

impl SameSite {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
        }
    }
}

/// Builder for a `Set-Cookie` header value
#[derive(Debug, Clone)]
pub struct SecureCookieConfig {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// `Max-Age` in seconds; zero expires the cookie immediately
    pub max_age_secs: u64,
    /// Hide the cookie from scripts
    pub http_only: bool,
    /// Only send over HTTPS
    pub secure: bool,
    /// Cross-site policy
    pub same_site: SameSite,
    /// Cookie path
    pub path: String,
}

impl SecureCookieConfig {
    /// Create a cookie with strict defaults: `HttpOnly`, `Secure`,
    /// `SameSite=Strict`, `Path=/`
    #[must_use]
    pub fn new(name: String, value: String, max_age_secs: u64) -> Self {
        Self {
            name,
            value,
            max_age_secs,
            http_only: true,
            secure: true,
            same_site: SameSite::Strict,
            path: "/".to_owned(),
        }
    }

    /// Toggle the `Secure` attribute
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Render the `Set-Cookie` value
    #[must_use]
    pub fn build(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; SameSite={}",
            self.name,
            self.value,
            self.path,
            self.max_age_secs,
            self.same_site.as_str()
        );
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Append this cookie to `headers` as a `Set-Cookie` entry
    ///
    /// # Errors
    ///
    /// Returns an error if the rendered cookie is not a valid header value
    pub fn apply(&self, headers: &mut HeaderMap) -> AppResult<()> {
        let value = HeaderValue::from_str(&self.build())
            .map_err(|e| AppError::internal("Invalid Set-Cookie header").with_source(e))?;
        headers.append(header::SET_COOKIE, value);
        Ok(())
    }
}

/// Write the admin credential cookie
///
/// # Errors
///
/// Returns an error if the cookie cannot be encoded as a header value
pub fn set_credential_cookie(
    headers: &mut HeaderMap,
    cookie_name: &str,
    credential: &SessionCredential,
    max_age_secs: u64,
    secure: bool,
) -> AppResult<()> {
    SecureCookieConfig::new(
        cookie_name.to_owned(),
        credential.expose().to_owned(),
        max_age_secs,
    )
    .with_secure(secure)
    .apply(headers)
}

/// Expire the admin credential cookie in the browser
///
/// # Errors
///
/// Returns an error if the cookie cannot be encoded as a header value
pub fn clear_credential_cookie(
    headers: &mut HeaderMap,
    cookie_name: &str,
    secure: bool,
) -> AppResult<()> {
    SecureCookieConfig::new(cookie_name.to_owned(), String::new(), 0)
        .with_secure(secure)
        .apply(headers)
}

/// Find a cookie by name across every `Cookie` header of a request.
///
/// Returns the first match, even when its value is empty, so
/// `admin-token=; admin-token=xyz` yields `Some("")` and the credential is
/// absent. Headers that are not valid visible ASCII are skipped rather than
/// treated as an error.
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then(|| value.trim().trim_matches('"').to_owned())
        })
}

/// Read the credential cookie as a typed credential; empty values count as absent
#[must_use]
pub fn credential_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionCredential> {
    get_cookie_value(headers, cookie_name)
        .as_deref()
        .and_then(SessionCredential::from_cookie_value)
}

/// Render a cookie list as a `Cookie` request header value
#[must_use]
pub fn cookie_header(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact_on_name() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("admin-token-old=stale; admin-token=fresh"),
        );
        assert_eq!(
            get_cookie_value(&headers, "admin-token"),
            Some("fresh".to_owned())
        );
    }

    #[test]
    fn test_lookup_spans_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("admin-token=abc"));
        assert_eq!(
            get_cookie_value(&headers, "admin-token"),
            Some("abc".to_owned())
        );
    }

    #[test]
    fn test_empty_value_is_no_credential() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("admin-token="));
        assert_eq!(get_cookie_value(&headers, "admin-token"), Some(String::new()));
        assert!(credential_from_headers(&headers, "admin-token").is_none());
    }

    #[test]
    fn test_leading_empty_duplicate_shadows_later_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("admin-token=; admin-token=xyz"),
        );
        assert_eq!(get_cookie_value(&headers, "admin-token"), Some(String::new()));
        assert!(credential_from_headers(&headers, "admin-token").is_none());
    }

    #[test]
    fn test_cookie_header_rendering() {
        assert_eq!(cookie_header(&[]), "");
        assert_eq!(cookie_header(&[("a", "1"), ("b", "2")]), "a=1; b=2");
    }
}
