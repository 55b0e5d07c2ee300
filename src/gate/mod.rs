// ABOUTME: Route access gate deciding pass-through or redirect for every request
// ABOUTME: Pure function of request path, session state, and gate configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! # Route Access Gate
//!
//! The gate classifies a request path against the configured protected area
//! and decides whether the request passes through or is redirected.
//!
//! | route class   | session         | decision                         |
//! |---------------|-----------------|----------------------------------|
//! | public        | any             | pass through                     |
//! | entry point   | authenticated   | redirect to the default path     |
//! | entry point   | anonymous       | pass through (render login)      |
//! | protected     | authenticated   | pass through                     |
//! | protected     | anonymous       | redirect to the entry point      |
//!
//! The gate never reads the credential itself. Whether a session counts as
//! authenticated is decided beforehand by a
//! [`CredentialVerifier`](crate::session::CredentialVerifier); with the default
//! [`PresenceVerifier`](crate::session::PresenceVerifier) that is a presence
//! check on the cookie and nothing more.

use crate::config::gate::GateConfig;

/// Where a path falls relative to the protected area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Outside the protected prefix
    Public,
    /// The login path, exempt from the credential requirement
    EntryPoint,
    /// Inside the protected prefix, credential required
    Protected,
}

/// Whether the request carries an accepted session credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A credential was presented and accepted by the verifier
    Authenticated,
    /// No credential, an empty one, or one the verifier rejected
    Anonymous,
}

impl SessionState {
    /// Build from the verifier's verdict
    #[must_use]
    pub const fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }

    /// True for [`SessionState::Authenticated`]
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Outcome of evaluating the gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision<'a> {
    /// Forward the request unchanged
    PassThrough,
    /// Answer with a redirect to the given path
    RedirectTo(&'a str),
}

impl GateDecision<'_> {
    /// True when the request is forwarded
    #[must_use]
    pub const fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }
}

impl GateConfig {
    /// Classify a request path. The login path is checked before the prefix,
    /// so it is never reported as plain `Protected`.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        if !path.starts_with(self.protected_prefix()) {
            RouteClass::Public
        } else if path == self.login_path() {
            RouteClass::EntryPoint
        } else {
            RouteClass::Protected
        }
    }
}

/// Decide what happens to a request for `path` carrying `session`.
///
/// Total over its inputs and free of side effects. Redirect targets come from
/// a validated [`GateConfig`], so evaluating the gate again on a target with
/// the same session state always passes through.
#[must_use]
pub fn evaluate<'a>(path: &str, session: SessionState, config: &'a GateConfig) -> GateDecision<'a> {
    match (config.classify(path), session) {
        (RouteClass::Public, _)
        | (RouteClass::EntryPoint, SessionState::Anonymous)
        | (RouteClass::Protected, SessionState::Authenticated) => GateDecision::PassThrough,
        (RouteClass::EntryPoint, SessionState::Authenticated) => {
            GateDecision::RedirectTo(config.authenticated_redirect())
        }
        (RouteClass::Protected, SessionState::Anonymous) => {
            GateDecision::RedirectTo(config.unauthenticated_redirect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SESSIONS: [SessionState; 2] = [SessionState::Authenticated, SessionState::Anonymous];

    fn config() -> GateConfig {
        GateConfig::default()
    }

    #[test]
    fn test_classify_default_layout() {
        let config = config();
        assert_eq!(config.classify("/"), RouteClass::Public);
        assert_eq!(config.classify("/about"), RouteClass::Public);
        assert_eq!(config.classify("/blog/dashboard"), RouteClass::Public);
        assert_eq!(config.classify("/dashboard"), RouteClass::Protected);
        assert_eq!(config.classify("/dashboard/settings"), RouteClass::Protected);
        assert_eq!(config.classify("/dashboard/login"), RouteClass::EntryPoint);
        // Exact match only: a trailing slash is an ordinary protected path
        assert_eq!(config.classify("/dashboard/login/"), RouteClass::Protected);
        // Plain string prefix, so sibling paths sharing the prefix are gated
        assert_eq!(config.classify("/dashboardx"), RouteClass::Protected);
    }

    #[test]
    fn test_public_paths_always_pass() {
        let config = config();
        for path in ["/", "/about", "/projects/folio", "/blog", "/api/contact"] {
            for session in ALL_SESSIONS {
                assert_eq!(evaluate(path, session, &config), GateDecision::PassThrough);
            }
        }
    }

    #[test]
    fn test_protected_paths_require_session() {
        let config = config();
        assert_eq!(
            evaluate("/dashboard/settings", SessionState::Anonymous, &config),
            GateDecision::RedirectTo("/dashboard/login")
        );
        assert_eq!(
            evaluate("/dashboard/settings", SessionState::Authenticated, &config),
            GateDecision::PassThrough
        );
        assert_eq!(
            evaluate("/dashboard", SessionState::Anonymous, &config),
            GateDecision::RedirectTo("/dashboard/login")
        );
    }

    #[test]
    fn test_entry_point_redirects_authenticated_sessions_away() {
        let config = config();
        assert_eq!(
            evaluate("/dashboard/login", SessionState::Authenticated, &config),
            GateDecision::RedirectTo("/dashboard")
        );
        assert_eq!(
            evaluate("/dashboard/login", SessionState::Anonymous, &config),
            GateDecision::PassThrough
        );
    }

    #[test]
    fn test_redirect_targets_never_redirect_again() {
        let config = config();
        let paths = [
            "/",
            "/about",
            "/dashboard",
            "/dashboard/login",
            "/dashboard/login/",
            "/dashboard/contacts",
            "/dashboardx",
        ];
        for path in paths {
            for session in ALL_SESSIONS {
                if let GateDecision::RedirectTo(target) = evaluate(path, session, &config) {
                    assert_eq!(
                        evaluate(target, session, &config),
                        GateDecision::PassThrough,
                        "redirect loop from {path} to {target} for {session:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_layout() {
        let config = GateConfig::new("/admin", "/admin/signin", "session")
            .with_authenticated_redirect("/admin/home")
            .with_unauthenticated_redirect("/");
        config.validate().unwrap();

        assert_eq!(
            evaluate("/admin/users", SessionState::Anonymous, &config),
            GateDecision::RedirectTo("/")
        );
        assert_eq!(
            evaluate("/admin/signin", SessionState::Authenticated, &config),
            GateDecision::RedirectTo("/admin/home")
        );
        assert_eq!(
            evaluate("/dashboard", SessionState::Anonymous, &config),
            GateDecision::PassThrough
        );
    }

    #[test]
    fn test_session_state_from_verdict() {
        assert_eq!(SessionState::from_accepted(true), SessionState::Authenticated);
        assert_eq!(SessionState::from_accepted(false), SessionState::Anonymous);
        assert!(SessionState::Authenticated.is_authenticated());
        assert!(GateDecision::PassThrough.is_pass_through());
        assert!(!GateDecision::RedirectTo("/").is_pass_through());
    }
}
