// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default paths, cookie settings, environment keys, and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Constants grouped by domain.

/// Defaults for the admin route gate
pub mod gate {
    /// Protected path prefix
    pub const DEFAULT_PROTECTED_PREFIX: &str = "/dashboard";
    /// Login entry point, inside the protected prefix
    pub const DEFAULT_LOGIN_PATH: &str = "/dashboard/login";
    /// Cookie inspected by the gate
    pub const DEFAULT_COOKIE_NAME: &str = "admin-token";
}

/// Session credential settings
pub mod session {
    /// Cookie lifetime and registry TTL (24 hours)
    pub const DEFAULT_MAX_AGE_SECS: u64 = 86_400;
    /// Random bytes in a generated credential
    pub const CREDENTIAL_BYTES: usize = 32;
    /// How often expired sessions are swept from the registry
    pub const PURGE_INTERVAL_SECS: u64 = 300;
}

/// HTTP endpoints served by the site backend
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Admin login
    pub const ADMIN_LOGIN: &str = "/api/admin/login";
    /// Admin logout
    pub const ADMIN_LOGOUT: &str = "/api/admin/logout";
    /// Contact form submission
    pub const CONTACT: &str = "/api/contact";
    /// Newsletter subscription
    pub const SUBSCRIBE: &str = "/api/subscribe";
}

/// Network defaults
pub mod network {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default per-request timeout
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default request body limit (64 KiB)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// Request ID header name
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Input limits for captured submissions
pub mod limits {
    /// Maximum contact name length in characters
    pub const MAX_NAME_CHARS: usize = 100;
    /// Maximum email length in characters
    pub const MAX_EMAIL_CHARS: usize = 254;
    /// Maximum contact message length in characters
    pub const MAX_MESSAGE_CHARS: usize = 5000;
}

/// Environment variable names
pub mod env_keys {
    /// Protected path prefix
    pub const PROTECTED_PREFIX: &str = "ADMIN_PROTECTED_PREFIX";
    /// Login entry point
    pub const LOGIN_PATH: &str = "ADMIN_LOGIN_PATH";
    /// Credential cookie name
    pub const COOKIE_NAME: &str = "ADMIN_COOKIE_NAME";
    /// Redirect target for anonymous protected requests
    pub const UNAUTHENTICATED_REDIRECT: &str = "ADMIN_UNAUTHENTICATED_REDIRECT";
    /// Redirect target for authenticated login requests
    pub const AUTHENTICATED_REDIRECT: &str = "ADMIN_AUTHENTICATED_REDIRECT";
    /// Credential check strategy
    pub const CREDENTIAL_CHECK: &str = "ADMIN_CREDENTIAL_CHECK";
    /// Admin password enabling login
    pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
    /// Cookie max age
    pub const SESSION_COOKIE_MAX_AGE_SECS: &str = "SESSION_COOKIE_MAX_AGE_SECS";
    /// Cookie Secure flag
    pub const SESSION_COOKIE_SECURE: &str = "SESSION_COOKIE_SECURE";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Request body limit
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in logs
pub mod service_names {
    /// Server binary name
    pub const FOLIO_SERVER: &str = "folio-server";
}
