//! # Authentication
//!
//! Mock sign-in and the route gate that decides where a request may go.
//!
//! There is no credential check: any well-formed email signs in as an Admin.
//! The "token" is a presence flag, like a cookie.
//!
//! ```text
//!                 has token        no token
//! /auth/login     → Home           Allow
//! public path     Allow            Allow
//! other           Allow            → Login
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/auth/login";
pub const HOME_PATH: &str = "/";

const PUBLIC_PATHS: &[&str] = &["/auth/login", "/auth/register"];
const PUBLIC_PREFIXES: &[&str] = &["/_next", "/public", "/api/public"];
const AUTH_PAGES: &[&str] = &["/auth/login", "/auth/register", "/auth/forgot-password"];

const DEFAULT_ROLE: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    EmptyEmail,
    InvalidEmail(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyEmail => write!(f, "email is required"),
            AuthError::InvalidEmail(email) => write!(f, "not a valid email address: {email}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Sign in with just an email. The display name is the local part with its
/// first letter capitalized (`admin@demo.com` → `Admin`).
pub fn mock_login(email: &str) -> Result<User, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmptyEmail);
    }
    let local = match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => local,
        _ => return Err(AuthError::InvalidEmail(email.to_string())),
    };

    let mut chars = local.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    log::info!("Mock login for {email}");
    Ok(User {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        role: DEFAULT_ROLE.to_string(),
        email: email.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl RouteDecision {
    /// Where the user ends up after this decision.
    pub fn target<'a>(self, requested: &'a str) -> &'a str {
        match self {
            RouteDecision::Allow => requested,
            RouteDecision::RedirectToLogin => LOGIN_PATH,
            RouteDecision::RedirectToHome => HOME_PATH,
        }
    }
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Pages rendered full-screen, without the sidebar.
pub fn is_auth_page(path: &str) -> bool {
    AUTH_PAGES.contains(&path)
}

pub fn guard_route(path: &str, has_token: bool) -> RouteDecision {
    let public = is_public_path(path);
    if public && has_token && path == LOGIN_PATH {
        return RouteDecision::RedirectToHome;
    }
    if !public && !has_token {
        return RouteDecision::RedirectToLogin;
    }
    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_login_derives_name() {
        let user = mock_login("admin@demo.com").unwrap();
        assert_eq!(user.name, "Admin");
        assert_eq!(user.role, "Admin");
        assert_eq!(user.email, "admin@demo.com");
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_mock_login_trims_input() {
        let user = mock_login("  jane.doe@example.org ").unwrap();
        assert_eq!(user.name, "Jane.doe");
    }

    #[test]
    fn test_mock_login_rejects_bad_email() {
        assert_eq!(mock_login("   "), Err(AuthError::EmptyEmail));
        assert!(matches!(mock_login("nobody"), Err(AuthError::InvalidEmail(_))));
        assert!(matches!(mock_login("@demo.com"), Err(AuthError::InvalidEmail(_))));
        assert!(matches!(mock_login("me@"), Err(AuthError::InvalidEmail(_))));
    }

    #[test]
    fn test_guard_redirects_anonymous_users_to_login() {
        assert_eq!(guard_route("/table-demo", false), RouteDecision::RedirectToLogin);
        assert_eq!(guard_route("/", false), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn test_guard_allows_public_paths() {
        assert_eq!(guard_route("/auth/login", false), RouteDecision::Allow);
        assert_eq!(guard_route("/auth/register", false), RouteDecision::Allow);
        assert_eq!(guard_route("/public/logo.png", false), RouteDecision::Allow);
        assert_eq!(guard_route("/api/public/status", false), RouteDecision::Allow);
        assert_eq!(guard_route("/_next/static/app.js", true), RouteDecision::Allow);
    }

    #[test]
    fn test_guard_sends_signed_in_users_home_from_login() {
        assert_eq!(guard_route("/auth/login", true), RouteDecision::RedirectToHome);
        assert_eq!(guard_route("/auth/register", true), RouteDecision::Allow);
        assert_eq!(guard_route("/account/billing", true), RouteDecision::Allow);
    }

    #[test]
    fn test_route_decision_target() {
        assert_eq!(RouteDecision::Allow.target("/x"), "/x");
        assert_eq!(RouteDecision::RedirectToLogin.target("/x"), LOGIN_PATH);
        assert_eq!(RouteDecision::RedirectToHome.target("/x"), HOME_PATH);
    }

    #[test]
    fn test_auth_pages() {
        assert!(is_auth_page("/auth/forgot-password"));
        assert!(!is_auth_page("/auth/logins"));
    }
}
