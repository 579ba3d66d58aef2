//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::auth::User;
use crate::core::state::App;

pub fn admin_user() -> User {
    User {
        id: "1".to_string(),
        name: "Admin".to_string(),
        role: "Admin".to_string(),
        email: "admin@demo.com".to_string(),
    }
}

/// Creates a signed-out App on the login page.
pub fn test_app() -> App {
    App::new()
}

/// Creates an App with an Admin signed in, on the overview page.
pub fn signed_in_app() -> App {
    let mut app = App::new();
    app.user = Some(admin_user());
    app.has_token = true;
    app.route = "/".to_string();
    app
}
