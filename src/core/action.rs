//! # Actions
//!
//! Everything that can happen in Cockpit becomes an `Action`.
//! User picks a menu entry? That's `Action::Navigate(path)`.
//! Logout delay finished? That's `Action::LogoutComplete`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::auth::{self, RouteDecision, guard_route, mock_login};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    Login(String),
    Logout,
    LogoutComplete,
    ToggleSidebar,
    ToggleTheme,
    SortBy(String),
    PageNext,
    PagePrev,
    PageFirst,
    PageLast,
    JumpToPage(String),
    CyclePageSize,
    DismissError,
    Quit,
}

/// I/O the adapter performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Save `app.user` and set the token flag.
    PersistProfile,
    /// Remove the stored profile and token flag.
    ClearProfile,
    /// Run the delayed sign-out task, then dispatch `LogoutComplete`.
    SpawnLogout,
}

/// `"table-demo/"` → `"/table-demo"`. Blank input is the root.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn navigate(app: &mut App, requested: &str) {
    let requested = normalize_path(requested);
    let decision = guard_route(&requested, app.has_token);
    let target = decision.target(&requested).to_string();
    match decision {
        RouteDecision::Allow => {
            app.status_message = String::new();
        }
        RouteDecision::RedirectToLogin => {
            info!("Route {requested} requires sign-in, redirecting to {target}");
            app.status_message = "Please sign in to continue".to_string();
        }
        RouteDecision::RedirectToHome => {
            debug!("Already signed in, redirecting {requested} to {target}");
            app.status_message = String::new();
        }
    }
    app.route = target;
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(path) => {
            navigate(app, &path);
            Effect::None
        }
        Action::Login(email) => match mock_login(&email) {
            Ok(user) => {
                let status = format!("Signed in as {}", user.name);
                app.user = Some(user);
                app.has_token = true;
                app.error = None;
                navigate(app, auth::HOME_PATH);
                app.status_message = status;
                Effect::PersistProfile
            }
            Err(e) => {
                warn!("Login rejected: {e}");
                app.error = Some(e.to_string());
                Effect::None
            }
        },
        Action::Logout => {
            if app.is_logging_out || !app.is_authenticated() {
                return Effect::None;
            }
            app.is_logging_out = true;
            app.status_message = "Signing out...".to_string();
            Effect::SpawnLogout
        }
        Action::LogoutComplete => {
            app.user = None;
            app.has_token = false;
            app.is_logging_out = false;
            navigate(app, auth::LOGIN_PATH);
            app.status_message = "Signed out".to_string();
            Effect::ClearProfile
        }
        Action::ToggleSidebar => {
            app.sidebar_open = !app.sidebar_open;
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            app.status_message = format!("Theme: {}", app.theme.label());
            Effect::None
        }
        Action::SortBy(accessor) => {
            app.sort.toggle(&accessor);
            Effect::None
        }
        Action::PageNext => {
            app.pager.next(app.users.len());
            Effect::None
        }
        Action::PagePrev => {
            app.pager.prev(app.users.len());
            Effect::None
        }
        Action::PageFirst => {
            app.pager.first(app.users.len());
            Effect::None
        }
        Action::PageLast => {
            app.pager.last(app.users.len());
            Effect::None
        }
        Action::JumpToPage(input) => {
            let current = input.trim().parse::<usize>() == Ok(app.pager.page);
            if !current && !app.pager.jump(&input, app.users.len()) {
                app.status_message = format!("No page '{}'", input.trim());
            }
            Effect::None
        }
        Action::CyclePageSize => {
            app.pager.cycle_page_size();
            app.status_message = format!("{} per page", app.pager.page_size);
            Effect::None
        }
        Action::DismissError => {
            app.error = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Page;
    use crate::core::table::SortDirection;
    use crate::test_support::{signed_in_app, test_app};

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(" table-demo/ "), "/table-demo");
        assert_eq!(normalize_path("/a/b"), "/a/b");
    }

    #[test]
    fn test_navigate_without_token_redirects_to_login() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/table-demo".into()));
        assert_eq!(app.route, "/auth/login");
        assert_eq!(app.status_message, "Please sign in to continue");
    }

    #[test]
    fn test_navigate_to_login_when_signed_in_goes_home() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate("/auth/login".into()));
        assert_eq!(app.route, "/");
    }

    #[test]
    fn test_login_sets_user_and_persists() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Login("admin@demo.com".into()));
        assert_eq!(effect, Effect::PersistProfile);
        assert_eq!(app.user.as_ref().map(|u| u.name.as_str()), Some("Admin"));
        assert!(app.has_token);
        assert_eq!(app.route, "/");
        assert_eq!(app.page(), Page::Overview);
    }

    #[test]
    fn test_login_with_bad_email_sets_error() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Login("nope".into()));
        assert_eq!(effect, Effect::None);
        assert!(app.error.is_some());
        assert!(app.user.is_none());
        update(&mut app, Action::DismissError);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_logout_flow() {
        let mut app = signed_in_app();
        assert_eq!(update(&mut app, Action::Logout), Effect::SpawnLogout);
        assert!(app.is_busy());
        // A second request while one is running is ignored.
        assert_eq!(update(&mut app, Action::Logout), Effect::None);

        assert_eq!(update(&mut app, Action::LogoutComplete), Effect::ClearProfile);
        assert!(app.user.is_none());
        assert!(!app.has_token);
        assert!(!app.is_logging_out);
        assert_eq!(app.route, "/auth/login");
    }

    #[test]
    fn test_logout_when_signed_out_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Logout), Effect::None);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let mut app = signed_in_app();
        update(&mut app, Action::SortBy("id".into()));
        update(&mut app, Action::SortBy("id".into()));
        assert_eq!(app.sort.direction, SortDirection::Descending);
        assert_eq!(app.visible_users()[0].id, 45);
    }

    #[test]
    fn test_sort_keeps_current_page() {
        let mut app = signed_in_app();
        update(&mut app, Action::PageNext);
        update(&mut app, Action::SortBy("name".into()));
        assert_eq!(app.pager.page, 2);
    }

    #[test]
    fn test_paging_actions() {
        let mut app = signed_in_app();
        update(&mut app, Action::PageLast);
        assert_eq!(app.pager.page, 5);
        assert_eq!(app.visible_users().len(), 5);
        update(&mut app, Action::PageNext);
        assert_eq!(app.pager.page, 5);
        update(&mut app, Action::PagePrev);
        assert_eq!(app.pager.page, 4);
        update(&mut app, Action::PageFirst);
        assert_eq!(app.pager.page, 1);
        update(&mut app, Action::JumpToPage("3".into()));
        assert_eq!(app.pager.page, 3);
        update(&mut app, Action::JumpToPage("42".into()));
        assert_eq!(app.pager.page, 3);
        assert_eq!(app.status_message, "No page '42'");

        app.status_message.clear();
        update(&mut app, Action::JumpToPage(" 3 ".into()));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_cycle_page_size_resets_page() {
        let mut app = signed_in_app();
        update(&mut app, Action::PageLast);
        update(&mut app, Action::CyclePageSize);
        assert_eq!(app.pager.page, 1);
        assert_eq!(app.pager.page_size, 20);
    }

    #[test]
    fn test_toggles() {
        let mut app = signed_in_app();
        let open = app.sidebar_open;
        update(&mut app, Action::ToggleSidebar);
        assert_eq!(app.sidebar_open, !open);
        let theme = app.theme;
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, theme.toggled());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
