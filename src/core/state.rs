//! # Application State
//!
//! Core business state for Cockpit. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── menu: Vec<MenuNode>          // static navigation tree
//! ├── route: String                // current path, e.g. "/table-demo"
//! ├── user: Option<User>           // signed-in user
//! ├── has_token: bool              // auth token flag (route gate input)
//! ├── loading: LoadingGate         // global busy counter
//! ├── is_logging_out: bool         // logout in flight
//! ├── sidebar_open: bool           // sidebar visible
//! ├── theme: Theme                 // light / dark
//! ├── status_message: String       // status bar text
//! ├── error: Option<String>        // error banner
//! ├── users: Vec<DemoUser>         // table demo rows
//! ├── sort: SortState              // table sort column + direction
//! └── pager: Pager                 // table page + page size
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::auth::{self, User};
use crate::core::breadcrumb::{self, BreadcrumbItem};
use crate::core::config::{DEFAULT_TITLE, ResolvedConfig, Theme};
use crate::core::demo::{DemoUser, demo_users};
use crate::core::loading::LoadingGate;
use crate::core::menu::{self, MenuNode, default_menu};
use crate::core::table::{Pager, SortState, sort_rows};

pub const TABLE_DEMO_PATH: &str = "/table-demo";

/// Which view fills the content area for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Overview,
    TableDemo,
    /// A menu entry with no dedicated view yet.
    Placeholder,
    NotFound,
}

pub struct App {
    pub menu: Vec<MenuNode>,
    pub route: String,
    pub user: Option<User>,
    pub has_token: bool,
    pub loading: LoadingGate,
    pub is_logging_out: bool,
    pub sidebar_open: bool,
    pub theme: Theme,
    pub default_title: String,
    pub status_message: String,
    pub error: Option<String>,
    pub users: Vec<DemoUser>,
    pub sort: SortState,
    pub pager: Pager,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            menu: default_menu(),
            route: auth::LOGIN_PATH.to_string(),
            user: None,
            has_token: false,
            loading: LoadingGate::new(),
            is_logging_out: false,
            sidebar_open: true,
            theme: Theme::default(),
            default_title: DEFAULT_TITLE.to_string(),
            status_message: String::from("Welcome to Cockpit!"),
            error: None,
            users: demo_users(),
            sort: SortState::default(),
            pager: Pager::default(),
        }
    }

    /// Build from resolved config plus whatever profile was restored.
    ///
    /// The route starts at the login page; the caller navigates to the
    /// configured start path so the route gate applies.
    pub fn from_config(config: &ResolvedConfig, user: Option<User>, has_token: bool) -> Self {
        Self {
            user,
            has_token,
            sidebar_open: config.sidebar_open,
            theme: config.theme,
            default_title: config.default_title.clone(),
            pager: Pager::new(config.page_size, config.page_size_options.clone()),
            ..Self::new()
        }
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn breadcrumbs(&self) -> Vec<BreadcrumbItem> {
        breadcrumb::resolve(&self.menu, &self.route)
    }

    pub fn page_title(&self) -> String {
        breadcrumb::page_title(&self.menu, &self.route, &self.default_title)
    }

    pub fn visible_menu(&self) -> Vec<&MenuNode> {
        menu::visible_nodes(&self.menu, self.role())
    }

    /// Auth pages render full-screen, without the sidebar.
    pub fn shows_sidebar(&self) -> bool {
        !auth::is_auth_page(&self.route)
    }

    /// Overlay is up while anything holds the gate or a logout is running.
    pub fn is_busy(&self) -> bool {
        self.loading.is_busy() || self.is_logging_out
    }

    pub fn page(&self) -> Page {
        match self.route.as_str() {
            auth::LOGIN_PATH => Page::Login,
            auth::HOME_PATH => Page::Overview,
            TABLE_DEMO_PATH => Page::TableDemo,
            path if menu::is_known_path(&self.menu, path) => Page::Placeholder,
            _ => Page::NotFound,
        }
    }

    pub fn sorted_users(&self) -> Vec<DemoUser> {
        sort_rows(&self.users, &self.sort)
    }

    /// Rows on the current table page, after sorting.
    pub fn visible_users(&self) -> Vec<DemoUser> {
        self.pager.slice(&self.sorted_users()).to_vec()
    }
}
