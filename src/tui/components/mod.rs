//! # TUI Components
//!
//! All UI components for the terminal dashboard.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top line with page title, status and theme
//! - `PageHeader`: breadcrumb trail and page title
//! - `Pagination`: page buttons, item range and page size
//! - `LoadingOverlay`, `ErrorState`, `Overview`, `Placeholder`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it for
//! each frame. The state type implements `EventHandler` and emits a
//! component-level event that the event loop turns into a core `Action`:
//! - `SidebarState` → `SidebarEvent`
//! - `DataTableState` → `TableEvent`
//! - `LoginFormState` → `LoginEvent`
//! - `PromptState` → `PromptEvent`
//!
//! Components never read `App` directly. Props make dependencies explicit:
//!
//! ```rust,ignore
//! PageHeader::new(&app.breadcrumbs(), &app.page_title(), palette).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs
//! ├── sidebar.rs
//! ├── page_header.rs
//! ├── data_table.rs       (table + column info overlay)
//! ├── pagination.rs
//! ├── login_form.rs
//! ├── prompt.rs
//! ├── loading_overlay.rs
//! ├── error_state.rs
//! └── pages.rs            (overview + placeholder bodies)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod data_table;
pub mod error_state;
pub mod loading_overlay;
pub mod login_form;
pub mod page_header;
pub mod pages;
pub mod pagination;
pub mod prompt;
pub mod sidebar;
pub mod title_bar;

pub use data_table::{ColumnInfo, DataTable, DataTableState, TableEvent};
pub use error_state::ErrorState;
pub use loading_overlay::LoadingOverlay;
pub use login_form::{LoginEvent, LoginForm, LoginFormState};
pub use page_header::PageHeader;
pub use pages::{Overview, Placeholder};
pub use pagination::Pagination;
pub use prompt::{Prompt, PromptEvent, PromptKind, PromptState};
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
