//! Frame layout: picks the page body for the current route and stacks
//! overlays on top.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Cockpit | Page title | status                   [light]   │ title bar
//! ├───────────────┬──────────────────────────────────────────┤
//! │ sidebar       │ Home › Section › Page                    │ header
//! │               │ Page                                     │
//! │               ├──────────────────────────────────────────┤
//! │               │ page body                                │
//! └───────────────┴──────────────────────────────────────────┘
//! ```
//!
//! Auth pages skip the title bar and sidebar. Overlays, bottom to top:
//! error popup, column info, prompt, loading.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::demo::DemoUser;
use crate::core::state::{App, Page};
use crate::tui::component::Component;
use crate::tui::components::sidebar::SIDEBAR_WIDTH;
use crate::tui::components::{
    ColumnInfo, DataTable, ErrorState, LoadingOverlay, LoginForm, Overview, PageHeader, Pagination,
    Placeholder, Prompt, Sidebar, TitleBar, centered_rect,
};
use crate::tui::palette::Palette;
use crate::tui::{Focus, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    if app.shows_sidebar() {
        draw_shell(frame, area, app, tui, palette);
    } else {
        draw_auth_page(frame, area, app, tui, palette);
    }

    if let Some(error) = &app.error
        && app.page() != Page::Login
    {
        draw_error_popup(frame, area, error, palette);
    }
    if let Some(column) = tui.table.info_column() {
        ColumnInfo { column, palette }.render(frame, area);
    }
    if let Some(prompt) = &tui.prompt {
        Prompt { state: prompt, palette }.render(frame, area);
    }
    if app.is_busy() {
        let label = if app.is_logging_out { "Signing out" } else { "Loading" };
        LoadingOverlay::new(label, spinner_frame, palette).render(frame, area);
    }
}

fn draw_auth_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    match app.page() {
        Page::Login => {
            LoginForm::new(&tui.login, app.error.as_deref(), palette).render(frame, area);
        }
        _ => ErrorState::not_found(&app.route, palette).render(frame, area),
    }
}

fn draw_shell(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    TitleBar::new(app.page_title(), app.status_message.clone(), app.theme).render(frame, title_area);

    let main_area = if app.sidebar_open {
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body_area);
        Sidebar::new(
            &mut tui.sidebar,
            &app.route,
            app.user.as_ref(),
            tui.focus == Focus::Sidebar,
            palette,
        )
        .render(frame, sidebar_area);
        main_area
    } else {
        body_area
    };

    let crumbs = app.breadcrumbs();
    let title = app.page_title();
    let mut header = PageHeader::new(&crumbs, &title, palette);
    let main_area = main_area.inner(ratatui::layout::Margin::new(1, 0));
    let [header_area, content_area] =
        Layout::vertical([Constraint::Length(header.height()), Constraint::Min(0)]).areas(main_area);
    header.render(frame, header_area);

    let content_focused = tui.focus == Focus::Content || !app.sidebar_open;
    match app.page() {
        Page::Overview => Overview {
            user_name: app.user.as_ref().map(|u| u.name.as_str()),
            palette,
        }
        .render(frame, content_area),
        Page::TableDemo => draw_table_page(frame, content_area, app, tui, content_focused, palette),
        Page::Placeholder => Placeholder {
            title: &title,
            palette,
        }
        .render(frame, content_area),
        Page::NotFound | Page::Login => {
            ErrorState::not_found(&app.route, palette).render(frame, content_area)
        }
    }
}

fn draw_table_page(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    focused: bool,
    palette: Palette,
) {
    let [table_area, pager_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let rows: Vec<DemoUser> = app.visible_users();
    DataTable::new(&tui.table, &tui.columns, &rows, &app.sort, focused, palette)
        .render(frame, table_area);
    Pagination::new(&app.pager, app.users.len(), palette).render(frame, pager_area);
}

fn draw_error_popup(frame: &mut Frame, area: Rect, error: &str, palette: Palette) {
    let overlay = centered_rect(50, 30, area);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.danger))
        .title(" Error ")
        .title_bottom(Line::from(" Enter Dismiss ").centered())
        .padding(Padding::uniform(1));
    frame.render_widget(
        Paragraph::new(error.to_string())
            .style(palette.base())
            .wrap(Wrap { trim: true })
            .block(block),
        overlay,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{signed_in_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(140, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_login_page_has_no_sidebar() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Sign in"));
        assert!(!text.contains("Components Demo"));
    }

    #[test]
    fn test_overview_shows_sidebar_and_greeting() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Components Demo"));
        assert!(text.contains("Welcome back, Admin"));
    }

    #[test]
    fn test_table_page_renders_breadcrumbs_table_and_pager() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate("/table-demo".into()));
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Home › Components Demo › Table & Pagination"));
        assert!(text.contains("User 1 <user1@example.com>"));
        assert!(text.contains("( 1 - 10 of 45 )"));
    }

    #[test]
    fn test_unknown_route_shows_not_found() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate("/does/not-exist".into()));
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("404"));
        assert!(text.contains("Home › Does › Not Exist"));
    }

    #[test]
    fn test_busy_app_shows_loading_overlay() {
        let app = signed_in_app();
        let _guard = app.loading.scope();
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Loading"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_menu() {
        let mut app = signed_in_app();
        update(&mut app, Action::ToggleSidebar);
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(!text.contains("Components Demo"));
        assert!(text.contains("Welcome back, Admin"));
    }
}
