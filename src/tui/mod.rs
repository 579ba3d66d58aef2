//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It also
//! performs the I/O that `update()` asks for through `Effect`: saving and
//! clearing the profile, and running the delayed sign-out task.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Busy** (loading overlay up): draws every ~80ms to animate the dots.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize
//!   or actions arriving from background tasks.
//!
//! ## Key Map
//!
//! | Key              | Where          | Does                              |
//! |------------------|----------------|-----------------------------------|
//! | Tab              | shell          | switch focus sidebar ↔ content    |
//! | ↑ ↓ ← → Enter    | sidebar        | move, open/close, navigate        |
//! | ← → s Enter      | table          | pick column, sort                 |
//! | n p PgDn PgUp    | table          | next/previous page                |
//! | Home End         | table          | first/last page                   |
//! | g z i            | table          | go to page, page size, column info|
//! | :                | shell          | go to path                        |
//! | b t L            | shell          | sidebar, theme, sign out          |
//! | q / Ctrl+C       | anywhere       | quit                              |

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::auth::HOME_PATH;
use crate::core::config::ResolvedConfig;
use crate::core::demo::{DemoUser, demo_columns};
use crate::core::profile::{self, ProfileStore};
use crate::core::state::{App, Page};
use crate::core::table::Column;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DataTableState, LoginEvent, LoginFormState, PromptEvent, PromptKind, PromptState, SidebarEvent,
    SidebarState, TableEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long sign-out holds the loading overlay before completing.
pub const LOGOUT_DELAY: Duration = Duration::from_millis(800);

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub sidebar: SidebarState,
    pub table: DataTableState,
    pub columns: Vec<Column<DemoUser>>,
    pub login: LoginFormState,
    /// Open input prompt (None = hidden)
    pub prompt: Option<PromptState>,
    /// Route and role the sidebar was last synced to.
    synced: Option<(String, Option<String>)>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let columns = demo_columns();
        let mut tui = Self {
            focus: Focus::Sidebar,
            sidebar: SidebarState::new(),
            table: DataTableState::new(&columns),
            columns,
            login: LoginFormState::default(),
            prompt: None,
            synced: None,
        };
        tui.sync(app);
        tui
    }

    /// Rebuild sidebar rows; open the active branch when the route or the
    /// signed-in role changed since the last sync.
    pub fn sync(&mut self, app: &App) {
        let visible = app.visible_menu();
        let key = (app.route.clone(), app.role().map(str::to_string));
        if self.synced.as_ref() != Some(&key) {
            self.sidebar.sync_route(&visible, &app.route);
            self.synced = Some(key);
        } else {
            self.sidebar.refresh(&visible);
        }
        if !app.sidebar_open {
            self.focus = Focus::Content;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Hide,
            SetCursorStyle::SteadyBlock // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Map one input event to at most one core action, updating TUI-only state
/// (focus, prompts, component selection) along the way.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // ForceQuit (Ctrl+C) always quits regardless of mode
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // The loading overlay blocks all interaction
    if app.is_busy() {
        return None;
    }

    let page = app.page();

    if app.error.is_some() && page != Page::Login {
        return matches!(event, TuiEvent::Submit | TuiEvent::Escape).then_some(Action::DismissError);
    }

    if let Some(prompt) = tui.prompt.as_mut() {
        let prompt_event = prompt.handle_event(event)?;
        tui.prompt = None;
        return match prompt_event {
            PromptEvent::Submit(PromptKind::Path, path) => Some(Action::Navigate(path)),
            PromptEvent::Submit(PromptKind::Page, input) => Some(Action::JumpToPage(input)),
            PromptEvent::Cancel => None,
        };
    }

    if tui.table.info.is_some() {
        tui.table.handle_event(event);
        return None;
    }

    if page == Page::Login {
        return match tui.login.handle_event(event)? {
            LoginEvent::Submit(email) => Some(Action::Login(email)),
            LoginEvent::Cancel => Some(Action::Quit),
        };
    }

    // Other auth routes (register, forgot password) have no view yet.
    if !app.shows_sidebar() {
        return match event {
            TuiEvent::Submit => Some(Action::Navigate(HOME_PATH.to_string())),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
            _ => None,
        };
    }

    match event {
        TuiEvent::Tab => {
            if app.sidebar_open {
                tui.focus = match tui.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
            }
            return None;
        }
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::InputChar('b') => return Some(Action::ToggleSidebar),
        TuiEvent::InputChar('t') => return Some(Action::ToggleTheme),
        TuiEvent::InputChar('L') => return Some(Action::Logout),
        TuiEvent::InputChar(':') => {
            tui.prompt = Some(PromptState::new(PromptKind::Path));
            return None;
        }
        _ => {}
    }

    if tui.focus == Focus::Sidebar && app.sidebar_open {
        let sidebar_event = tui.sidebar.handle_event(event);
        tui.sync(app);
        return match sidebar_event? {
            SidebarEvent::Navigate(path) => Some(Action::Navigate(path)),
        };
    }

    match page {
        Page::TableDemo => match tui.table.handle_event(event)? {
            TableEvent::Sort(accessor) => Some(Action::SortBy(accessor)),
            TableEvent::NextPage => Some(Action::PageNext),
            TableEvent::PrevPage => Some(Action::PagePrev),
            TableEvent::FirstPage => Some(Action::PageFirst),
            TableEvent::LastPage => Some(Action::PageLast),
            TableEvent::CyclePageSize => Some(Action::CyclePageSize),
            TableEvent::JumpPrompt => {
                tui.prompt = Some(PromptState::new(PromptKind::Page));
                None
            }
        },
        Page::NotFound => {
            matches!(event, TuiEvent::Submit).then(|| Action::Navigate(HOME_PATH.to_string()))
        }
        _ => None,
    }
}

/// Perform the I/O an update asked for. Returns true when the app should exit.
fn apply_effect(effect: Effect, app: &mut App, store: &ProfileStore, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::PersistProfile => {
            if let Some(user) = &app.user
                && let Err(e) = store.save(user)
            {
                warn!("Failed to save profile: {}", e);
                app.status_message = format!("Profile not saved: {e}");
            }
        }
        Effect::ClearProfile => {
            if let Err(e) = store.clear() {
                warn!("Failed to clear profile: {}", e);
                app.status_message = format!("Profile not cleared: {e}");
            }
        }
        Effect::SpawnLogout => spawn_logout(app, tx.clone()),
    }
    false
}

fn spawn_logout(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-out ({}ms)", LOGOUT_DELAY.as_millis());
    let gate = app.loading.clone();
    tokio::spawn(async move {
        gate.with_scope(tokio::time::sleep(LOGOUT_DELAY)).await;
        if tx.send(Action::LogoutComplete).is_err() {
            warn!("Failed to send LogoutComplete: receiver dropped");
        }
    });
}

fn profile_store(config: &ResolvedConfig) -> ProfileStore {
    let dir = config
        .profile_dir
        .clone()
        .or_else(profile::default_dir)
        .unwrap_or_else(|| PathBuf::from(".cockpit"));
    debug!("Profile directory: {}", dir.display());
    ProfileStore::new(dir, config.secret_key.clone())
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = profile_store(&config);
    let user = store.load();
    // A token without a readable profile counts as signed out.
    let has_token = user.is_some() && store.has_token();
    let mut app = App::from_config(&config, user, has_token);
    update(&mut app, Action::Navigate(config.start_path.clone()));
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_busy();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 4.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_event(&app, &mut tui, &event) {
                let effect = update(&mut app, action);
                should_quit |= apply_effect(effect, &mut app, &store, &tx);
                tui.sync(&app);
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (sign-out completion)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            should_quit |= apply_effect(effect, &mut app, &store, &tx);
            tui.sync(&app);
        }

        if should_quit {
            break;
        }
    }

    info!("Cockpit shutting down");
    ratatui::restore();
    Ok(())
}
