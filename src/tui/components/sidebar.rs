//! # Sidebar Component
//!
//! Collapsible navigation tree on the left of every non-auth page.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState` (expanded folders, selection)
//! - `Sidebar` is created each frame with borrowed state and props
//!
//! The tree is flattened into one row per visible entry:
//!
//! ```text
//! ⌂ Overview                 Link     depth 0
//! ▦ Components Demo      ▾   Folder   depth 0 (open)
//!     Table & Pagination     Link     depth 1
//! ☺ Public Profile       ▸   Folder   depth 0 (closed)
//! ─────────────
//! SPACES                 ▾   Section
//! ▦ Metrics Hub              Link     depth 0
//! ```
//!
//! Folders containing the current route open automatically.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::auth::User;
use crate::core::menu::{MenuKind, MenuNode, has_active_child};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const SIDEBAR_WIDTH: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Link,
    Folder { open: bool },
    Section { open: bool },
}

/// One rendered row of the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Title path from the root, e.g. `"My Account/Members & Roles"`.
    pub key: String,
    pub title: String,
    pub icon: Option<char>,
    pub path: Option<String>,
    pub depth: usize,
    pub kind: EntryKind,
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    Navigate(String),
}

fn child_key(parent: &str, title: &str) -> String {
    if parent.is_empty() {
        title.to_string()
    } else {
        format!("{parent}/{title}")
    }
}

fn push_entries(
    node: &MenuNode,
    depth: usize,
    parent_key: &str,
    expanded: &HashSet<String>,
    out: &mut Vec<SidebarEntry>,
) {
    let key = child_key(parent_key, &node.title);
    let open = expanded.contains(&key);
    let (kind, child_depth) = match (node.kind, node.has_children()) {
        (MenuKind::Section, _) => (EntryKind::Section { open }, 0),
        (MenuKind::Link, false) => (EntryKind::Link, depth),
        (MenuKind::Link, true) => (EntryKind::Folder { open }, depth + 1),
    };
    out.push(SidebarEntry {
        key: key.clone(),
        title: node.title.clone(),
        icon: node.icon,
        path: node.path.clone(),
        depth,
        kind,
    });
    if open && kind != EntryKind::Link {
        for child in &node.children {
            push_entries(child, child_depth, &key, expanded, out);
        }
    }
}

/// Persistent state for the sidebar.
pub struct SidebarState {
    /// Keys of open folders and sections.
    pub expanded: HashSet<String>,
    pub selected: usize,
    pub list_state: ListState,
    /// Rows from the last `refresh`, used for event handling.
    pub entries: Vec<SidebarEntry>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
            selected: 0,
            list_state: ListState::default(),
            entries: Vec::new(),
        }
    }

    /// Open every folder that contains `route`, then rebuild the rows.
    pub fn sync_route(&mut self, visible: &[&MenuNode], route: &str) {
        fn open_active(node: &MenuNode, parent_key: &str, route: &str, expanded: &mut HashSet<String>) {
            let key = child_key(parent_key, &node.title);
            if has_active_child(&node.children, route) {
                expanded.insert(key.clone());
            }
            for child in &node.children {
                open_active(child, &key, route, expanded);
            }
        }
        for node in visible {
            open_active(node, "", route, &mut self.expanded);
        }
        self.refresh(visible);
        if let Some(index) = self
            .entries
            .iter()
            .position(|e| e.path.as_deref() == Some(route) && e.kind == EntryKind::Link)
        {
            self.select(index);
        }
    }

    /// Rebuild the flattened rows and clamp the selection.
    pub fn refresh(&mut self, visible: &[&MenuNode]) {
        let mut entries = Vec::new();
        for node in visible {
            push_entries(node, 0, "", &self.expanded, &mut entries);
        }
        self.entries = entries;
        let max = self.entries.len().saturating_sub(1);
        self.select(self.selected.min(max));
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state
            .select(if self.entries.is_empty() { None } else { Some(index) });
    }

    fn toggle(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
    }

    pub fn selected_entry(&self) -> Option<&SidebarEntry> {
        self.entries.get(self.selected)
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    /// Expanding or collapsing changes the rows; the caller must `refresh`
    /// before the next render.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        if self.entries.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.selected + 1).min(self.entries.len() - 1));
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(self.entries.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::CursorRight | TuiEvent::InputChar(' ') => {
                let entry = self.entries.get(self.selected)?.clone();
                match entry.kind {
                    EntryKind::Link => entry.path.map(SidebarEvent::Navigate),
                    EntryKind::Folder { open } | EntryKind::Section { open } => {
                        // Right only opens; Enter/Space toggle.
                        if !(open && matches!(event, TuiEvent::CursorRight)) {
                            self.toggle(&entry.key);
                        }
                        None
                    }
                }
            }
            TuiEvent::CursorLeft => {
                let entry = self.entries.get(self.selected)?.clone();
                match entry.kind {
                    EntryKind::Folder { open: true } | EntryKind::Section { open: true } => {
                        self.toggle(&entry.key);
                    }
                    _ => {
                        // Jump to the parent folder.
                        if let Some((parent, _)) = entry.key.rsplit_once('/')
                            && let Some(index) = self.entries.iter().position(|e| e.key == parent)
                        {
                            self.select(index);
                        }
                    }
                }
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    pub state: &'a mut SidebarState,
    pub route: &'a str,
    pub user: Option<&'a User>,
    pub focused: bool,
    pub palette: Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        state: &'a mut SidebarState,
        route: &'a str,
        user: Option<&'a User>,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            route,
            user,
            focused,
            palette,
        }
    }

    fn entry_line(&self, entry: &SidebarEntry, is_selected: bool) -> Line<'static> {
        let palette = self.palette;
        let is_active = entry.path.as_deref() == Some(self.route) && entry.kind == EntryKind::Link;
        let indent = "  ".repeat(entry.depth);

        let style = if is_selected && self.focused {
            palette.selected()
        } else if is_active {
            palette.accent().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };

        match entry.kind {
            EntryKind::Section { open } => {
                let chevron = if open { "▾" } else { "▸" };
                Line::from(vec![
                    Span::styled(entry.title.to_uppercase(), style.add_modifier(Modifier::DIM)),
                    Span::styled(format!(" {chevron}"), style),
                ])
            }
            EntryKind::Folder { open } => {
                let chevron = if open { "▾" } else { "▸" };
                let icon = entry.icon.map(|c| format!("{c} ")).unwrap_or_default();
                Line::from(vec![
                    Span::styled(format!("{indent}{icon}{}", entry.title), style),
                    Span::styled(format!(" {chevron}"), palette.muted()),
                ])
            }
            EntryKind::Link => {
                let icon = entry.icon.map(|c| format!("{c} ")).unwrap_or_default();
                Line::from(Span::styled(format!("{indent}{icon}{}", entry.title), style))
            }
        }
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let border_style = if self.focused {
            palette.accent()
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [logo_area, nav_area, profile_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0), Constraint::Length(3)])
                .areas(inner);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled(" C ", palette.selected()),
            Span::styled(" Cockpit", Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)),
        ]));
        frame.render_widget(logo, logo_area);

        let mut items: Vec<ListItem> = Vec::with_capacity(self.state.entries.len());
        for (i, entry) in self.state.entries.iter().enumerate() {
            if matches!(entry.kind, EntryKind::Section { .. }) && i > 0 {
                items.push(ListItem::new(Line::from(Span::styled(
                    "─".repeat(nav_area.width as usize),
                    palette.muted(),
                ))));
            }
            items.push(ListItem::new(self.entry_line(entry, i == self.state.selected)));
        }

        // Separator rows shift list indices; map the selection accordingly.
        let separators_before = self
            .state
            .entries
            .iter()
            .take(self.state.selected + 1)
            .enumerate()
            .filter(|(i, e)| *i > 0 && matches!(e.kind, EntryKind::Section { .. }))
            .count();
        let mut list_state = ListState::default()
            .with_offset(self.state.list_state.offset())
            .with_selected(self.state.list_state.selected().map(|s| s + separators_before));

        frame.render_stateful_widget(List::new(items), nav_area, &mut list_state);
        *self.state.list_state.offset_mut() = list_state.offset();

        let profile = match self.user {
            Some(user) => vec![
                Line::from(Span::styled(
                    user.name.clone(),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(user.role.clone(), palette.muted())),
            ],
            None => vec![Line::from(Span::styled("Guest", palette.muted()))],
        };
        let profile = Paragraph::new(profile).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.border)),
        );
        frame.render_widget(profile, profile_area);
    }
}
