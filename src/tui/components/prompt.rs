//! # Prompt Component
//!
//! Single-line input overlay used for "go to path" (`:`) and
//! "go to page" (`g`).

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Path,
    Page,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Path => " Go to path ",
            PromptKind::Page => " Go to page ",
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            PromptKind::Path => !c.is_control(),
            PromptKind::Page => c.is_ascii_digit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(PromptKind, String),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
}

impl PromptState {
    pub fn new(kind: PromptKind) -> Self {
        let input = match kind {
            PromptKind::Path => "/".to_string(),
            PromptKind::Page => String::new(),
        };
        Self { kind, input }
    }
}

impl EventHandler for PromptState {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                if self.kind.accepts(*c) {
                    self.input.push(*c);
                }
                None
            }
            TuiEvent::Paste(text) => {
                let kind = self.kind;
                self.input.extend(text.chars().filter(|c| kind.accepts(*c)));
                None
            }
            TuiEvent::Backspace => {
                self.input.pop();
                None
            }
            TuiEvent::Submit => Some(PromptEvent::Submit(self.kind, self.input.clone())),
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

pub struct Prompt<'a> {
    pub state: &'a PromptState,
    pub palette: Palette,
}

impl Component for Prompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);
        let [boxed] = Layout::horizontal([Constraint::Length(40.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, boxed);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.accent())
            .title(self.state.kind.title())
            .title_bottom(Line::from(" Enter Go  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(boxed);
        frame.render_widget(
            Paragraph::new(self.state.input.clone())
                .style(self.palette.base())
                .block(block),
            boxed,
        );
        let cursor_x = inner.x + (self.state.input.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
