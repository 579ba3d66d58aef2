//! # LoginForm Component
//!
//! Full-screen sign-in card shown on `/auth/login`.
//!
//! ```text
//!            ┌ Sign in ─────────────────────┐
//!            │ Email                         │
//!            │ admin@demo.com█               │
//!            │                               │
//!            │ Email is required             │
//!            └──── Enter Sign in  Esc Quit ──┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const DEFAULT_EMAIL: &str = "admin@demo.com";
const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Submit(String),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

impl EventHandler for LoginFormState {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LoginEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.email.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.email.push_str(text.trim());
                None
            }
            TuiEvent::Backspace => {
                self.email.pop();
                None
            }
            TuiEvent::Submit => Some(LoginEvent::Submit(self.email.clone())),
            TuiEvent::Escape => Some(LoginEvent::Cancel),
            _ => None,
        }
    }
}

pub struct LoginForm<'a> {
    pub state: &'a LoginFormState,
    pub error: Option<&'a str>,
    pub palette: Palette,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginFormState, error: Option<&'a str>, palette: Palette) -> Self {
        Self {
            state,
            error,
            palette,
        }
    }
}

impl Component for LoginForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let [row] = Layout::vertical([Constraint::Length(CARD_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, card);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.accent())
            .title(Span::styled(" Sign in ", Style::default().add_modifier(Modifier::BOLD)))
            .title_bottom(Line::from(" Enter Sign in  Esc Quit ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let mut lines = vec![
            Line::from(Span::styled("Welcome back to Cockpit", palette.muted())),
            Line::default(),
            Line::from(Span::styled("Email", Style::default().fg(palette.fg).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                self.state.email.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
        ];
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(error.to_string(), Style::default().fg(palette.danger))));
        }
        frame.render_widget(Paragraph::new(lines).style(palette.base()), inner);

        let cursor_x = inner.x + (self.state.email.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y + 3));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_default_email_prefilled() {
        assert_eq!(LoginFormState::default().email, "admin@demo.com");
    }

    #[test]
    fn test_editing_and_submit() {
        let mut state = LoginFormState::default();
        for _ in 0.."admin@demo.com".len() {
            state.handle_event(&TuiEvent::Backspace);
        }
        assert!(state.email.is_empty());
        state.handle_event(&TuiEvent::Paste(" jane@x.io \n".to_string()));
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::InputChar('o'));
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(LoginEvent::Submit("jane@x.io".to_string()))
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(LoginEvent::Cancel));
    }

    #[test]
    fn test_renders_email_and_error() {
        let state = LoginFormState::default();
        let backend = TestBackend::new(60, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                LoginForm::new(&state, Some("Email is required"), Palette::for_theme(Theme::Light))
                    .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Sign in"));
        assert!(text.contains("admin@demo.com"));
        assert!(text.contains("Email is required"));
    }
}
