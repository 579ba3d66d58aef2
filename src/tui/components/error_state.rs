//! # ErrorState Component
//!
//! Content shown for routes that match no page.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const NOT_FOUND_MESSAGE: &str = "The page you looked for couldn't be found.";

pub struct ErrorState<'a> {
    pub code: u16,
    pub message: &'a str,
    pub path: &'a str,
    pub palette: Palette,
}

impl<'a> ErrorState<'a> {
    pub fn not_found(path: &'a str, palette: Palette) -> Self {
        Self {
            code: 404,
            message: NOT_FOUND_MESSAGE,
            path,
            palette,
        }
    }
}

impl Component for ErrorState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let lines = vec![
            Line::from(Span::styled(
                self.code.to_string(),
                Style::default().fg(palette.danger).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(self.message.to_string(), Style::default().fg(palette.fg))),
            Line::from(Span::styled(self.path.to_string(), palette.muted())),
            Line::default(),
            Line::from(Span::styled("Enter Back to home", palette.accent())),
        ];
        let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).centered(), middle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_not_found_renders_code_message_and_path() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ErrorState::not_found("/nope", Palette::for_theme(Theme::Dark)).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("404"));
        assert!(text.contains(NOT_FOUND_MESSAGE));
        assert!(text.contains("/nope"));
    }
}
