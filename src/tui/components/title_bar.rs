//! # TitleBar Component
//!
//! Single-line bar at the top of the screen: app name, page title, the
//! current status message and the active theme.
//!
//! Stateless. All fields are props:
//!
//! ```rust,ignore
//! let mut bar = TitleBar::new(app.page_title(), app.status_message.clone(), app.theme);
//! bar.render(frame, area);
//! ```
//!
//! Formats, by priority:
//!
//! 1. `"Cockpit | Table & Pagination | Signed in as Admin  [dark]"`
//! 2. `"Cockpit | Table & Pagination  [dark]"` when the status is empty

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::config::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct TitleBar {
    pub page_title: String,
    pub status_message: String,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(page_title: String, status_message: String, theme: Theme) -> Self {
        Self {
            page_title,
            status_message,
            theme,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let theme_label = format!("[{}]", self.theme.label());
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(theme_label.len() as u16 + 1),
        ])
        .areas(area);

        let mut spans = vec![
            Span::styled("Cockpit", palette.accent().add_modifier(Modifier::BOLD)),
            Span::styled(" | ", palette.muted()),
            Span::styled(self.page_title.clone(), Style::default().fg(palette.fg)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", palette.muted()));
            spans.push(Span::styled(self.status_message.clone(), palette.muted()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), left);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(theme_label, palette.muted())).right_aligned()),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut bar = TitleBar::new(
            "Table & Pagination".to_string(),
            "Signed in as Admin".to_string(),
            Theme::Dark,
        );
        let text = render_text(&mut bar);
        assert!(text.contains("Cockpit"));
        assert!(text.contains("Table & Pagination"));
        assert!(text.contains("Signed in as Admin"));
        assert!(text.contains("[dark]"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut bar = TitleBar::new("Dashboard".to_string(), String::new(), Theme::Light);
        let text = render_text(&mut bar);
        assert!(text.contains("Cockpit | Dashboard"));
        assert_eq!(text.matches('|').count(), 1);
        assert!(text.contains("[light]"));
    }
}
