//! Static page bodies: the overview dashboard and the placeholder shown for
//! menu entries without a dedicated view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Summary cards on the overview page: (label, value).
pub const OVERVIEW_CARDS: [(&str, &str); 3] = [
    ("TOTAL REVENUE", "$14,200"),
    ("ACTIVE PROJECTS", "24"),
    ("NEW CLIENTS", "+12"),
];

pub struct Overview<'a> {
    pub user_name: Option<&'a str>,
    pub palette: Palette,
}

impl Component for Overview<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let [greeting_area, cards_area, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);

        let name = self.user_name.unwrap_or("Guest");
        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Welcome back, {name}"),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Here's what's happening with your projects today.",
                palette.muted(),
            )),
        ]);
        frame.render_widget(greeting, greeting_area);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).spacing(1).split(cards_area);
        for ((label, value), card_area) in OVERVIEW_CARDS.iter().zip(columns.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(*label, palette.muted())),
                Line::from(Span::styled(
                    *value,
                    palette.accent().add_modifier(Modifier::BOLD),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, *card_area);
        }
    }
}

pub struct Placeholder<'a> {
    pub title: &'a str,
    pub palette: Palette,
}

impl Component for Placeholder<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("This is where the {} content would go.", self.title.to_lowercase());
        let paragraph = Paragraph::new(text)
            .style(self.palette.muted())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border))
                    .padding(Padding::uniform(1)),
            );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(component: &mut dyn Component) -> String {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| component.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_overview_greets_user_and_shows_cards() {
        let text = render_text(&mut Overview {
            user_name: Some("Admin"),
            palette: Palette::for_theme(Theme::Light),
        });
        assert!(text.contains("Welcome back, Admin"));
        assert!(text.contains("TOTAL REVENUE"));
        assert!(text.contains("$14,200"));
        assert!(text.contains("+12"));
    }

    #[test]
    fn test_placeholder_names_the_page() {
        let text = render_text(&mut Placeholder {
            title: "Blogger",
            palette: Palette::for_theme(Theme::Dark),
        });
        assert!(text.contains("This is where the blogger content would go."));
    }
}
