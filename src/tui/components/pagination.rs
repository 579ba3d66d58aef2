//! # Pagination Component
//!
//! One line under the table:
//!
//! ```text
//! «  ‹  1 … 3 [4] 5 … 9  ›  »   ( 31 - 40 of 45 )   10 per page
//! ```
//!
//! Stateless; reads the page's `Pager` and the total row count.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::table::{PageToken, Pager, item_range, page_window};
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct Pagination<'a> {
    pub pager: &'a Pager,
    pub total: usize,
    pub palette: Palette,
}

impl<'a> Pagination<'a> {
    pub fn new(pager: &'a Pager, total: usize, palette: Palette) -> Self {
        Self {
            pager,
            total,
            palette,
        }
    }

    /// `"( 11 - 20 of 45 )"`, or `"( 0 of 0 )"` for an empty table.
    pub fn range_text(&self) -> String {
        match item_range(self.pager.page, self.pager.page_size, self.total) {
            Some((start, end)) => format!("( {start} - {end} of {} )", self.total),
            None => format!("( 0 of {} )", self.total),
        }
    }

    fn line(&self) -> Line<'static> {
        let palette = self.palette;
        let total_pages = self.pager.total_pages(self.total);
        let page = self.pager.page;
        let can_back = page > 1;
        let can_forward = page < total_pages;
        let arrow = |text: &'static str, enabled: bool| {
            Span::styled(
                text,
                if enabled { palette.accent() } else { palette.muted() },
            )
        };

        let mut spans = vec![arrow("«", can_back), Span::raw("  "), arrow("‹", can_back), Span::raw("  ")];
        for (i, token) in page_window(page, total_pages).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(match token {
                PageToken::Page(n) if n == page => {
                    Span::styled(format!("[{n}]"), palette.accent().add_modifier(Modifier::BOLD))
                }
                PageToken::Page(n) => Span::raw(n.to_string()),
                PageToken::Ellipsis => Span::styled("…", palette.muted()),
            });
        }
        spans.extend([
            Span::raw("  "),
            arrow("›", can_forward),
            Span::raw("  "),
            arrow("»", can_forward),
            Span::raw("   "),
            Span::styled(self.range_text(), palette.muted()),
            Span::raw("   "),
            Span::raw(format!("{} per page", self.pager.page_size)),
        ]);
        Line::from(spans)
    }
}

impl Component for Pagination<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()).style(self.palette.base()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(pager: &Pager, total: usize) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Pagination::new(pager, total, Palette::for_theme(Theme::Light)).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_range_text() {
        let mut pager = Pager::default();
        pager.page = 2;
        assert_eq!(Pagination::new(&pager, 45, Palette::for_theme(Theme::Light)).range_text(), "( 11 - 20 of 45 )");
        pager.page = 5;
        assert_eq!(Pagination::new(&pager, 45, Palette::for_theme(Theme::Light)).range_text(), "( 41 - 45 of 45 )");
        assert_eq!(Pagination::new(&pager, 0, Palette::for_theme(Theme::Light)).range_text(), "( 0 of 0 )");
    }

    #[test]
    fn test_renders_window_and_page_size() {
        let mut pager = Pager::new(5, vec![5, 10]);
        pager.page = 5;
        let text = render(&pager, 45);
        assert!(text.contains("1 … 4 [5] 6 … 9"));
        assert!(text.contains("( 21 - 25 of 45 )"));
        assert!(text.contains("5 per page"));
    }

    #[test]
    fn test_few_pages_have_no_ellipsis() {
        let pager = Pager::default();
        let text = render(&pager, 45);
        assert!(text.contains("[1] 2 3 4 5"));
        assert!(!text.contains('…'));
    }
}
