//! # PageHeader Component
//!
//! Breadcrumb trail above the page title.
//!
//! ```text
//! Home › My Account › Members & Roles › Team Info
//! Team Info
//! ```
//!
//! The trail is hidden when it holds a single crumb. Crumbs with an href
//! are drawn as links; the last crumb is always plain text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::breadcrumb::BreadcrumbItem;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const SEPARATOR: &str = " › ";

pub struct PageHeader<'a> {
    pub crumbs: &'a [BreadcrumbItem],
    pub title: &'a str,
    pub palette: Palette,
}

impl<'a> PageHeader<'a> {
    pub fn new(crumbs: &'a [BreadcrumbItem], title: &'a str, palette: Palette) -> Self {
        Self {
            crumbs,
            title,
            palette,
        }
    }

    /// Rows the header occupies, including its bottom border.
    pub fn height(&self) -> u16 {
        if self.crumbs.len() > 1 { 3 } else { 2 }
    }

    fn trail(&self) -> Line<'static> {
        let last = self.crumbs.len().saturating_sub(1);
        let mut spans = Vec::with_capacity(self.crumbs.len() * 2);
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, self.palette.muted()));
            }
            let style = if i == last {
                Style::default().fg(self.palette.fg).add_modifier(Modifier::BOLD)
            } else if crumb.href.is_some() {
                self.palette.accent().add_modifier(Modifier::UNDERLINED)
            } else {
                self.palette.muted()
            };
            spans.push(Span::styled(crumb.label.clone(), style));
        }
        Line::from(spans)
    }
}

impl Component for PageHeader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(2);
        if self.crumbs.len() > 1 {
            lines.push(self.trail());
        }
        lines.push(Line::from(Span::styled(
            self.title.to_string(),
            Style::default().fg(self.palette.fg).add_modifier(Modifier::BOLD),
        )));

        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(self.palette.border)),
        );
        frame.render_widget(header, area);
    }
}
