//! # LoadingOverlay Component
//!
//! Blocking overlay drawn over the whole screen while the loading gate is
//! held or a sign-out is running.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

const DOTS: [&str; 4] = ["   ", ".  ", ".. ", "..."];

pub struct LoadingOverlay<'a> {
    pub label: &'a str,
    pub spinner_frame: usize,
    pub palette: Palette,
}

impl<'a> LoadingOverlay<'a> {
    pub fn new(label: &'a str, spinner_frame: usize, palette: Palette) -> Self {
        Self {
            label,
            spinner_frame,
            palette,
        }
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.label, DOTS[self.spinner_frame % DOTS.len()])
    }
}

impl Component for LoadingOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text();
        let width = (text.chars().count() as u16 + 6).min(area.width);
        let [row] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);
        let [boxed] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, boxed);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            self.palette.accent().add_modifier(Modifier::BOLD),
        )))
        .centered()
        .style(self.palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.palette.accent()),
        );
        frame.render_widget(paragraph, boxed);
    }
}
