//! # DataTable Component
//!
//! Renders one page of rows with sortable column headers.
//!
//! ```text
//!  ID ▲ ⓘ │ User ↕ ⓘ                    │ Role ↕ ⓘ │ ... │    Actions ⓘ
//!  1      │ User 1 <user1@example.com>  │ Admin    │ ... │          ✎ ✗
//! ```
//!
//! Sort and page state are owned by the page (`App::sort`, `App::pager`);
//! this component only tracks which header is selected and whether the
//! column info overlay is open, and turns keys into `TableEvent`s.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row as TableRow, Table, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::table::{Align, Column, Row, SortDirection, SortState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const EMPTY_MESSAGE: &str = "No data available";
const INFO_MARKER: &str = "ⓘ";

/// What the table needs to know about a column to handle keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub header: String,
    pub accessor: String,
    pub sortable: bool,
    pub description: Option<String>,
}

impl<R> From<&Column<R>> for ColumnMeta {
    fn from(column: &Column<R>) -> Self {
        Self {
            header: column.header.clone(),
            accessor: column.accessor.clone(),
            sortable: column.sortable,
            description: column.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Sort(String),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    CyclePageSize,
    /// Open the "go to page" prompt.
    JumpPrompt,
}

pub struct DataTableState {
    pub columns: Vec<ColumnMeta>,
    pub selected_column: usize,
    /// Column whose description overlay is open.
    pub info: Option<usize>,
}

impl DataTableState {
    pub fn new<R>(columns: &[Column<R>]) -> Self {
        Self {
            columns: columns.iter().map(ColumnMeta::from).collect(),
            selected_column: 0,
            info: None,
        }
    }

    pub fn selected(&self) -> Option<&ColumnMeta> {
        self.columns.get(self.selected_column)
    }

    pub fn info_column(&self) -> Option<&ColumnMeta> {
        self.info.and_then(|i| self.columns.get(i))
    }
}

impl EventHandler for DataTableState {
    type Event = TableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TableEvent> {
        // The info overlay swallows keys until closed.
        if self.info.is_some() {
            if matches!(
                event,
                TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('i') | TuiEvent::InputChar('q')
            ) {
                self.info = None;
            }
            return None;
        }

        match event {
            TuiEvent::CursorLeft => {
                self.selected_column = self.selected_column.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                if self.selected_column + 1 < self.columns.len() {
                    self.selected_column += 1;
                }
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('s') => self
                .selected()
                .filter(|c| c.sortable)
                .map(|c| TableEvent::Sort(c.accessor.clone())),
            TuiEvent::InputChar('i') => {
                if self.selected().is_some_and(|c| c.description.is_some()) {
                    self.info = Some(self.selected_column);
                }
                None
            }
            TuiEvent::InputChar('n') | TuiEvent::PageDown => Some(TableEvent::NextPage),
            TuiEvent::InputChar('p') | TuiEvent::PageUp => Some(TableEvent::PrevPage),
            TuiEvent::Home => Some(TableEvent::FirstPage),
            TuiEvent::End => Some(TableEvent::LastPage),
            TuiEvent::InputChar('z') => Some(TableEvent::CyclePageSize),
            TuiEvent::InputChar('g') => Some(TableEvent::JumpPrompt),
            _ => None,
        }
    }
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "↕",
    }
}

/// Header label with its sort indicator and info marker.
pub fn header_label<R>(column: &Column<R>, sort: &SortState) -> String {
    let mut label = column.header.clone();
    if column.sortable {
        label.push(' ');
        label.push_str(sort_indicator(sort.direction_for(&column.accessor)));
    }
    if column.description.is_some() {
        label.push(' ');
        label.push_str(INFO_MARKER);
    }
    label
}

/// Transient render wrapper for one page of the table.
pub struct DataTable<'a, R> {
    pub state: &'a DataTableState,
    pub columns: &'a [Column<R>],
    pub rows: &'a [R],
    pub sort: &'a SortState,
    pub focused: bool,
    pub palette: Palette,
}

impl<'a, R: Row> DataTable<'a, R> {
    pub fn new(
        state: &'a DataTableState,
        columns: &'a [Column<R>],
        rows: &'a [R],
        sort: &'a SortState,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            columns,
            rows,
            sort,
            focused,
            palette,
        }
    }

    /// Widest of header and cells, in terminal columns.
    fn column_widths(&self, headers: &[String]) -> Vec<u16> {
        self.columns
            .iter()
            .zip(headers)
            .map(|(column, header)| {
                let cells = self
                    .rows
                    .iter()
                    .map(|row| column.cell_text(row).width())
                    .max()
                    .unwrap_or(0);
                header.width().max(cells) as u16
            })
            .collect()
    }

    fn aligned<'t>(text: String, align: Align) -> Line<'t> {
        match align {
            Align::Left => Line::from(text),
            Align::Right => Line::from(text).right_aligned(),
        }
    }
}

impl<R: Row> Component for DataTable<'_, R> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focused {
                palette.accent()
            } else {
                Style::default().fg(palette.border)
            })
            .title_bottom(
                Line::from(" ←/→ Column  s Sort  i Info  n/p Page  g Go to  z Size ").centered(),
            );

        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|c| header_label(c, self.sort))
            .collect();

        if self.rows.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let header_line = Line::from(headers.join("  "));
            let text = Text::from(vec![
                header_line.style(palette.muted()),
                Line::default(),
                Line::from(EMPTY_MESSAGE).centered().style(palette.muted()),
            ]);
            frame.render_widget(Paragraph::new(text), inner);
            return;
        }

        let widths = self.column_widths(&headers);
        let header_cells = self.columns.iter().zip(headers).enumerate().map(|(i, (column, label))| {
            let style = if self.focused && i == self.state.selected_column {
                palette.selected()
            } else {
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
            };
            Cell::from(Self::aligned(label, column.align)).style(style)
        });
        let header = TableRow::new(header_cells).bottom_margin(1);

        let rows = self.rows.iter().map(|row| {
            TableRow::new(
                self.columns
                    .iter()
                    .map(|column| Cell::from(Self::aligned(column.cell_text(row), column.align))),
            )
            .style(Style::default().fg(palette.fg))
        });

        let constraints: Vec<Constraint> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                // Last column absorbs the slack so right-aligned actions hug the edge.
                if i + 1 == widths.len() {
                    Constraint::Min(w)
                } else {
                    Constraint::Length(w)
                }
            })
            .collect();

        let table = Table::new(rows, constraints)
            .header(header)
            .column_spacing(2)
            .block(block);
        frame.render_widget(table, area);
    }
}

/// Overlay showing one column's description.
pub struct ColumnInfo<'a> {
    pub column: &'a ColumnMeta,
    pub palette: Palette,
}

impl Component for ColumnInfo<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.accent())
            .title(Span::styled(
                format!(" {} ", self.column.header),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::uniform(1));

        let body = self.column.description.as_deref().unwrap_or_default();
        let paragraph = Paragraph::new(body.to_string())
            .style(self.palette.base())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use crate::core::demo::{DemoUser, demo_columns, demo_users};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn render(rows: &[DemoUser], sort: &SortState) -> String {
        let columns = demo_columns();
        let state = DataTableState::new(&columns);
        let backend = TestBackend::new(120, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DataTable::new(&state, &columns, rows, sort, true, Palette::for_theme(Theme::Dark))
                    .render(f, f.area())
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_header_labels() {
        let columns = demo_columns();
        let mut sort = SortState::default();
        assert_eq!(header_label(&columns[0], &sort), "ID ↕ ⓘ");
        sort.toggle("id");
        assert_eq!(header_label(&columns[0], &sort), "ID ▲ ⓘ");
        sort.toggle("id");
        assert_eq!(header_label(&columns[0], &sort), "ID ▼ ⓘ");
        // Actions is not sortable
        assert_eq!(header_label(&columns[5], &sort), "Actions ⓘ");
    }

    #[test]
    fn test_renders_rows_and_custom_cells() {
        let users = demo_users();
        let text = render(&users[..3], &SortState::default());
        assert!(text.contains("User 1 <user1@example.com>"));
        assert!(text.contains("✎ ✗"));
        assert!(text.contains("Last Login"));
    }

    #[test]
    fn test_empty_rows_show_message() {
        let text = render(&[], &SortState::default());
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_sort_event_only_for_sortable_columns() {
        let columns = demo_columns();
        let mut state = DataTableState::new(&columns);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('s')),
            Some(TableEvent::Sort("id".to_string()))
        );
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorRight);
        }
        assert_eq!(state.selected_column, columns.len() - 1);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_info_overlay_opens_and_swallows_keys() {
        let columns = demo_columns();
        let mut state = DataTableState::new(&columns);
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(state.info_column().unwrap().header, "User");
        assert_eq!(state.handle_event(&TuiEvent::InputChar('n')), None);
        state.handle_event(&TuiEvent::Escape);
        assert!(state.info.is_none());
        assert_eq!(state.handle_event(&TuiEvent::InputChar('n')), Some(TableEvent::NextPage));
    }

    #[test]
    fn test_column_info_renders_description() {
        let columns = demo_columns();
        let meta = ColumnMeta::from(&columns[2]);
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                ColumnInfo { column: &meta, palette: Palette::for_theme(Theme::Light) }
                    .render(f, f.area())
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Role"));
        assert!(text.contains("Access level"));
    }
}
