//! # Table Sorting & Pagination
//!
//! Pure functions behind the data table: sort a list of rows by one column,
//! then cut out the page being displayed.
//!
//! ```text
//! rows ──sort_rows(SortState)──► sorted ──paginate(page, size)──► visible
//! ```
//!
//! Table state (`SortState`, `Pager`) belongs to the page that shows the
//! table, not to the table widget.

use std::fmt;

use chrono::NaiveDate;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Maximum number of page buttons shown before collapsing with `…`.
const MAX_VISIBLE_PAGES: usize = 5;

// ============================================================================
// Cells, rows and columns
// ============================================================================

/// A single field value. Values of different kinds order by kind first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%-m/%-d/%Y")),
        }
    }
}

/// A record the table can display.
///
/// `cell` must return a value for every accessor used by the table's columns.
pub trait Row {
    fn cell(&self, accessor: &str) -> CellValue;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

pub struct Column<R> {
    pub header: String,
    pub accessor: String,
    pub sortable: bool,
    /// Shown in the column info overlay.
    pub description: Option<String>,
    pub align: Align,
    /// Custom cell text. Falls back to the accessed value.
    pub render: Option<fn(&R) -> String>,
}

impl<R: Row> Column<R> {
    pub fn new(header: &str, accessor: &str) -> Self {
        Self {
            header: header.to_string(),
            accessor: accessor.to_string(),
            sortable: false,
            description: None,
            align: Align::Left,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn render_with(mut self, render: fn(&R) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn cell_text(&self, row: &R) -> String {
        match self.render {
            Some(render) => render(row),
            None => row.cell(&self.accessor).to_string(),
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, accessor: &str) {
        if self.column.as_deref() == Some(accessor) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(accessor.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn direction_for(&self, accessor: &str) -> Option<SortDirection> {
        (self.column.as_deref() == Some(accessor)).then_some(self.direction)
    }
}

/// Stable sort by the state's column. With no column, input order is kept.
///
/// Descending reverses the comparison, not the output, so equal values keep
/// their input order either way.
pub fn sort_rows<R: Row + Clone>(rows: &[R], sort: &SortState) -> Vec<R> {
    let mut sorted = rows.to_vec();
    if let Some(accessor) = sort.column.as_deref() {
        sorted.sort_by(|a, b| {
            let ordering = a.cell(accessor).cmp(&b.cell(accessor));
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    ZeroPageSize,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroPageSize => write!(f, "page size must be at least 1"),
        }
    }
}

impl std::error::Error for TableError {}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows on 1-based `page`. Out-of-range pages give an empty slice.
pub fn paginate<R>(rows: &[R], page: usize, page_size: usize) -> Result<&[R], TableError> {
    if page_size == 0 {
        return Err(TableError::ZeroPageSize);
    }
    if page == 0 {
        return Ok(&[]);
    }
    let start = (page - 1).saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    Ok(&rows[start..end])
}

/// 1-based inclusive range of items shown on `page`, for "( 11 - 20 of 45 )".
pub fn item_range(page: usize, page_size: usize, total: usize) -> Option<(usize, usize)> {
    if total == 0 || page == 0 || page_size == 0 {
        return None;
    }
    let start = (page - 1) * page_size + 1;
    if start > total {
        return None;
    }
    Some((start, (page * page_size).min(total)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Page buttons to show: all pages when there are few, otherwise the first,
/// last and a window around the current page separated by `…`.
pub fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

/// Page-owned pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl Pager {
    /// Zero sizes are dropped from the options; a zero `page_size` falls
    /// back to the default.
    pub fn new(page_size: usize, options: Vec<usize>) -> Self {
        let mut page_size_options: Vec<usize> = options.into_iter().filter(|&n| n > 0).collect();
        if page_size_options.is_empty() {
            page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        Self {
            page: 1,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            page_size_options,
        }
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Changing the page size always returns to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            log::warn!("Ignoring page size 0, using {DEFAULT_PAGE_SIZE}");
            self.page_size = DEFAULT_PAGE_SIZE;
        } else {
            self.page_size = size;
        }
        self.page = 1;
    }

    /// Advance to the next configured page size, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let next = self
            .page_size_options
            .iter()
            .position(|&n| n == self.page_size)
            .map(|i| self.page_size_options[(i + 1) % self.page_size_options.len()])
            .unwrap_or(self.page_size_options[0]);
        self.set_page_size(next);
    }

    /// Move to `page` if it is within `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        let total = self.total_pages(len);
        if page >= 1 && page <= total && page != self.page {
            self.page = page;
            return true;
        }
        false
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.go_to(self.page + 1, len)
    }

    pub fn prev(&mut self, len: usize) -> bool {
        self.go_to(self.page.saturating_sub(1), len)
    }

    pub fn first(&mut self, len: usize) -> bool {
        self.go_to(1, len)
    }

    pub fn last(&mut self, len: usize) -> bool {
        self.go_to(self.total_pages(len), len)
    }

    /// Parse "go to page" input. Only integers within range are accepted.
    pub fn jump(&mut self, input: &str, len: usize) -> bool {
        match input.trim().parse::<usize>() {
            Ok(page) => self.go_to(page, len),
            Err(_) => false,
        }
    }

    pub fn slice<'a, R>(&self, rows: &'a [R]) -> &'a [R] {
        paginate(rows, self.page, self.page_size).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        group: &'static str,
    }

    impl Row for Item {
        fn cell(&self, accessor: &str) -> CellValue {
            match accessor {
                "id" => CellValue::Int(self.id),
                _ => CellValue::Text(self.group.to_string()),
            }
        }
    }

    fn items(n: i64) -> Vec<Item> {
        (1..=n)
            .map(|id| Item { id, group: if id % 2 == 0 { "even" } else { "odd" } })
            .collect()
    }

    fn ids(rows: &[Item]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let mut sort = SortState::default();
        sort.toggle("id");
        assert_eq!(sort.direction, SortDirection::Ascending);
        sort.toggle("id");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle("id");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_column_resets_ascending() {
        let mut sort = SortState::default();
        sort.toggle("id");
        sort.toggle("id");
        sort.toggle("group");
        assert_eq!(sort.column.as_deref(), Some("group"));
        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(sort.direction_for("id"), None);
    }

    #[test]
    fn test_sort_without_column_keeps_order() {
        let rows = vec![items(3)[2].clone(), items(3)[0].clone()];
        assert_eq!(ids(&sort_rows(&rows, &SortState::default())), vec![3, 1]);
    }

    #[test]
    fn test_sort_descending() {
        let sort = SortState { column: Some("id".into()), direction: SortDirection::Descending };
        assert_eq!(ids(&sort_rows(&items(4), &sort)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let rows = items(6);
        let asc = SortState { column: Some("group".into()), direction: SortDirection::Ascending };
        assert_eq!(ids(&sort_rows(&rows, &asc)), vec![2, 4, 6, 1, 3, 5]);
        let desc = SortState { column: Some("group".into()), direction: SortDirection::Descending };
        assert_eq!(ids(&sort_rows(&rows, &desc)), vec![1, 3, 5, 2, 4, 6]);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let rows = items(45);
        let page = paginate(&rows, 5, 10).unwrap();
        assert_eq!(ids(page), vec![41, 42, 43, 44, 45]);
        assert_eq!(total_pages(rows.len(), 10), 5);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let rows = items(45);
        assert!(paginate(&rows, 6, 10).unwrap().is_empty());
        assert!(paginate(&rows, 0, 10).unwrap().is_empty());
        assert!(paginate(&rows, usize::MAX, 10).unwrap().is_empty());
    }

    #[test]
    fn test_paginate_rejects_zero_page_size() {
        assert_eq!(paginate(&items(3), 1, 0), Err(TableError::ZeroPageSize));
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn test_pages_reassemble_sorted_input() {
        let sort = SortState { column: Some("group".into()), direction: SortDirection::Descending };
        let sorted = sort_rows(&items(23), &sort);
        for size in 1..=25 {
            let mut rebuilt = Vec::new();
            for page in 1..=total_pages(sorted.len(), size) {
                rebuilt.extend_from_slice(paginate(&sorted, page, size).unwrap());
            }
            assert_eq!(rebuilt, sorted, "page size {size}");
        }
    }

    #[test]
    fn test_item_range() {
        assert_eq!(item_range(1, 10, 45), Some((1, 10)));
        assert_eq!(item_range(5, 10, 45), Some((41, 45)));
        assert_eq!(item_range(6, 10, 45), None);
        assert_eq!(item_range(1, 10, 0), None);
    }

    #[test]
    fn test_page_window() {
        use PageToken::{Ellipsis, Page};
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(2, 9), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]);
        assert_eq!(page_window(8, 9), vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]);
        assert_eq!(
            page_window(5, 9),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_pager_navigation_stays_in_range() {
        let mut pager = Pager::default();
        assert!(!pager.prev(45));
        assert!(pager.next(45));
        assert_eq!(pager.page, 2);
        assert!(pager.last(45));
        assert_eq!(pager.page, 5);
        assert!(!pager.next(45));
        assert!(pager.first(45));
        assert_eq!(pager.page, 1);
    }

    #[test]
    fn test_pager_page_size_change_resets_page() {
        let mut pager = Pager::default();
        pager.last(45);
        pager.set_page_size(20);
        assert_eq!(pager.page, 1);
        assert_eq!(pager.total_pages(45), 3);
        pager.set_page_size(0);
        assert_eq!(pager.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_pager_cycle_page_size_wraps() {
        let mut pager = Pager::new(20, vec![5, 10, 20, 50]);
        pager.cycle_page_size();
        assert_eq!(pager.page_size, 50);
        pager.cycle_page_size();
        assert_eq!(pager.page_size, 5);
    }

    #[test]
    fn test_pager_jump_validates_input() {
        let mut pager = Pager::default();
        assert!(pager.jump(" 3 ", 45));
        assert_eq!(pager.page, 3);
        assert!(!pager.jump("9", 45));
        assert!(!pager.jump("abc", 45));
        assert!(!pager.jump("0", 45));
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn test_pager_new_sanitizes_options() {
        let pager = Pager::new(0, vec![0, 0]);
        assert_eq!(pager.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(pager.page_size_options, DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    }

    #[test]
    fn test_cell_value_display() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(CellValue::Date(date).to_string(), "1/7/2025");
        assert_eq!(CellValue::Int(12).to_string(), "12");
    }

    #[test]
    fn test_column_render_override() {
        let plain: Column<Item> = Column::new("ID", "id");
        let custom: Column<Item> = Column::new("Group", "group").render_with(|r| r.group.to_uppercase());
        let item = Item { id: 7, group: "odd" };
        assert_eq!(plain.cell_text(&item), "7");
        assert_eq!(custom.cell_text(&item), "ODD");
    }
}
