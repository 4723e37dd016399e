//! Plain-text rendering of a [`TableView`].
//!
//! Produces one string per line: the header, the visible rows, one blank
//! line per filler row, and the pager. Cells are fixed width and measured in
//! terminal columns, so wide (e.g. Hangul) text lines up.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::table::TableView;

const SEPARATOR: &str = " | ";
const CHECKBOX_WIDTH: usize = 3;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of every data column in terminal columns.
    pub column_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { column_width: 16 }
    }
}

/// Render the view as text lines.
///
/// # Example
///
/// ```
/// use cohort_lib::render::{RenderOptions, render_table};
/// use cohort_lib::{Column, Row, TableController};
///
/// let table = TableController::new(vec![Column::new("No.", "id").sortable()], vec![Row::new(1)]);
/// let lines = render_table(&table.view(), RenderOptions::default());
///
/// assert_eq!(lines.len(), 1 + 10 + 1);
/// assert!(lines[0].starts_with("No. ▲"));
/// assert_eq!(lines.last().unwrap(), "  Prev  1 / 1  Next  ");
/// ```
pub fn render_table(view: &TableView<'_>, options: RenderOptions) -> Vec<String> {
    let width = options.column_width;
    let mut lines = Vec::with_capacity(view.visible_rows.len() + view.filler_rows + 2);

    let mut header = Vec::with_capacity(view.columns.len() + 1);
    if view.selectable {
        header.push(checkbox(view.all_on_page_selected).to_string());
    }
    for column in view.columns {
        let label = match view.indicator(column) {
            Some(indicator) => format!("{} {}", column.label, indicator.glyph()),
            None => column.label.clone(),
        };
        header.push(fit(&label, width));
    }
    lines.push(header.join(SEPARATOR));

    for row in view.visible_rows {
        let mut cells = Vec::with_capacity(view.columns.len() + 1);
        if view.selectable {
            cells.push(checkbox(view.is_selected(row)).to_string());
        }
        for column in view.columns {
            let text = row.get(&column.key).map(|v| v.as_text()).unwrap_or_default();
            cells.push(fit(&text, width));
        }
        lines.push(cells.join(SEPARATOR));
    }

    let mut blank = Vec::with_capacity(view.columns.len() + 1);
    if view.selectable {
        blank.push(" ".repeat(CHECKBOX_WIDTH));
    }
    blank.extend(view.columns.iter().map(|_| " ".repeat(width)));
    let blank = blank.join(SEPARATOR);
    lines.extend(std::iter::repeat_n(blank, view.filler_rows));

    lines.push(pager(view));
    lines
}

/// Pager line. Disabled controls drop their arrow.
pub fn pager(view: &TableView<'_>) -> String {
    let prev = if view.has_prev() { "< Prev" } else { "  Prev" };
    let next = if view.has_next() { "Next >" } else { "Next  " };
    format!(
        "{}  {} / {}  {}",
        prev, view.current_page, view.total_pages, next
    )
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Truncate to `width` with an ellipsis, then pad with spaces to `width`.
fn fit(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}
