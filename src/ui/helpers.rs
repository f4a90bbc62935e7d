use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table, Widget};

/// Blank columns between adjacent table cells.
pub(crate) const COLUMN_SPACING: u16 = 2;

/// Lay out `rows` under `header` with ratatui's table widget, rendering into an
/// off-screen buffer, and return the text lines with trailing padding removed.
/// A dashed rule matching each column width separates the header from the rows.
pub(crate) fn render_table(header: Vec<String>, rows: Vec<Vec<String>>, widths: &[u16]) -> Vec<String> {
    if widths.is_empty() {
        return Vec::new();
    }

    let width = table_width(widths);
    let height = rows.len() as u16 + 2;
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);

    let rule = Row::new(widths.iter().map(|w| "-".repeat(*w as usize)));
    let body = std::iter::once(rule).chain(rows.into_iter().map(Row::new));
    let table = Table::new(body, widths.iter().map(|w| Constraint::Length(*w)))
        .header(Row::new(header))
        .column_spacing(COLUMN_SPACING);
    table.render(area, &mut buffer);

    buffer
        .content
        .chunks(width as usize)
        .map(|cells| {
            let line: String = cells.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Total rendered width of a table with the given column widths.
pub(crate) fn table_width(widths: &[u16]) -> u16 {
    let spacing = COLUMN_SPACING * widths.len().saturating_sub(1) as u16;
    widths.iter().sum::<u16>() + spacing
}

/// Horizontal rule made of `=` characters.
pub(crate) fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Boxed section title in the style of the console menus.
pub(crate) fn heading(title: &str) -> Vec<String> {
    const WIDTH: usize = 44;
    let padding = WIDTH.saturating_sub(title.len()) / 2;
    vec![
        rule(WIDTH),
        format!("{}{}", " ".repeat(padding), title),
        rule(WIDTH),
    ]
}
