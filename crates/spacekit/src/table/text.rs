//! Plain-text table rendering.
//!
//! Columns get their natural width (widest cell or header). When the total
//! doesn't fit, the widest columns are capped first so narrow columns stay
//! intact, and overflowing cells are truncated with an ellipsis.

use console::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::TableModel;

const SEPARATOR: &str = "  ";
const RULE: char = '─';

pub(super) fn render(model: &TableModel, max_width: usize, use_color: bool) -> String {
    let columns = model.num_columns();
    if columns == 0 {
        return String::new();
    }

    let header: Vec<&str> = model
        .header()
        .iter()
        .map(|name| name.as_deref().unwrap_or(""))
        .collect();
    let mut natural: Vec<usize> = header.iter().map(|name| name.width()).collect();
    for row in model.rows() {
        for (i, cell) in row.iter().enumerate() {
            natural[i] = natural[i].max(cell.width());
        }
    }

    let overhead = SEPARATOR.len() * (columns - 1);
    let widths = resolve_widths(&natural, max_width.saturating_sub(overhead));

    let mut lines = Vec::with_capacity(model.rows().len() + 2);
    if model.header().iter().any(Option::is_some) {
        let line = join_cells(header.iter().copied(), &widths);
        lines.push(if use_color {
            Style::new()
                .bold()
                .force_styling(true)
                .apply_to(line)
                .to_string()
        } else {
            line
        });
        lines.push(
            widths
                .iter()
                .map(|w| RULE.to_string().repeat(*w))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
        );
    }
    for row in model.rows() {
        lines.push(join_cells(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| fit(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    line.trim_end().to_string()
}

fn fit(cell: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = truncate_to_width(cell, width);
    let padding = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(padding));
    out
}

/// Fits natural column widths into `available` display columns.
///
/// Widths are returned unchanged when they fit. Otherwise every column is
/// capped at the largest common limit that fits, and leftover space goes
/// one column at a time to the capped columns, left to right.
///
/// # Example
///
/// ```rust
/// use spacekit::table::resolve_widths;
///
/// assert_eq!(resolve_widths(&[4, 10, 30], 100), vec![4, 10, 30]);
/// assert_eq!(resolve_widths(&[4, 10, 30], 25), vec![4, 10, 11]);
/// ```
pub fn resolve_widths(natural: &[usize], available: usize) -> Vec<usize> {
    let total: usize = natural.iter().sum();
    if total <= available {
        return natural.to_vec();
    }

    let capped_total = |cap: usize| natural.iter().map(|w| (*w).min(cap)).sum::<usize>();

    // Largest cap whose total still fits; capped_total(0) == 0 always fits.
    let (mut low, mut high) = (0usize, natural.iter().copied().max().unwrap_or(0));
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if capped_total(mid) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut widths: Vec<usize> = natural.iter().map(|w| (*w).min(low)).collect();
    let mut remaining = available - capped_total(low);
    for (width, natural) in widths.iter_mut().zip(natural) {
        if remaining == 0 {
            break;
        }
        if *natural > *width {
            *width += 1;
            remaining -= 1;
        }
    }
    widths
}

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
/// If the string fits within `max_width`, it is returned unchanged.
///
/// # Example
///
/// ```rust
/// use spacekit::table::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> TableModel {
        TableModel::new(
            vec![Some("Name".into()), Some("Email".into())],
            vec![
                vec!["Aria Stark".into(), "ari@stark.com".into()],
                vec!["Sansa".into(), "sans@stark.com".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_text_natural_widths() {
        let text = users().to_text(80, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name        Email");
        assert_eq!(lines[1], format!("{}  {}", "─".repeat(10), "─".repeat(14)));
        assert_eq!(lines[2], "Aria Stark  ari@stark.com");
        assert_eq!(lines[3], "Sansa       sans@stark.com");
    }

    #[test]
    fn test_text_truncates_to_width() {
        let text = users().to_text(20, false);
        for line in text.lines() {
            assert!(line.width() <= 20, "{:?} is too wide", line);
        }
        assert!(text.contains("Aria Sta…  ari@star…"));
    }

    #[test]
    fn test_text_without_header_names() {
        let model = TableModel::new(vec![None], vec![vec!["x".into()]]).unwrap();
        assert_eq!(model.to_text(80, false), "x");
    }

    #[test]
    fn test_text_colored_header() {
        let text = users().to_text(80, true);
        assert!(text.starts_with("\x1b[1m"));
    }

    #[test]
    fn test_text_no_columns() {
        let model = TableModel::new(vec![], vec![]).unwrap();
        assert_eq!(model.to_text(80, false), "");
    }

    #[test]
    fn test_resolve_caps_widest_first() {
        assert_eq!(resolve_widths(&[10, 14], 18), vec![9, 9]);
        assert_eq!(resolve_widths(&[3, 20, 20], 20), vec![3, 9, 8]);
    }

    #[test]
    fn test_resolve_zero_available() {
        assert_eq!(resolve_widths(&[5, 5], 0), vec![0, 0]);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello World", 7), "Hello …");
        assert_eq!(truncate_to_width("12345", 5), "12345");
        assert_eq!(truncate_to_width("123456", 5), "1234…");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }
}
