/*!
format.rs

Human-output helpers for the `list` subcommand: ANSI color roles and a plain
column table. JSON output paths never go through here.

Color is on by default and disabled when `NO_COLOR` is set. Width comes from
`COLUMNS` (clamped 40..=220, default 100).
*/

use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub term_width: usize,
}

impl StyleOptions {
    pub fn detect() -> Self {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);
        StyleOptions {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            term_width: width,
        }
    }

    pub fn plain(term_width: usize) -> Self {
        StyleOptions {
            use_color: false,
            term_width,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Primary,
    Accent,
    Dim,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Primary => "38;5;45",
        Role::Accent => "38;5;213",
        Role::Dim => "2",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

/// Render rows under a header line, columns separated by two spaces. The last
/// column absorbs any width overflow and is truncated with an ellipsis.
pub fn table(headers: &[&str], rows: &[Vec<String>], style: &StyleOptions) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let fixed: usize = widths[..cols - 1].iter().sum::<usize>() + (cols - 1) * 2;
    widths[cols - 1] = widths[cols - 1].min(style.term_width.saturating_sub(fixed).max(8));

    let mut out = String::new();
    out.push_str(&color(Role::Accent, render_row(headers, &widths), style));
    out.push('\n');
    let sep = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&color(Role::Dim, sep, style));
    for row in rows {
        out.push('\n');
        let cells: Vec<&str> = (0..cols)
            .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        out.push_str(&render_row(&cells, &widths));
    }
    out
}

fn render_row(cells: &[&str], widths: &[usize]) -> String {
    let last = widths.len() - 1;
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (c, w))| {
            let cell = fit(c, *w);
            if i == last {
                cell.trim_end().to_string()
            } else {
                cell.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Pad to `width`, or truncate with a trailing ellipsis.
fn fit(s: &str, width: usize) -> Cow<'_, str> {
    let len = s.chars().count();
    if len == width {
        return Cow::Borrowed(s);
    }
    if len < width {
        return Cow::Owned(format!("{s}{}", " ".repeat(width - len)));
    }
    if width <= 1 {
        return Cow::Borrowed("…");
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_table_layout() {
        let style = StyleOptions::plain(100);
        let t = table(
            &["NAME", "DESC"],
            &[
                vec!["vagrant_up".into(), "Start".into()],
                vec!["x".into(), "y".into()],
            ],
            &style,
        );
        let lines: Vec<_> = t.lines().collect();
        assert_eq!(lines[0], "NAME        DESC");
        assert_eq!(lines[1], "----------  -----");
        assert_eq!(lines[2], "vagrant_up  Start");
        assert_eq!(lines[3], "x           y");
    }

    #[test]
    fn last_column_truncates_to_width() {
        let style = StyleOptions::plain(40);
        let long = "d".repeat(100);
        let t = table(&["N", "D"], &[vec!["n".into(), long]], &style);
        let row = t.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn color_respects_style() {
        let plain = StyleOptions::plain(80);
        assert_eq!(color(Role::Primary, "x", &plain), "x");
        let colored = StyleOptions {
            use_color: true,
            term_width: 80,
        };
        assert!(color(Role::Primary, "x", &colored).starts_with("\x1b["));
    }
}
