use wcag_core::Theme;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
    pub theme: Theme,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, None))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let style = if options.color {
                    cell_style(&truncated, options.theme)
                } else {
                    None
                };
                pad(&truncated, *width, style)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 4;

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, style: Option<&str>) -> String {
    let padding = " ".repeat(width.saturating_sub(value.chars().count()));
    match style {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m{padding}"),
        None => format!("{value}{padding}"),
    }
}

/// SGR code for a cell under `theme`. High contrast never uses hue.
#[must_use]
pub fn cell_style(value: &str, theme: Theme) -> Option<&'static str> {
    let kind = match value.to_ascii_lowercase().as_str() {
        "a" => Kind::LevelA,
        "aa" => Kind::LevelAa,
        "aaa" => Kind::LevelAaa,
        "ok" | "connected" | "true" | "authenticated" | "admin" => Kind::Good,
        "disconnected" | "false" | "error" => Kind::Bad,
        _ => return None,
    };
    Some(match (theme, kind) {
        (Theme::Light, Kind::LevelA) => "34",
        (Theme::Light, Kind::LevelAa) => "32",
        (Theme::Light, Kind::LevelAaa) => "35",
        (Theme::Light, Kind::Good) => "32",
        (Theme::Light, Kind::Bad) => "31",
        (Theme::Dark, Kind::LevelA) => "94",
        (Theme::Dark, Kind::LevelAa) => "92",
        (Theme::Dark, Kind::LevelAaa) => "95",
        (Theme::Dark, Kind::Good) => "92",
        (Theme::Dark, Kind::Bad) => "91",
        (Theme::HighContrast, Kind::LevelA | Kind::Good) => "1",
        (Theme::HighContrast, Kind::LevelAa) => "1;4",
        (Theme::HighContrast, Kind::LevelAaa | Kind::Bad) => "7",
    })
}

#[derive(Clone, Copy)]
enum Kind {
    LevelA,
    LevelAa,
    LevelAaa,
    Good,
    Bad,
}
