use crate::core::{StatsReporter, StatsTable};

pub const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders stats as a bordered ASCII table with the title in the top border:
///
/// ```text
/// +HeadHunter Moscow-----+-----------------+---------------------+----------------+
/// | Programming language | Vacancies found | Vacancies processed | Average salary |
/// +----------------------+-----------------+---------------------+----------------+
/// | Go                   | 10              | 1                   | 150000         |
/// +----------------------+-----------------+---------------------+----------------+
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTableReporter;

impl StatsReporter for AsciiTableReporter {
    fn render(&self, table: &StatsTable, title: &str) -> String {
        render(table, title)
    }
}

pub fn render(table: &StatsTable, title: &str) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(table.len() + 1);
    rows.push(HEADER.map(String::from));
    for (language, stats) in table {
        rows.push([
            language.clone(),
            stats.found.to_string(),
            stats.processed.to_string(),
            stats
                .average_salary
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(title_line(&border, title));
    for (index, row) in rows.iter().enumerate() {
        lines.push(row_line(row, &widths));
        if index == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);

    lines.join("\n")
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

// 標題放不下時退回一般邊框
fn title_line(border: &str, title: &str) -> String {
    let title_width = title.chars().count();
    if title.is_empty() || title_width + 2 > border.len() {
        return border.to_string();
    }
    format!("+{}{}", title, &border[1 + title_width..])
}

fn row_line(row: &[String; 4], widths: &[usize; 4]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("| {} |", cells.join(" | "))
}
