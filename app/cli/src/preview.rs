//! FILENAME: app/cli/src/preview.rs
// PURPOSE: Plain-text preview of the first rows of a table.

use engine::Table;

/// Cells wider than this are cut and marked with '~'.
const MAX_CELL_WIDTH: usize = 24;

/// Renders the header and up to `max_rows` rows as aligned text.
pub fn render(title: &str, table: &Table, max_rows: usize) -> String {
    let head = table.head(max_rows);

    let header: Vec<String> = head.columns().iter().map(|c| clip(c)).collect();
    let body: Vec<Vec<String>> = head
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| clip(&cell.display_value())).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let mut out = format!(
        "{} ({} rows x {} columns)\n",
        title,
        table.row_count(),
        table.column_count()
    );
    out.push_str(&format_line(&header, &widths));
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &body {
        out.push_str(&format_line(row, &widths));
    }
    if table.row_count() > head.row_count() {
        out.push_str(&format!("... {} more rows\n", table.row_count() - head.row_count()));
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let mut line = padded.join(" | ");
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('~');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::CellValue;

    fn sample() -> Table {
        let mut table = Table::new(["PRN", "CNAME"]);
        table.push_row(vec![CellValue::from(101.0), CellValue::from("Asha")]);
        table.push_row(vec![CellValue::from(102.0), CellValue::from("Bilal Qureshi")]);
        table.push_row(vec![CellValue::from(103.0), CellValue::Empty]);
        table
    }

    #[test]
    fn renders_aligned_rows() {
        let text = render("Result file", &sample(), 2);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Result file (3 rows x 2 columns)");
        assert_eq!(lines[1], "PRN | CNAME");
        assert_eq!(lines[2], "----+--------------");
        assert_eq!(lines[3], "101 | Asha");
        assert_eq!(lines[4], "102 | Bilal Qureshi");
        assert_eq!(lines[5], "... 1 more rows");
    }

    #[test]
    fn long_cells_are_clipped() {
        let clipped = clip("Bachelor of Science in Applied Physics");
        assert_eq!(clipped.chars().count(), MAX_CELL_WIDTH);
        assert!(clipped.ends_with('~'));
        assert_eq!(clip("short"), "short");
    }

    #[test]
    fn empty_table_renders_header_only() {
        let table = Table::new(["StudentId"]);
        let text = render("Processed data", &table, 5);
        assert_eq!(text.lines().count(), 3);
    }
}
