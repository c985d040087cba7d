//! Plain-text tables

use std::fmt::Write;

/// Cell text for a missing value
pub const EMPTY_CELL: &str = "-";

/// A rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Cells(Vec<String>),
    /// Single cell spanning `colspan` columns, shown when there is no data
    Placeholder { text: String, colspan: usize },
}

/// Table with fixed columns and a "no records" placeholder
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    placeholder: String,
}

impl Table {
    pub fn new(columns: &[&str], placeholder: &str) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            placeholder: placeholder.to_string(),
        }
    }

    /// Append a row. Short rows are padded with empty cells, extra cells are dropped.
    pub fn push(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Body rows as displayed
    pub fn rows(&self) -> Vec<TableRow> {
        if self.rows.is_empty() {
            return vec![TableRow::Placeholder {
                text: self.placeholder.clone(),
                colspan: self.columns.len(),
            }];
        }
        self.rows.iter().cloned().map(TableRow::Cells).collect()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        if self.rows.is_empty() {
            // Widen the last column so the placeholder fits across the table
            let inner = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
            let needed = self.placeholder.chars().count();
            if let Some(last) = widths.last_mut() {
                *last += needed.saturating_sub(inner);
            }
        }

        let separator = format!(
            "+{}+",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );

        let mut out = String::new();
        let _ = writeln!(out, "{}", separator);
        let _ = writeln!(out, "{}", format_cells(&self.columns, &widths));
        let _ = writeln!(out, "{}", separator);
        for row in self.rows() {
            match row {
                TableRow::Cells(cells) => {
                    let _ = writeln!(out, "{}", format_cells(&cells, &widths));
                }
                TableRow::Placeholder { text, .. } => {
                    let span = separator.chars().count().saturating_sub(4);
                    let _ = writeln!(out, "| {} |", center(&text, span));
                }
            }
        }
        let _ = write!(out, "{}", separator);
        out
    }
}

fn format_cells(cells: &[String], widths: &[usize]) -> String {
    let body = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {} |", body)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    pad(&format!("{}{}", " ".repeat(left), text), width)
}

/// Text of an optional value, `-` when absent
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_spanning_placeholder() {
        let table = Table::new(&["ID", "Nom", "Prénom"], "No members found.");
        assert_eq!(
            table.rows(),
            vec![TableRow::Placeholder {
                text: "No members found.".to_string(),
                colspan: 3
            }]
        );

        let rendered = table.render();
        assert!(rendered.contains("No members found."));
        let lines: Vec<&str> = rendered.lines().collect();
        // Every line, the placeholder included, spans the full table width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_rows_are_aligned() {
        let mut table = Table::new(&["ID", "Title"], "No books found.");
        table.push(vec!["1".to_string(), "Clean Code".to_string()]);
        table.push(vec!["12".to_string(), "Refactoring".to_string()]);

        assert_eq!(table.rows().len(), 2);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(rendered.contains("| 12 | Refactoring"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(&["A", "B", "C"], "none");
        table.push(vec!["x".to_string()]);
        assert_eq!(
            table.rows(),
            vec![TableRow::Cells(vec!["x".to_string(), String::new(), String::new()])]
        );
    }

    #[test]
    fn test_table_without_columns_renders_placeholder() {
        let table = Table::new(&[], "Nothing to show.");
        let out = table.render();
        assert!(out.contains("Nothing to show."));
        assert_eq!(
            table.rows(),
            vec![TableRow::Placeholder {
                text: "Nothing to show.".to_string(),
                colspan: 0
            }]
        );
    }

    #[test]
    fn test_cell_fallback() {
        assert_eq!(cell(Some("abc")), "abc");
        assert_eq!(cell(Some("")), "-");
        assert_eq!(cell::<i64>(None), "-");
        assert_eq!(cell(Some(3)), "3");
    }
}
