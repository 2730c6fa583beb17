//! Output rendering
//!
//! Plain-text tables and the fixed messages the shell prints.

use crate::store::Store;

pub const NO_STOCK: &str = "No shoes are in stock...";
pub const NOT_FOUND: &str = "The shoe has not been found...";
pub const INVALID_ENTRY: &str = "This entry is invalid...Please try again...";
pub const MISSING_FILE: &str = "Inventory file does not exist. Please contact Support.";

const INVENTORY_HEADERS: [&str; 5] = ["Country", "Code", "Product", "Cost", "Quantity"];
const VALUE_HEADER: &str = "Value (Cost x Quantity)";

/// Column-aligned text table
///
/// Columns whose cells are all numeric are right-aligned, the rest are
/// left-aligned. A dashed rule separates the header from the rows.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty, extra cells are dropped
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let columns = self.headers.len();

        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| cell(row, col).chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let numeric: Vec<bool> = (0..columns)
            .map(|col| {
                !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| cell(row, col).parse::<u64>().is_ok())
            })
            .collect();

        let format_line = |cells: &dyn Fn(usize) -> String| -> String {
            (0..columns)
                .map(|col| {
                    let text = cells(col);
                    if numeric[col] {
                        format!("{:>width$}", text, width = widths[col])
                    } else {
                        format!("{:<width$}", text, width = widths[col])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_line(&|col| self.headers[col].clone()));
        lines.push(
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            lines.push(format_line(&|col| cell(row, col).to_string()));
        }

        lines.join("\n")
    }
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Table of every record, optionally with its stock value
pub fn inventory_table(store: &Store, with_value: bool) -> String {
    let mut headers: Vec<&str> = INVENTORY_HEADERS.to_vec();
    if with_value {
        headers.push(VALUE_HEADER);
    }

    let mut table = Table::new(headers);
    for (record, value) in store.with_values() {
        let mut row = vec![
            record.country.clone(),
            record.code.clone(),
            record.product.clone(),
            record.cost.to_string(),
            record.quantity.to_string(),
        ];
        if with_value {
            row.push(value.to_string());
        }
        table.push_row(row);
    }

    table.render()
}

/// Card for the first record with `code`, or the not-found message
pub fn search_report(store: &Store, code: &str) -> String {
    match store.find_by_code(code) {
        Some(record) => record.to_string(),
        None => NOT_FOUND.to_string(),
    }
}

/// Card for the lowest-quantity record, or the empty-store message
pub fn lowest_report(store: &Store) -> String {
    match store.lowest_quantity().and_then(|index| store.get(index)) {
        Some(record) => format!("Shoe with the lowest quantity:\n{}", record),
        None => NO_STOCK.to_string(),
    }
}

/// Card for the highest-quantity record, or the empty-store message
pub fn highest_report(store: &Store) -> String {
    match store.highest_quantity().and_then(|index| store.get(index)) {
        Some(record) => format!("Shoe to be put on sale:\n{}", record),
        None => NO_STOCK.to_string(),
    }
}
