//! Plain-text table rendering for the verification dump.
//!
//! Output resembles a data-frame print: a zero-based row index on the left,
//! every column right-aligned to its widest cell, NULL shown as `None`.

use std::fmt;

use bookseed_db::models::{Author, Publisher};

const NULL: &str = "None";
const GAP: &str = "  ";

/// A rectangular text table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render as NULL, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| cell_text(&row[i]).chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn cell_text(cell: &Option<String>) -> &str {
    cell.as_deref().unwrap_or(NULL)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "Empty table")?;
            return writeln!(f, "Columns: [{}]", self.headers.join(", "));
        }

        let index_width = (self.rows.len() - 1).to_string().len();
        let widths = self.column_widths();

        write!(f, "{:index_width$}", "")?;
        for (header, &width) in self.headers.iter().zip(&widths) {
            write!(f, "{GAP}{header:>width$}")?;
        }
        writeln!(f)?;

        for (index, row) in self.rows.iter().enumerate() {
            write!(f, "{index:<index_width$}")?;
            for (cell, &width) in row.iter().zip(&widths) {
                write!(f, "{GAP}{:>width$}", cell_text(cell))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Render publishers in schema column order.
pub fn publishers_table(publishers: &[Publisher]) -> Table {
    let mut table = Table::new(["publisher_id", "name"]);
    for p in publishers {
        table.push_row(vec![Some(p.publisher_id.to_string()), Some(p.name.clone())]);
    }
    table
}

/// Render authors in schema column order.
pub fn authors_table(authors: &[Author]) -> Table {
    let mut table = Table::new(["author_id", "first_name", "middle_name", "last_name"]);
    for a in authors {
        table.push_row(vec![
            Some(a.author_id.to_string()),
            Some(a.first_name.clone()),
            a.middle_name.clone(),
            a.last_name.clone(),
        ]);
    }
    table
}
