//! A generic data table.
//!
//! A [`Table`] is a list of [`Column`]s, each holding an optional header
//! name and a projection from a row to its cell text. Projecting a slice of
//! rows produces a [`TableModel`], which can be rendered as HTML markup or
//! as aligned plain text.
//!
//! # Example
//!
//! ```rust
//! use spacekit::table::{Column, Table};
//!
//! struct User { name: &'static str, added: &'static str }
//!
//! let table = Table::new()
//!     .column(Column::new(|user: &User, _, _| user.name.to_string()).named("Name"))
//!     .column(Column::new(|user: &User, _, _| user.added.to_string()).named("Date Added"));
//!
//! let users = [User { name: "Aria", added: "05/25/2019" }];
//! let model = table.cells(&users);
//!
//! assert_eq!(model.rows()[0], vec!["Aria".to_string(), "05/25/2019".to_string()]);
//! ```
//!
//! Tables hold no state; rendering the same rows twice gives the same output.

mod html;
mod text;

use std::fmt;

pub use text::{resolve_widths, truncate_to_width};

/// Error from building or rendering a table model.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A body row does not have one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The markup template failed to render.
    #[error("failed to render table markup: {0}")]
    Render(#[from] minijinja::Error),
}

type Projection<Row> = Box<dyn Fn(&Row, usize, &[Row]) -> String + Send + Sync>;

/// One column: an optional header and a projection from row to cell text.
///
/// The projection receives the row, the row's index and the full row slice.
pub struct Column<Row> {
    name: Option<String>,
    render: Projection<Row>,
}

impl<Row> Column<Row> {
    /// Creates an unnamed column.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Row, usize, &[Row]) -> String + Send + Sync + 'static,
    {
        Self {
            name: None,
            render: Box::new(render),
        }
    }

    /// Sets the header text.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<Row> fmt::Debug for Column<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A list of columns over rows of type `Row`.
#[derive(Debug)]
pub struct Table<Row> {
    columns: Vec<Column<Row>>,
}

impl<Row> Table<Row> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Appends a column, returning the table for chaining.
    pub fn column(mut self, column: Column<Row>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(&self) -> &[Column<Row>] {
        &self.columns
    }

    /// Projects every row through every column.
    pub fn cells(&self, rows: &[Row]) -> TableModel {
        let header = self.columns.iter().map(|c| c.name.clone()).collect();
        let body = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                self.columns
                    .iter()
                    .map(|column| (column.render)(row, index, rows))
                    .collect()
            })
            .collect();
        TableModel { header, rows: body }
    }
}

impl<Row> Default for Table<Row> {
    fn default() -> Self {
        Self::new()
    }
}

/// Header and body cells, one cell per column in every row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TableModel {
    header: Vec<Option<String>>,
    rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Builds a model from already projected cells.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ArityMismatch`] for the first row whose length
    /// differs from the header's.
    pub fn new(header: Vec<Option<String>>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != header.len())
        {
            return Err(TableError::ArityMismatch {
                row,
                expected: header.len(),
                found: cells.len(),
            });
        }
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[Option<String>] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// Renders `<table>` markup with every cell HTML-escaped.
    pub fn to_html(&self) -> Result<String, TableError> {
        html::render(self)
    }

    /// Renders aligned plain text no wider than `max_width` columns.
    ///
    /// The header is bold when `use_color` is set.
    pub fn to_text(&self, max_width: usize, use_color: bool) -> String {
        text::render(self, max_width, use_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User {
        name: &'static str,
        email: &'static str,
    }

    fn users() -> Vec<User> {
        vec![
            User {
                name: "Aria Stark",
                email: "ari@stark.com",
            },
            User {
                name: "Sansa Stark",
                email: "sans@stark.com",
            },
        ]
    }

    #[test]
    fn test_cells_one_per_column() {
        let table = Table::new()
            .column(Column::new(|u: &User, _, _| u.name.to_string()).named("Name"))
            .column(Column::new(|u: &User, _, _| u.email.to_string()));
        let model = table.cells(&users());

        assert_eq!(model.header(), &[Some("Name".to_string()), None]);
        assert_eq!(model.rows().len(), 2);
        assert!(model.rows().iter().all(|r| r.len() == 2));
        assert_eq!(model.rows()[1][1], "sans@stark.com");
    }

    #[test]
    fn test_projection_gets_row_index_and_rows() {
        let table = Table::new()
            .column(Column::new(|_: &User, index, all| format!("{}/{}", index + 1, all.len())));
        let model = table.cells(&users());
        assert_eq!(model.rows()[0][0], "1/2");
        assert_eq!(model.rows()[1][0], "2/2");
    }

    #[test]
    fn test_empty_rows() {
        let table = Table::new().column(Column::new(|u: &User, _, _| u.name.to_string()));
        let model = table.cells(&[]);
        assert_eq!(model.num_columns(), 1);
        assert!(model.rows().is_empty());
    }

    #[test]
    fn test_model_rejects_ragged_rows() {
        let result = TableModel::new(
            vec![Some("a".into()), Some("b".into())],
            vec![vec!["1".into(), "2".into()], vec!["3".into()]],
        );
        match result {
            Err(TableError::ArityMismatch {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected arity mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_column_debug_omits_projection() {
        let column = Column::new(|u: &User, _, _| u.name.to_string()).named("Name");
        assert!(format!("{:?}", column).contains("Name"));
    }
}
