//! Tabular rendering of relation matrices.
//!
//! Rows and columns are labelled with domain values in ascending order. Cells
//! are right-aligned under their column label and separated by a configurable
//! gap; row labels are left-aligned and padded to the widest label:
//!
//! ```text
//!    1  2  3
//! 1  1  1  1
//! 2  0  1  1
//! 3  0  0  1
//! ```

use std::fmt;

use crate::matrix::RelationMatrix;

/// Configuration options for table rendering.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Number of spaces between columns (default: 2)
    pub gap: usize,
    /// Cell text for related pairs (default: "1")
    pub one: &'static str,
    /// Cell text for unrelated pairs (default: "0")
    pub zero: &'static str,
    /// Line printed instead of an empty table
    pub empty: &'static str,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            gap: 2,
            one: "1",
            zero: "0",
            empty: "Empty relation",
        }
    }
}

/// A [`RelationMatrix`] formatted as a table, see [`RelationMatrix::table`].
#[derive(Debug, Clone)]
pub struct Table<'a> {
    matrix: &'a RelationMatrix,
    config: TableConfig,
}

impl RelationMatrix {
    pub fn table(&self) -> Table<'_> {
        self.table_with_config(TableConfig::default())
    }

    pub fn table_with_config(&self, config: TableConfig) -> Table<'_> {
        Table { matrix: self, config }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let domain = self.matrix.domain();
        if domain.is_empty() {
            return writeln!(f, "{}", self.config.empty);
        }

        let labels: Vec<String> = domain.iter().map(|v| v.to_string()).collect();
        let cell_width = self.config.one.len().max(self.config.zero.len());
        let label_width = labels.iter().map(|s| s.len()).max().unwrap_or(0);
        let widths: Vec<usize> = labels.iter().map(|s| s.len().max(cell_width)).collect();
        let gap = " ".repeat(self.config.gap);

        // Header
        write!(f, "{:label_width$}", "")?;
        for (label, &width) in labels.iter().zip(widths.iter()) {
            write!(f, "{}{:>width$}", gap, label)?;
        }
        writeln!(f)?;

        for (i, label) in labels.iter().enumerate() {
            write!(f, "{:<label_width$}", label)?;
            for (&related, &width) in self.matrix.row(i).iter().zip(widths.iter()) {
                let cell = if related { self.config.one } else { self.config.zero };
                write!(f, "{}{:>width$}", gap, cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table(), f)
    }
}
