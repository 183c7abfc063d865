//! Human-readable report of an [`Analysis`].
//!
//! The report lists, in order:
//! 1. the six property lines (`Reflexively: True`, …);
//! 2. for every composition step, in increasing step order, a blank line,
//!    `Composition: k` and the step's table;
//! 3. a blank line, `Transitive closure` and the closure table.
//!
//! Rendering never recomputes anything: it only walks the steps already
//! recorded in the [`Closure`][crate::closure::Closure].

use std::fmt;
use std::io;

use crate::analysis::Analysis;

/// Configuration options for the report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Whether to print every composition step (default: true)
    pub show_steps: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { show_steps: true }
    }
}

/// An [`Analysis`] formatted as a report.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    analysis: &'a Analysis,
    config: ReportConfig,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self::with_config(analysis, ReportConfig::default())
    }

    pub fn with_config(analysis: &'a Analysis, config: ReportConfig) -> Self {
        Self { analysis, config }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.analysis.properties)?;

        if self.config.show_steps {
            for step in self.analysis.closure.steps() {
                writeln!(f)?;
                writeln!(f, "Composition: {}", step.index)?;
                write!(f, "{}", step.matrix.table())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Transitive closure")?;
        write!(f, "{}", self.analysis.closure.matrix().table())
    }
}

/// Writes the report for `analysis` to `out`.
pub fn write_report<W: io::Write>(out: &mut W, analysis: &Analysis, config: &ReportConfig) -> io::Result<()> {
    write!(out, "{}", Report::with_config(analysis, config.clone()))?;
    out.flush()
}
