//! Relation to DOT (Graphviz) conversion.
//!
//! A relation is rendered as a directed graph with one node per domain value
//! and one edge `a -> b` per related pair. The output can be visualized with
//! Graphviz tools like `dot` or `circo`.
//!
//! # DOT Format
//!
//! - **Nodes** are named by their domain value and laid out left-to-right in
//!   ascending order.
//! - **Reflexive nodes** (`R(a, a)`) are drawn either with a self-loop or, when
//!   self-loops are disabled, with a double border.
//! - **Edges** use the configured style.
//!
//! # Examples
//!
//! ```
//! use relations::domain::Domain;
//! use relations::matrix::RelationMatrix;
//!
//! let m = RelationMatrix::from_predicate(Domain::new(1, 3), &|a: i64, b: i64| a < b);
//! let dot = m.to_dot().unwrap();
//! assert!(dot.contains("1 -> 3;"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use crate::matrix::RelationMatrix;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for nodes (default: "circle")
    pub node_shape: &'static str,
    /// Style for edges (default: "solid")
    pub edge_style: &'static str,
    /// Whether to draw `a -> a` edges (default: true)
    pub self_loops: bool,
    /// Graph layout direction (default: "LR")
    pub rankdir: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            edge_style: "solid",
            self_loops: true,
            rankdir: "LR",
        }
    }
}

impl RelationMatrix {
    /// Converts the relation to DOT (Graphviz) format.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A DOT-formatted string representation of the relation
    /// * `Err(std::fmt::Error)` - If string formatting fails (rare)
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the relation to DOT format with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use relations::domain::Domain;
    /// use relations::dot::DotConfig;
    /// use relations::matrix::RelationMatrix;
    ///
    /// let m = RelationMatrix::identity(Domain::new(1, 2));
    /// let config = DotConfig {
    ///     self_loops: false,
    ///     ..DotConfig::default()
    /// };
    ///
    /// let dot = m.to_dot_with_config(&config).unwrap();
    /// assert!(!dot.contains("->"));
    /// ```
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let domain = self.domain();

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "rankdir={};", config.rankdir)?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for (i, v) in domain.iter().enumerate() {
            if !config.self_loops && self[(i, i)] {
                // Reflexive element without a drawn loop
                writeln!(dot, "{} [label=\"{}\", peripheries=2];", node_id(v), v)?;
            } else {
                writeln!(dot, "{} [label=\"{}\"];", node_id(v), v)?;
            }
        }

        for (a, b) in self.pairs() {
            if a == b && !config.self_loops {
                continue;
            }
            if config.edge_style == "solid" {
                writeln!(dot, "{} -> {};", node_id(a), node_id(b))?;
            } else {
                writeln!(dot, "{} -> {} [style={}];", node_id(a), node_id(b), config.edge_style)?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

/// DOT identifier for a domain value. Negative values need quoting.
fn node_id(value: i64) -> String {
    if value < 0 {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
