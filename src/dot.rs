//! Expression to DOT (Graphviz) conversion.
//!
//! Every tree node becomes one graph node, numbered in pre-order, so the
//! output is a tree even when two subtrees are structurally equal.
//!
//! # DOT Format
//!
//! - **Connectives** (`AND`, `OR`, `NOT`) are rendered with the operator shape
//! - **Leaves** are rendered as boxes at the bottom (sink rank)
//! - **Negated leaves** are drawn with the negated-leaf style and labeled `¬x`
//!
//! # Examples
//!
//! ```
//! use nnf_rs::expr::Expr;
//!
//! let e = Expr::not(Expr::or([Expr::leaf(1), Expr::leaf(2)]));
//! let dot = e.normalize().to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("graph {"));
//! ```

use std::fmt::Write as _;

use crate::expr::Expr;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for connective nodes (default: "ellipse")
    pub operator_shape: &'static str,
    /// Shape for leaf nodes (default: "box")
    pub leaf_shape: &'static str,
    /// Style for negated leaves (default: "dashed")
    pub negated_leaf_style: &'static str,
    /// Whether to keep all leaves on the bottom rank (default: true)
    pub leaves_at_bottom: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "ellipse",
            leaf_shape: "box",
            negated_leaf_style: "dashed",
            leaves_at_bottom: true,
        }
    }
}

impl Expr {
    /// Converts the expression tree to DOT format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the expression tree to DOT format with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use nnf_rs::dot::DotConfig;
    /// use nnf_rs::expr::Expr;
    ///
    /// let e = Expr::and([Expr::leaf(1), Expr::negated_leaf(2)]);
    /// let config = DotConfig {
    ///     leaves_at_bottom: false,
    ///     ..DotConfig::default()
    /// };
    ///
    /// let dot = e.to_dot_with_config(&config).unwrap();
    /// assert!(dot.contains("¬2"));
    /// ```
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "graph {{")?;

        // Pre-order walk: (id, node, parent id)
        let mut leaves = Vec::new();
        let mut edges = Vec::new();
        let mut next_id = 0usize;
        let mut stack = vec![(self, None)];
        while let Some((node, parent)) = stack.pop() {
            let id = next_id;
            next_id += 1;
            if let Some(parent) = parent {
                edges.push((parent, id));
            }

            match node {
                Expr::And(children) | Expr::Or(children) => {
                    let label = if matches!(node, Expr::And(_)) { "AND" } else { "OR" };
                    writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.operator_shape, label)?;
                    // Reversed, so that children are numbered left to right.
                    for child in children.iter().rev() {
                        stack.push((child, Some(id)));
                    }
                }
                Expr::Not(child) => {
                    writeln!(dot, "{} [shape={}, label=\"NOT\"];", id, config.operator_shape)?;
                    stack.push((child.as_ref(), Some(id)));
                }
                Expr::Leaf { value, negated } => {
                    if *negated {
                        writeln!(
                            dot,
                            "{} [shape={}, style={}, label=\"¬{}\"];",
                            id, config.leaf_shape, config.negated_leaf_style, value
                        )?;
                    } else {
                        writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.leaf_shape, value)?;
                    }
                    leaves.push(id);
                }
            }
        }

        if config.leaves_at_bottom && !leaves.is_empty() {
            write!(dot, "{{ rank=sink;")?;
            for id in &leaves {
                write!(dot, " {};", id)?;
            }
            writeln!(dot, " }}")?;
        }

        for (parent, child) in edges {
            writeln!(dot, "{} -- {};", parent, child)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
