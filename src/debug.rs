//! Debug utilities for inspecting expressions.
//!
//! This module provides exhaustive truth tables and equivalence checks.
//! These are primarily useful in tests and during development: the cost is
//! exponential in the number of distinct leaf values.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::eval::eval;
use crate::expr::Expr;
use crate::facts::FactSet;

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub facts: FactSet,
    pub value: bool,
}

/// An assignment on which two expressions disagree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mismatch {
    pub facts: FactSet,
    pub left: bool,
    pub right: bool,
}

/// All subsets of `vars`, in binary counting order (bit `i` selects the
/// `i`-th smallest value).
///
/// # Panics
///
/// Panics if `vars` has 32 or more elements.
pub fn all_fact_sets(vars: &BTreeSet<i32>) -> impl Iterator<Item = FactSet> + '_ {
    let n = vars.len();
    assert!(n < 32, "Too many variables for exhaustive enumeration: {}", n);
    (0u32..(1 << n)).map(move |bits| {
        vars.iter()
            .enumerate()
            .filter(|&(i, _)| (bits >> i) & 1 == 1)
            .map(|(_, &v)| v)
            .collect()
    })
}

/// Evaluates `expr` on every subset of its own leaf values.
///
/// # Panics
///
/// Panics if `expr` has 32 or more distinct leaf values.
pub fn truth_table(expr: &Expr) -> Vec<Row> {
    let vars = expr.vars();
    all_fact_sets(&vars)
        .map(|facts| {
            let value = eval(expr, &facts);
            Row { facts, value }
        })
        .collect()
}

/// Compares two expressions on every subset of their combined leaf values.
///
/// Returns the assignments where they differ; an empty list means the two
/// expressions are equivalent.
///
/// # Panics
///
/// Panics if the two expressions together have 32 or more distinct leaf values.
pub fn verify_equivalent(left: &Expr, right: &Expr) -> Vec<Mismatch> {
    let mut vars = left.vars();
    vars.extend(right.vars());

    let mut failures = Vec::new();
    for facts in all_fact_sets(&vars) {
        let l = eval(left, &facts);
        let r = eval(right, &facts);
        if l != r {
            failures.push(Mismatch { facts, left: l, right: r });
        }
    }
    failures
}

impl Expr {
    /// Compact multi-line summary of the expression.
    pub fn debug_string(&self) -> String {
        let mut result = String::new();
        writeln!(
            &mut result,
            "Expr (size={}, depth={}, nnf={}):",
            self.size(),
            self.depth(),
            self.is_nnf()
        )
        .unwrap();
        writeln!(&mut result, "  {}", self).unwrap();
        result
    }
}
