//! Rewriting into negation-normal form.
//!
//! Negations are pushed towards the leaves using De Morgan's laws:
//!
//! ```text
//! NOT (a OR b)   =>  (NOT a AND NOT b)
//! NOT (a AND b)  =>  (NOT a OR NOT b)
//! NOT NOT a      =>  a
//! NOT x          =>  Neg_x            (x is a leaf; NOT Neg_x => x)
//! ```
//!
//! The rewrite is a single pass over the tree: every `Not` is resolved the moment
//! it is reached, so the result contains no `Not` nodes and no fixed-point
//! iteration is needed. Connectives outside any `Not` keep their operator and
//! only have their children rewritten.
//!
//! # Examples
//!
//! ```
//! use nnf_rs::expr::Expr;
//!
//! let e = Expr::not(Expr::and([Expr::leaf(1), Expr::or([Expr::leaf(2), Expr::leaf(3)])]));
//! let nnf = e.normalize();
//! assert_eq!(nnf.to_string(), "(Neg_1 OR (Neg_2 AND Neg_3))");
//! assert!(nnf.is_nnf());
//! ```

use log::debug;
use snafu::ensure;

use crate::error::{DepthLimitExceededSnafu, Result};
use crate::expr::Expr;

/// Normalization settings.
///
/// The rewrite runs on an explicit worklist, so it uses no call stack per
/// tree level. `max_depth` bounds the nesting it accepts; a deeper input
/// makes [`Normalizer::run`] fail instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Normalizer {
    pub max_depth: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { max_depth: 10_000 }
    }
}

/// Pending work for [`Normalizer::run`].
enum Task {
    /// Rewrite a subtree, under an odd (`negate = true`) or even number of `Not`s.
    Visit { expr: Expr, negate: bool, depth: usize },
    /// Pop the last `arity` results and join them into one connective.
    Join { and: bool, arity: usize },
}

impl Normalizer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// A normalizer that never gives up.
    pub fn unbounded() -> Self {
        Self { max_depth: usize::MAX }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        ensure!(depth <= self.max_depth, DepthLimitExceededSnafu { limit: self.max_depth });
        Ok(())
    }

    /// Rewrites `expr` into negation-normal form.
    pub fn run(&self, expr: Expr) -> Result<Expr> {
        let mut tasks = vec![Task::Visit {
            expr,
            negate: false,
            depth: 0,
        }];
        let mut results: Vec<Expr> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit { expr, negate, depth } => {
                    self.check_depth(depth)?;
                    match expr {
                        Expr::And(children) => self.push_children(&mut tasks, children, negate, depth, !negate),
                        Expr::Or(children) => self.push_children(&mut tasks, children, negate, depth, negate),
                        Expr::Not(child) => {
                            if negate {
                                debug!("NOT NOT x => x");
                            }
                            tasks.push(Task::Visit {
                                expr: *child,
                                negate: !negate,
                                depth: depth + 1,
                            });
                        }
                        leaf @ Expr::Leaf { .. } if !negate => results.push(leaf),
                        Expr::Leaf { value, negated } => {
                            let flipped = Expr::Leaf { value, negated: !negated };
                            debug!("NOT {} => {}", Expr::Leaf { value, negated }, flipped);
                            results.push(flipped);
                        }
                    }
                }
                Task::Join { and, arity } => {
                    let children = results.split_off(results.len() - arity);
                    results.push(if and { Expr::And(children) } else { Expr::Or(children) });
                }
            }
        }

        debug_assert_eq!(results.len(), 1);
        Ok(results.pop().unwrap_or_default())
    }

    /// Schedules the children of a connective, followed by joining them into
    /// an `And` (if `and`) or an `Or`.
    fn push_children(&self, tasks: &mut Vec<Task>, children: Vec<Expr>, negate: bool, depth: usize, and: bool) {
        if negate {
            if and {
                debug!("NOT (OR ..{}) => AND of negations", children.len());
            } else {
                debug!("NOT (AND ..{}) => OR of negations", children.len());
            }
        }
        tasks.push(Task::Join {
            and,
            arity: children.len(),
        });
        // Reversed, so that children are rewritten (and their results stacked) left to right.
        for expr in children.into_iter().rev() {
            tasks.push(Task::Visit {
                expr,
                negate,
                depth: depth + 1,
            });
        }
    }
}

/// Rewrites `expr` into negation-normal form, without a depth limit.
pub fn normalize(expr: Expr) -> Expr {
    match Normalizer::unbounded().run(expr) {
        Ok(nnf) => nnf,
        Err(e) => unreachable!("unbounded normalization failed: {}", e),
    }
}

impl Expr {
    /// Consumes the expression and returns its negation-normal form.
    ///
    /// See the [module documentation](crate::normalize) for the rewrite rules.
    pub fn normalize(self) -> Expr {
        normalize(self)
    }

    /// Replaces the expression with its negation-normal form.
    pub fn normalize_in_place(&mut self) {
        let expr = std::mem::take(self);
        *self = normalize(expr);
    }
}
