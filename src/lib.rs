//! # nnf-rs: boolean expression trees
//!
//! **`nnf-rs`** models propositional formulas over integer facts as owned trees,
//! and provides two operations on them:
//!
//! - **Evaluation** against a set of facts that are currently true.
//! - **Normalization** into *negation-normal form* (NNF), where De Morgan's laws
//!   push every negation down to the leaves and double negations cancel out.
//!
//! ## What is NNF?
//!
//! A formula is in negation-normal form when negation is applied to facts only,
//! never to `AND`/`OR` subformulas. In this crate a negated fact is a single leaf
//! with its `negated` flag set (rendered as `Neg_x`), so an NNF tree contains no
//! `Not` nodes at all.
//!
//! ## Basic Usage
//!
//! ```rust
//! use nnf_rs::eval::Eval;
//! use nnf_rs::expr::Expr;
//!
//! // 1. Build a formula: f = NOT (x1 AND (x2 OR x3))
//! let f = Expr::not(Expr::and([
//!     Expr::leaf(1),
//!     Expr::or([Expr::leaf(2), Expr::leaf(3)]),
//! ]));
//!
//! // 2. Evaluate it: facts {1, 2} are true, so the inner conjunction holds
//! assert!(!f.eval(&[1, 2]));
//!
//! // 3. Normalize, then evaluate again: same answer, no NOT nodes left
//! let g = f.normalize();
//! assert_eq!(g.to_string(), "(Neg_1 OR (Neg_2 AND Neg_3))");
//! assert!(g.is_nnf());
//! assert!(!g.eval(&[1, 2]));
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: The [`Expr`][crate::expr::Expr] tree, its constructors and textual rendering.
//! - **[`eval`]**: Evaluation against anything implementing [`Facts`][crate::facts::Facts].
//! - **[`normalize`]**: The NNF rewrite, with an optional depth limit.
//! - **[`debug`]**, **[`dot`]**: Truth tables, equivalence checks and Graphviz output.
//!
//! Trees are single-owner and operations are synchronous; normalizing in place
//! needs `&mut`, so one tree is never rewritten from two threads at once.

pub mod debug;
pub mod dot;
pub mod error;
pub mod eval;
pub mod expr;
pub mod facts;
pub mod normalize;
pub mod ops;
