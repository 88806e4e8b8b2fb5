//! Operator sugar for building expressions.
//!
//! `a & b` and `a | b` extend an existing connective of the same kind on the
//! left instead of nesting, so `a & b & c` is one three-child `And`.

use std::ops::{BitAnd, BitOr, Not};

use crate::expr::Expr;

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        match self {
            Expr::And(mut children) => {
                children.push(rhs);
                Expr::And(children)
            }
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        match self {
            Expr::Or(mut children) => {
                children.push(rhs);
                Expr::Or(children)
            }
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::leaf(value)
    }
}
