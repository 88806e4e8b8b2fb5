use log::trace;

use crate::expr::Expr;
use crate::facts::Facts;

/// Things that can be evaluated to a boolean against a fact set.
pub trait Eval {
    fn eval<F: Facts + ?Sized>(&self, facts: &F) -> bool;
}

/// Evaluates `expr` against `facts`.
///
/// `And` and `Or` short-circuit from left to right. A negated leaf holds
/// exactly when its value is *absent* from the facts.
pub fn eval<F: Facts + ?Sized>(expr: &Expr, facts: &F) -> bool {
    match expr {
        Expr::And(children) => {
            let result = children.iter().all(|child| eval(child, facts));
            trace!("eval(AND ..{}) -> {}", children.len(), result);
            result
        }
        Expr::Or(children) => {
            let result = children.iter().any(|child| eval(child, facts));
            trace!("eval(OR ..{}) -> {}", children.len(), result);
            result
        }
        Expr::Not(child) => !eval(child, facts),
        Expr::Leaf { value, negated } => {
            let result = facts.contains_fact(*value) != *negated;
            trace!("eval({}{}) -> {}", if *negated { "Neg_" } else { "" }, value, result);
            result
        }
    }
}

impl Eval for Expr {
    fn eval<F: Facts + ?Sized>(&self, facts: &F) -> bool {
        eval(self, facts)
    }
}

impl<E: Eval> Eval for [E] {
    /// A slice of expressions is read as their conjunction.
    fn eval<F: Facts + ?Sized>(&self, facts: &F) -> bool {
        self.iter().all(|e| e.eval(facts))
    }
}
