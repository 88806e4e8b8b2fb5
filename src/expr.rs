//! Boolean expression trees.
//!
//! An [`Expr`] is an owned tree: every node exclusively owns its children,
//! so there is no sharing between subtrees and rewriting one subtree can never
//! affect another. Leaves carry an integer fact identifier and a `negated`
//! flag, which is only ever set by normalization (see [`crate::normalize`]).

use std::collections::BTreeSet;
use std::fmt;

/// A propositional boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Conjunction of zero or more children (empty is true).
    And(Vec<Expr>),
    /// Disjunction of zero or more children (empty is false).
    Or(Vec<Expr>),
    /// Negation of exactly one child.
    Not(Box<Expr>),
    /// A fact, optionally required to be absent.
    Leaf { value: i32, negated: bool },
}

impl Expr {
    pub fn leaf(value: i32) -> Self {
        Expr::Leaf { value, negated: false }
    }

    /// A leaf that holds iff `value` is *not* among the facts.
    ///
    /// Normalization produces these; building one by hand is mostly useful
    /// for writing down expected results.
    pub fn negated_leaf(value: i32) -> Self {
        Expr::Leaf { value, negated: true }
    }

    pub fn and(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(children.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(child: Expr) -> Self {
        Expr::Not(Box::new(child))
    }
}

impl Default for Expr {
    /// The empty conjunction, i.e. constant true.
    fn default() -> Self {
        Expr::And(Vec::new())
    }
}

impl Expr {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Leaf { .. })
    }

    /// Returns `true` for a leaf with the `negated` flag set.
    pub fn is_negated(&self) -> bool {
        matches!(self, Expr::Leaf { negated: true, .. })
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Leaf { .. } => 0,
            Expr::Not(child) => 1 + child.depth(),
            Expr::And(children) | Expr::Or(children) => 1 + children.iter().map(Expr::depth).max().unwrap_or(0),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Leaf { .. } => 1,
            Expr::Not(child) => 1 + child.size(),
            Expr::And(children) | Expr::Or(children) => 1 + children.iter().map(Expr::size).sum::<usize>(),
        }
    }

    /// Returns `true` if no `Not` node occurs anywhere in the tree.
    pub fn is_nnf(&self) -> bool {
        match self {
            Expr::Leaf { .. } => true,
            Expr::Not(_) => false,
            Expr::And(children) | Expr::Or(children) => children.iter().all(Expr::is_nnf),
        }
    }

    /// Distinct leaf values, in ascending order.
    pub fn vars(&self) -> BTreeSet<i32> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expr::Leaf { value, .. } => {
                    vars.insert(*value);
                }
                Expr::Not(child) => stack.push(child.as_ref()),
                Expr::And(children) | Expr::Or(children) => stack.extend(children.iter()),
            }
        }
        vars
    }
}

fn fmt_joined(f: &mut fmt::Formatter<'_>, children: &[Expr], op: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", op)?;
        }
        write!(f, "{}", child)?;
    }
    write!(f, ")")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::And(children) => fmt_joined(f, children, "AND"),
            Expr::Or(children) => fmt_joined(f, children, "OR"),
            Expr::Not(child) => write!(f, "NOT {}", child),
            Expr::Leaf { value, negated: false } => write!(f, "{}", value),
            Expr::Leaf { value, negated: true } => write!(f, "Neg_{}", value),
        }
    }
}

#[cfg(test)]
pub(crate) mod arbitrary {
    use quickcheck::{Arbitrary, Gen};

    use super::Expr;

    /// Leaf values are drawn from a small alphabet so that random fact sets
    /// hit them often.
    pub const ALPHABET: i32 = 6;

    const MAX_DEPTH: usize = 5;

    fn arbitrary_value(g: &mut Gen) -> i32 {
        (u8::arbitrary(g) as i32) % ALPHABET
    }

    fn arbitrary_expr(g: &mut Gen, depth: usize) -> Expr {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 4 };
        match choice {
            0 => Expr::leaf(arbitrary_value(g)),
            1 => Expr::not(arbitrary_expr(g, depth - 1)),
            op => {
                let n = usize::arbitrary(g) % 4;
                let children: Vec<Expr> = (0..n).map(|_| arbitrary_expr(g, depth - 1)).collect();
                if op == 2 {
                    Expr::And(children)
                } else {
                    Expr::Or(children)
                }
            }
        }
    }

    impl Arbitrary for Expr {
        fn arbitrary(g: &mut Gen) -> Self {
            let depth = usize::arbitrary(g) % (MAX_DEPTH + 1);
            arbitrary_expr(g, depth)
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            match self {
                Expr::Leaf { .. } => quickcheck::empty_shrinker(),
                Expr::Not(child) => Box::new(std::iter::once((**child).clone())),
                Expr::And(children) | Expr::Or(children) => Box::new(children.clone().into_iter()),
            }
        }
    }

    /// A fact set over [`ALPHABET`].
    #[derive(Debug, Clone)]
    pub struct SmallFacts(pub Vec<i32>);

    impl Arbitrary for SmallFacts {
        fn arbitrary(g: &mut Gen) -> Self {
            SmallFacts((0..ALPHABET).filter(|_| bool::arbitrary(g)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_constructors() {
        assert_eq!(Expr::leaf(3), Expr::Leaf { value: 3, negated: false });
        assert_eq!(Expr::negated_leaf(3), Expr::Leaf { value: 3, negated: true });
        assert_eq!(Expr::not(Expr::leaf(1)), Expr::Not(Box::new(Expr::leaf(1))));
        assert_eq!(Expr::and([Expr::leaf(1), Expr::leaf(2)]), Expr::And(vec![Expr::leaf(1), Expr::leaf(2)]));
        assert_eq!(Expr::or([]), Expr::Or(vec![]));
        assert_eq!(Expr::default(), Expr::and([]));
    }

    #[test]
    fn test_leaf_queries() {
        assert!(Expr::leaf(1).is_leaf());
        assert!(!Expr::leaf(1).is_negated());
        assert!(Expr::negated_leaf(1).is_negated());
        assert!(!Expr::not(Expr::leaf(1)).is_leaf());
        assert!(!Expr::not(Expr::leaf(1)).is_negated());
    }

    #[test]
    fn test_depth() {
        assert_eq!(Expr::leaf(1).depth(), 0);
        assert_eq!(Expr::not(Expr::leaf(1)).depth(), 1);
        assert_eq!(Expr::and([]).depth(), 1);
        let e = Expr::and([Expr::leaf(1), Expr::or([Expr::not(Expr::leaf(2))])]);
        assert_eq!(e.depth(), 3);
    }

    #[test]
    fn test_size() {
        assert_eq!(Expr::leaf(1).size(), 1);
        assert_eq!(Expr::or([]).size(), 1);
        let e = Expr::and([Expr::leaf(1), Expr::or([Expr::not(Expr::leaf(2))])]);
        assert_eq!(e.size(), 5);
    }

    #[test]
    fn test_is_nnf() {
        assert!(Expr::leaf(1).is_nnf());
        assert!(Expr::negated_leaf(1).is_nnf());
        assert!(Expr::and([Expr::negated_leaf(1), Expr::or([Expr::leaf(2)])]).is_nnf());
        assert!(!Expr::not(Expr::leaf(1)).is_nnf());
        assert!(!Expr::or([Expr::leaf(1), Expr::and([Expr::not(Expr::leaf(2))])]).is_nnf());
    }

    #[test]
    fn test_vars() {
        let e = Expr::and([
            Expr::leaf(3),
            Expr::not(Expr::or([Expr::leaf(1), Expr::negated_leaf(3)])),
            Expr::leaf(2),
        ]);
        let vars: Vec<i32> = e.vars().into_iter().collect();
        assert_eq!(vars, vec![1, 2, 3]);
        assert!(Expr::and([]).vars().is_empty());
    }

    #[test]
    fn test_display() {
        let e = Expr::not(Expr::and([Expr::leaf(1), Expr::or([Expr::leaf(2), Expr::leaf(3)])]));
        assert_eq!(e.to_string(), "NOT (1 AND (2 OR 3))");

        let e = Expr::or([Expr::negated_leaf(1), Expr::and([Expr::negated_leaf(2), Expr::negated_leaf(3)])]);
        assert_eq!(e.to_string(), "(Neg_1 OR (Neg_2 AND Neg_3))");

        assert_eq!(Expr::and([]).to_string(), "()");
        assert_eq!(Expr::not(Expr::not(Expr::leaf(7))).to_string(), "NOT NOT 7");
    }
}
