//! Fact sets: which leaf values count as true during evaluation.
//!
//! Anything that can answer a membership query can serve as a fact set, so
//! the evaluator is generic over the [`Facts`] trait. Plain slices work the
//! way a caller would expect (linear scan), while [`FactSet`] keeps the
//! values ordered and deduplicated.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A finite collection of true facts.
pub trait Facts {
    /// Returns `true` if `value` is one of the facts.
    fn contains_fact(&self, value: i32) -> bool;
}

impl Facts for [i32] {
    fn contains_fact(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl<const N: usize> Facts for [i32; N] {
    fn contains_fact(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl Facts for Vec<i32> {
    fn contains_fact(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl<S: std::hash::BuildHasher> Facts for HashSet<i32, S> {
    fn contains_fact(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl Facts for BTreeSet<i32> {
    fn contains_fact(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl<F: Facts + ?Sized> Facts for &F {
    fn contains_fact(&self, value: i32) -> bool {
        (**self).contains_fact(value)
    }
}

/// An ordered, deduplicated set of facts.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct FactSet(BTreeSet<i32>);

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fact, returning `false` if it was already present.
    pub fn insert(&mut self, value: i32) -> bool {
        self.0.insert(value)
    }

    pub fn contains(&self, value: i32) -> bool {
        self.0.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

impl Facts for FactSet {
    fn contains_fact(&self, value: i32) -> bool {
        self.contains(value)
    }
}

impl FromIterator<i32> for FactSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        FactSet(iter.into_iter().collect())
    }
}

impl From<&[i32]> for FactSet {
    fn from(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[i32; N]> for FactSet {
    fn from(values: [i32; N]) -> Self {
        values.into_iter().collect()
    }
}

impl fmt::Display for FactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
