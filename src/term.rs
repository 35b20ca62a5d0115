//! Implicant terms of the Quine-McCluskey tables.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::Pattern;

/// A ternary pattern together with the original indices it subsumes.
///
/// Equality and hashing are structural over the pattern and the covered set.
/// The `used` flag is bookkeeping for a single combination pass and is ignored by both,
/// so a term can be looked up in a hash set no matter whether it has been combined yet.
#[derive(Debug, Clone)]
pub struct Term {
    pattern: Pattern,
    covered: BTreeSet<u32>,
    used: bool,
}

impl Term {
    /// Creates the fully concrete term of a single index.
    pub fn singleton(index: u32, width: usize) -> Self {
        Self {
            pattern: Pattern::from_index(index, width),
            covered: BTreeSet::from([index]),
            used: false,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The original indices this term subsumes, in increasing order.
    pub fn covered(&self) -> &BTreeSet<u32> {
        &self.covered
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    fn mark_used(&mut self) {
        self.used = true;
    }

    /// Checks whether the assignment encoded by `index` lies inside this term.
    pub fn covers(&self, index: u32) -> bool {
        self.pattern.matches(index)
    }

    /// Number of positions that produce a literal when rendered.
    pub fn literal_count(&self) -> usize {
        self.pattern.width() - self.pattern.dont_cares()
    }

    /// Tries to merge two terms whose patterns differ in exactly one position.
    ///
    /// On success both operands are marked used and the merged term is returned.
    /// Identical terms and patterns differing in zero or several positions yield `None`
    /// and leave both operands untouched.
    pub fn combine(&mut self, other: &mut Term) -> Option<Term> {
        if *self == *other {
            return None;
        }
        let pos = self.pattern.single_difference(&other.pattern)?;

        self.mark_used();
        other.mark_used();

        Some(Term {
            pattern: self.pattern.generalize(pos),
            covered: self.covered.union(&other.covered).copied().collect(),
            used: false,
        })
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.covered == other.covered
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.covered.hash(state);
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m(")?;
        for (i, index) in self.covered.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, ") = {}", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    use test_log::test;

    #[test]
    fn test_singleton() {
        let t = Term::singleton(6, 3);
        assert_eq!(t.pattern().to_string(), "110");
        assert_eq!(t.covered().iter().copied().collect::<Vec<_>>(), vec![6]);
        assert!(!t.is_used());
        assert_eq!(t.literal_count(), 3);
        assert_eq!(t.to_string(), "m(6) = 110");
    }

    #[test]
    fn test_combine_adjacent() {
        let mut a = Term::singleton(1, 3);
        let mut b = Term::singleton(3, 3);
        let c = a.combine(&mut b).unwrap();
        assert_eq!(c.pattern().to_string(), "0-1");
        assert_eq!(c.covered().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(a.is_used());
        assert!(b.is_used());
        assert!(!c.is_used());
        assert_eq!(c.to_string(), "m(1, 3) = 0-1");
    }

    #[test]
    fn test_combine_too_far() {
        let mut a = Term::singleton(0, 3);
        let mut b = Term::singleton(3, 3);
        assert!(a.combine(&mut b).is_none());
        assert!(!a.is_used());
        assert!(!b.is_used());
    }

    #[test]
    fn test_combine_identical() {
        let mut a = Term::singleton(5, 3);
        let mut b = Term::singleton(5, 3);
        assert!(a.combine(&mut b).is_none());
        assert!(!a.is_used());
        assert!(!b.is_used());
    }

    #[test]
    fn test_combine_second_level() {
        let mut a = Term::singleton(0, 3);
        let mut b = Term::singleton(1, 3);
        let mut c = Term::singleton(2, 3);
        let mut d = Term::singleton(3, 3);
        let mut ab = a.combine(&mut b).unwrap();
        let mut cd = c.combine(&mut d).unwrap();
        let abcd = ab.combine(&mut cd).unwrap();
        assert_eq!(abcd.pattern().to_string(), "0--");
        assert_eq!(abcd.covered().len(), 4);
        assert!(abcd.covers(2));
        assert!(!abcd.covers(4));
        assert_eq!(abcd.literal_count(), 1);
    }

    #[test]
    fn test_equality_ignores_used() {
        let mut a = Term::singleton(1, 2);
        let mut b = Term::singleton(3, 2);
        let fresh = Term::singleton(1, 2);
        a.combine(&mut b).unwrap();
        assert!(a.is_used());
        assert_eq!(a, fresh);

        let mut set = HashSet::new();
        set.insert(fresh);
        assert!(set.contains(&a));
    }
}
