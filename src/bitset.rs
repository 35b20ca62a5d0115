//! Compact bit set for tracking covered positions.
//!
//! The cover solver maps each residual value to a small position and describes
//! every candidate implicant as the set of positions it covers. Subset unions and
//! the exact-cover test then become word-wise `OR`s and a comparison.

/// A simple bit set backed by a vector of u64 words.
///
/// The word vector never carries trailing zero words, so two sets holding the
/// same bits compare equal regardless of how they were built.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit set.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates a bit set with bits `0..n` set.
    pub fn full(n: usize) -> Self {
        let mut words = vec![u64::MAX; n / Self::BITS_PER_WORD];
        let rest = n % Self::BITS_PER_WORD;
        if rest > 0 {
            words.push((1u64 << rest) - 1);
        }
        Self { words }
    }

    /// Sets the bit at the given index.
    pub fn insert(&mut self, index: usize) {
        let (word_idx, bit_idx) = (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD);
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        self.words[word_idx] |= 1u64 << bit_idx;
    }

    /// Adds every bit of `other` to `self`.
    pub fn union_with(&mut self, other: &BitSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst |= *src;
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bs = BitSet::new();
        for index in iter {
            bs.insert(index);
        }
        bs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_full() {
        assert_eq!(BitSet::full(0), BitSet::new());
        assert_eq!(BitSet::full(3), [0, 1, 2].into_iter().collect::<BitSet>());
        assert_eq!(BitSet::full(70), (0..70).collect::<BitSet>());
        assert_ne!(BitSet::full(70), (0..71).collect::<BitSet>());
        assert_eq!(BitSet::full(64), (0..64).collect::<BitSet>());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut bs = BitSet::new();
        bs.insert(42);
        bs.insert(42);
        assert_eq!(bs, [42].into_iter().collect::<BitSet>());
    }

    #[test]
    fn test_union_equals_full() {
        let a: BitSet = [0, 2, 65].into_iter().collect();
        let b: BitSet = [1, 3].into_iter().collect();

        let mut u = BitSet::new();
        u.union_with(&a);
        assert_ne!(u, BitSet::full(4));
        u.union_with(&b);
        assert_ne!(u, BitSet::full(4));
        assert_eq!(u, [0, 1, 2, 3, 65].into_iter().collect::<BitSet>());

        let mut v = b.clone();
        v.union_with(&[0, 2].into_iter().collect::<BitSet>());
        assert_eq!(v, BitSet::full(4));
    }

    #[test]
    fn test_union_with_empty() {
        let mut u = BitSet::full(5);
        u.union_with(&BitSet::new());
        assert_eq!(u, BitSet::full(5));
    }
}
