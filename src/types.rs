//! Ternary bits, fixed-width patterns, and the minimization mode.
//!
//! A [`Pattern`] is the cube notation used throughout the Quine-McCluskey tables:
//! one [`Bit`] per variable, where `-` marks a position that was generalized away.
//! Position 0 is the most significant bit and belongs to the first variable.
use std::fmt;

/// A single position of a ternary pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bit {
    Zero,
    One,
    DontCare,
}

impl Bit {
    /// Returns the character used in the tabular notation (`0`, `1` or `-`).
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::DontCare => '-',
        }
    }

    /// Checks whether a concrete bit value is matched by this position.
    pub fn matches(self, value: bool) -> bool {
        match self {
            Bit::Zero => !value,
            Bit::One => value,
            Bit::DontCare => true,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A fixed-width ternary bit pattern.
///
/// # Invariants
///
/// - The width never changes after construction.
/// - Patterns built by [`Pattern::from_index`] contain no [`Bit::DontCare`].
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Pattern(Vec<Bit>);

impl Pattern {
    /// Creates the fully concrete pattern of `index`, zero-padded to `width` bits.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32`.
    pub fn from_index(index: u32, width: usize) -> Self {
        assert!(width <= 32, "Pattern width should be in the range 0..=32");
        let bits = (0..width)
            .map(|pos| Bit::from(bit_of(index, width, pos)))
            .collect();
        Pattern(bits)
    }

    /// Returns the number of positions.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn get(&self, pos: usize) -> Bit {
        self.0[pos]
    }

    /// Number of [`Bit::One`] positions.
    pub fn ones(&self) -> usize {
        self.0.iter().filter(|&&b| b == Bit::One).count()
    }

    /// Number of [`Bit::DontCare`] positions.
    pub fn dont_cares(&self) -> usize {
        self.0.iter().filter(|&&b| b == Bit::DontCare).count()
    }

    /// Checks whether every position is [`Bit::DontCare`].
    pub fn is_universal(&self) -> bool {
        self.0.iter().all(|&b| b == Bit::DontCare)
    }

    /// Returns the single position where `self` and `other` differ,
    /// or `None` if they differ in zero or in more than one position.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn single_difference(&self, other: &Pattern) -> Option<usize> {
        assert_eq!(self.width(), other.width(), "Pattern widths must match");
        let mut diff = None;
        for (pos, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a != b {
                if diff.is_some() {
                    return None;
                }
                diff = Some(pos);
            }
        }
        diff
    }

    /// Returns a copy with position `pos` generalized to [`Bit::DontCare`].
    pub fn generalize(&self, pos: usize) -> Self {
        let mut bits = self.0.clone();
        bits[pos] = Bit::DontCare;
        Pattern(bits)
    }

    /// Checks whether the concrete assignment encoded by `index` matches this pattern.
    pub fn matches(&self, index: u32) -> bool {
        let width = self.width();
        self.0
            .iter()
            .enumerate()
            .all(|(pos, b)| b.matches(bit_of(index, width, pos)))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

/// Value of position `pos` (0 = most significant) in the `width`-bit encoding of `index`.
pub fn bit_of(index: u32, width: usize, pos: usize) -> bool {
    (index >> (width - 1 - pos)) & 1 == 1
}

/// Polarity of a minimization run.
///
/// In [`Mode::Minterm`] the listed indices are where the function is true and the
/// result is a sum of products. In [`Mode::Maxterm`] the listed indices are where
/// the function is false and the result is a product of sums.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Mode {
    #[default]
    Minterm,
    Maxterm,
}

impl Mode {
    /// The bit value whose literal is rendered negated.
    pub fn negated_bit(self) -> Bit {
        match self {
            Mode::Minterm => Bit::Zero,
            Mode::Maxterm => Bit::One,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Minterm => write!(f, "minterm"),
            Mode::Maxterm => write!(f, "maxterm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_pattern_from_index() {
        let p = Pattern::from_index(5, 4);
        assert_eq!(p.to_string(), "0101");
        assert_eq!(p.width(), 4);
        assert_eq!(p.ones(), 2);
        assert_eq!(p.dont_cares(), 0);
    }

    #[test]
    fn test_pattern_zero_width_index() {
        assert_eq!(Pattern::from_index(0, 3).to_string(), "000");
        assert_eq!(Pattern::from_index(7, 3).to_string(), "111");
    }

    #[test]
    fn test_single_difference() {
        let a = Pattern::from_index(0b0101, 4);
        let b = Pattern::from_index(0b0111, 4);
        let c = Pattern::from_index(0b1111, 4);
        assert_eq!(a.single_difference(&b), Some(2));
        assert_eq!(a.single_difference(&c), None);
        assert_eq!(a.single_difference(&a), None);
    }

    #[test]
    fn test_generalize_and_match() {
        let p = Pattern::from_index(0b101, 3).generalize(1);
        assert_eq!(p.to_string(), "1-1");
        assert!(p.matches(0b101));
        assert!(p.matches(0b111));
        assert!(!p.matches(0b100));
        assert!(!p.is_universal());
        assert!(p.generalize(0).generalize(2).is_universal());
    }

    #[test]
    #[should_panic(expected = "Pattern widths must match")]
    fn test_single_difference_width_mismatch() {
        Pattern::from_index(1, 2).single_difference(&Pattern::from_index(1, 3));
    }

    #[test]
    fn test_mode_polarity() {
        assert_eq!(Mode::default(), Mode::Minterm);
        assert_eq!(Mode::Minterm.negated_bit(), Bit::Zero);
        assert_eq!(Mode::Maxterm.negated_bit(), Bit::One);
    }
}
