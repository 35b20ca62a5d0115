//! Truth tables with both minimized forms.
//!
//! A [`TruthTable`] describes a function by the indices where it is true, minimizes it
//! both as a sum of products and as a product of sums, and prints the table of the
//! shorter form:
//!
//! ```text
//! | A | B | (NOT A OR NOT B) |
//! +---+---+------------------+
//! | 0 | 0 |        1         |
//! | 0 | 1 |        1         |
//! | 1 | 0 |        1         |
//! | 1 | 1 |        0         |
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{QmError, Result};
use crate::qm::Qm;
use crate::types::{bit_of, Mode};

/// Largest number of variables for which the full table is materialized.
pub const MAX_TABLE_VARIABLES: usize = 16;

#[derive(Debug, Clone)]
pub struct TruthTable {
    minterm: Qm,
    maxterm: Qm,
}

impl TruthTable {
    /// Builds the table of the function that is true on `true_values`, false elsewhere,
    /// and unspecified on `dont_cares`.
    pub fn new<S: AsRef<str>>(
        variables: &[S],
        true_values: &[u32],
        dont_cares: &[u32],
    ) -> Result<Self> {
        let width = variables.len();
        if width > MAX_TABLE_VARIABLES {
            return Err(QmError::TooManyVariables {
                count: width,
                max: MAX_TABLE_VARIABLES,
            });
        }

        let minterm = Qm::new(variables, true_values, dont_cares, Mode::Minterm)?;

        // Reuse the cleaned lists: an index that is both true and a don't-care stays true.
        let dont_cares: Vec<u32> = minterm.dont_cares().iter().copied().collect();
        let specified: BTreeSet<u32> = true_values.iter().chain(&dont_cares).copied().collect();
        let false_values: Vec<u32> = (0..1u32 << width)
            .filter(|i| !specified.contains(i))
            .collect();
        let maxterm = Qm::new(variables, &false_values, &dont_cares, Mode::Maxterm)?;

        Ok(Self { minterm, maxterm })
    }

    /// The sum-of-products form.
    pub fn minterm(&self) -> &Qm {
        &self.minterm
    }

    /// The product-of-sums form.
    pub fn maxterm(&self) -> &Qm {
        &self.maxterm
    }

    /// The form with the shorter expression; ties go to the sum of products.
    pub fn simplest(&self) -> &Qm {
        if self.maxterm.function().len() < self.minterm.function().len() {
            &self.maxterm
        } else {
            &self.minterm
        }
    }

    pub fn variables(&self) -> &[String] {
        self.minterm.variables()
    }

    /// Every assignment with the value of [`TruthTable::simplest`] on it, in index order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        let qm = self.simplest();
        (0..1u32 << self.variables().len()).map(move |i| (i, qm.evaluate(i)))
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variables = self.variables();
        let function = self.simplest().function();
        let width = variables.len();

        write!(f, "|")?;
        for name in variables {
            write!(f, " {} |", name)?;
        }
        writeln!(f, " {} |", function)?;

        write!(f, "+")?;
        for name in variables {
            write!(f, "-{}-+", "-".repeat(name.len()))?;
        }
        write!(f, "-{}-+", "-".repeat(function.len()))?;

        for (index, value) in self.rows() {
            writeln!(f)?;
            write!(f, "|")?;
            for (pos, name) in variables.iter().enumerate() {
                let bit = u8::from(bit_of(index, width, pos));
                write!(f, " {:^w$} |", bit, w = name.len())?;
            }
            write!(f, " {:^w$} |", u8::from(value), w = function.len())?;
        }
        Ok(())
    }
}
