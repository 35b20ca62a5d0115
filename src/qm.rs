//! The minimizer front end.
//!
//! [`Qm`] validates a truth-table description, runs the whole Quine-McCluskey pipeline
//! once at construction, and keeps the result:
//!
//! 1. [`initial_group`]: singleton terms bucketed by population count.
//! 2. [`prime_implicants`]: repeated merging of adjacent buckets.
//! 3. [`select_implicants`]: essential primes, then a minimal exact cover.
//! 4. [`render`][crate::render::render]: the textual expression.
//!
//! # Examples
//!
//! ```
//! use qm_rs::qm::Qm;
//! use qm_rs::types::Mode;
//!
//! // f(A, B, C) is true on 1, 3, 5, 7: it only depends on C.
//! let qm = Qm::new(&["A", "B", "C"], &[1, 3, 5, 7], &[], Mode::Minterm).unwrap();
//! assert_eq!(qm.function(), "(C)");
//! assert_eq!(qm.implicants().len(), 1);
//!
//! // The same function described by where it is false.
//! let qm = Qm::maxterms(&["A", "B", "C"], &[0, 2, 4, 6]).unwrap();
//! assert_eq!(qm.function(), "(C)");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, warn};

use crate::cover::select_implicants;
use crate::error::{QmError, Result};
use crate::group::initial_group;
use crate::primes::prime_implicants;
use crate::render::{render, render_with_config, RenderConfig};
use crate::term::Term;
use crate::types::Mode;

/// Largest supported number of variables (indices are `u32`).
pub const MAX_VARIABLES: usize = 32;

/// A minimized boolean function.
#[derive(Debug, Clone)]
pub struct Qm {
    variables: Vec<String>,
    mode: Mode,
    values: Vec<u32>,
    dont_cares: BTreeSet<u32>,
    primes: Vec<Term>,
    implicants: Vec<Term>,
    function: String,
}

impl Qm {
    /// Minimizes the function over `variables` given by `values` and `dont_cares`.
    ///
    /// In [`Mode::Minterm`] `values` lists where the function is true; in [`Mode::Maxterm`]
    /// where it is false. Index bit `width - 1 - i` is the value of `variables[i]`, so the
    /// first variable is the most significant bit.
    ///
    /// Duplicate indices are ignored. An index listed both as a value and as a don't-care
    /// is treated as a value.
    ///
    /// # Errors
    ///
    /// - [`QmError::NoVariables`] if `variables` is empty.
    /// - [`QmError::TooManyVariables`] if there are more than [`MAX_VARIABLES`] variables.
    /// - [`QmError::ValueOutOfRange`] if an index does not fit in `variables.len()` bits.
    /// - [`QmError::CoverTooLarge`] if the cover search would exceed its candidate limit.
    pub fn new<S: AsRef<str>>(
        variables: &[S],
        values: &[u32],
        dont_cares: &[u32],
        mode: Mode,
    ) -> Result<Self> {
        let width = variables.len();
        if width == 0 {
            return Err(QmError::NoVariables);
        }
        if width > MAX_VARIABLES {
            return Err(QmError::TooManyVariables {
                count: width,
                max: MAX_VARIABLES,
            });
        }
        for &value in values.iter().chain(dont_cares) {
            if u64::from(value) >= 1u64 << width {
                return Err(QmError::ValueOutOfRange { value, width });
            }
        }

        let mut seen = BTreeSet::new();
        let values: Vec<u32> = values.iter().copied().filter(|v| seen.insert(*v)).collect();
        let mut dc = BTreeSet::new();
        for &index in dont_cares {
            if seen.contains(&index) {
                warn!("Qm::new: {} is both a value and a don't-care, keeping it as a value", index);
            } else {
                dc.insert(index);
            }
        }
        let dont_cares = dc;

        let variables: Vec<String> = variables.iter().map(|v| v.as_ref().to_string()).collect();
        debug!(
            "Qm::new(variables = {:?}, values = {:?}, dont_cares = {:?}, mode = {})",
            variables, values, dont_cares, mode
        );

        let groups = initial_group(values.iter().chain(&dont_cares).copied(), width);
        let primes = prime_implicants(groups);
        let implicants = select_implicants(&primes, &values, &dont_cares)?;
        let function = render(&implicants, &variables, mode);
        debug!("Qm::new -> {}", function);

        Ok(Self {
            variables,
            mode,
            values,
            dont_cares,
            primes,
            implicants,
            function,
        })
    }

    /// Sum of products for the function that is true exactly on `values`.
    pub fn minterms<S: AsRef<str>>(variables: &[S], values: &[u32]) -> Result<Self> {
        Self::new(variables, values, &[], Mode::Minterm)
    }

    /// Product of sums for the function that is false exactly on `values`.
    pub fn maxterms<S: AsRef<str>>(variables: &[S], values: &[u32]) -> Result<Self> {
        Self::new(variables, values, &[], Mode::Maxterm)
    }

    /// The minimized expression.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The minimized expression with custom operator spellings.
    pub fn render(&self, config: &RenderConfig) -> String {
        render_with_config(&self.implicants, &self.variables, self.mode, config)
    }

    /// The implicants of the minimized expression: essential primes first, then the
    /// cover of the remaining values.
    pub fn implicants(&self) -> &[Term] {
        &self.implicants
    }

    /// Every prime implicant of the function, in discovery order.
    pub fn prime_implicants(&self) -> &[Term] {
        &self.primes
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The listed values, without duplicates, in input order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn dont_cares(&self) -> &BTreeSet<u32> {
        &self.dont_cares
    }

    /// Evaluates the minimized expression on the assignment encoded by `index`.
    ///
    /// Bits above the variable count are ignored.
    pub fn evaluate(&self, index: u32) -> bool {
        let inside = self.implicants.iter().any(|t| t.covers(index));
        match self.mode {
            Mode::Minterm => inside,
            Mode::Maxterm => !inside,
        }
    }
}

impl fmt::Display for Qm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)
    }
}
