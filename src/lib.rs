//! # qm-rs: exact two-level boolean minimization
//!
//! **`qm-rs`** turns a truth table into a minimal boolean expression using the
//! **Quine-McCluskey** method. Give it the variable names, the indices where the function
//! is true (or false, for the dual form), and optionally some don't-care indices.
//!
//! ## How it works
//!
//! Every listed index becomes a fully concrete term such as `101`. Terms are bucketed by
//! their number of ones, and terms of adjacent buckets that differ in one position are
//! merged (`101` + `111` = `1-1`). Merging repeats until nothing changes; the terms that
//! never merged are the **prime implicants**. Primes that are the only cover of some value
//! are **essential**. If they are not enough, an exhaustive search picks the smallest set
//! of remaining primes that covers the rest exactly.
//!
//! The search is exponential, so this is meant for small functions (roughly up to a dozen
//! variables, depending on the shape of the function).
//!
//! ## Basic Usage
//!
//! ```rust
//! use qm_rs::qm::Qm;
//! use qm_rs::types::Mode;
//!
//! // Sum of products: true on 1, 3, 5, 7, i.e. whenever C is true.
//! let f = Qm::minterms(&["A", "B", "C"], &[1, 3, 5, 7]).unwrap();
//! assert_eq!(f.function(), "(C)");
//!
//! // Product of sums: false only on 3.
//! let g = Qm::maxterms(&["A", "B"], &[3]).unwrap();
//! assert_eq!(g.function(), "(NOT A OR NOT B)");
//!
//! // Don't-cares may be used to simplify further.
//! let h = Qm::new(&["A", "B", "C"], &[1, 3], &[5, 7], Mode::Minterm).unwrap();
//! assert_eq!(h.function(), "(C)");
//! ```
//!
//! ## Core Components
//!
//! - **[`qm`]**: the [`Qm`][crate::qm::Qm] front end, which validates input and runs the pipeline.
//! - **[`group`]**, **[`primes`]**, **[`cover`]**: the stages of the algorithm.
//! - **[`render`]**: the expression grammar and its [`RenderConfig`][crate::render::RenderConfig].
//! - **[`table`]**: truth tables with both the minterm and the maxterm forms.

pub mod bitset;
pub mod cover;
pub mod error;
pub mod group;
pub mod primes;
pub mod qm;
pub mod render;
pub mod table;
pub mod term;
pub mod types;
