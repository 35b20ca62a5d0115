//! Textual rendering of implicant lists.
//!
//! # Grammar
//!
//! - No implicants: the function is never true in minterm mode, and never false in
//!   maxterm mode. Rendered as the constant `0` or `1` respectively.
//! - A single implicant with `-` at every position: the opposite constant.
//! - Otherwise every implicant is a parenthesized clause of literals.
//!
//! In minterm mode literals are joined with `AND`, clauses with `OR`, and a literal is
//! negated when its bit is `0`. Maxterm mode is the dual: literals are joined with `OR`,
//! clauses with `AND`, and a literal is negated when its bit is `1`.
//!
//! # Examples
//!
//! ```
//! use qm_rs::qm::Qm;
//!
//! let qm = Qm::minterms(&["A", "B", "C"], &[1, 3, 5, 7]).unwrap();
//! assert_eq!(qm.function(), "(C)");
//! ```

use crate::term::Term;
use crate::types::{Bit, Mode};

/// Operator spellings used when rendering.
///
/// # Examples
///
/// ```
/// use qm_rs::qm::Qm;
/// use qm_rs::render::RenderConfig;
///
/// let qm = Qm::minterms(&["a", "b"], &[1, 2]).unwrap();
/// let config = RenderConfig {
///     not: "~",
///     and: " * ",
///     or: " + ",
/// };
/// assert_eq!(qm.render(&config), "(~a * b) + (a * ~b)");
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prefix of a negated literal (default: "NOT ")
    pub not: &'static str,
    /// Conjunction joiner (default: " AND ")
    pub and: &'static str,
    /// Disjunction joiner (default: " OR ")
    pub or: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            not: "NOT ",
            and: " AND ",
            or: " OR ",
        }
    }
}

impl RenderConfig {
    /// Joiner between literals of one clause.
    fn literal_joiner(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Minterm => self.and,
            Mode::Maxterm => self.or,
        }
    }

    /// Joiner between clauses.
    fn clause_joiner(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Minterm => self.or,
            Mode::Maxterm => self.and,
        }
    }
}

/// Constant text for an empty implicant list and for a single universal implicant.
fn constants(mode: Mode) -> (&'static str, &'static str) {
    match mode {
        Mode::Minterm => ("0", "1"),
        Mode::Maxterm => ("1", "0"),
    }
}

/// Renders `implicants` over `variables` with the default operator spellings.
pub fn render(implicants: &[Term], variables: &[String], mode: Mode) -> String {
    render_with_config(implicants, variables, mode, &RenderConfig::default())
}

/// Renders `implicants` over `variables`.
///
/// # Panics
///
/// Panics if an implicant pattern is wider than `variables`.
pub fn render_with_config(
    implicants: &[Term],
    variables: &[String],
    mode: Mode,
    config: &RenderConfig,
) -> String {
    let (empty, universal) = constants(mode);
    match implicants {
        [] => return empty.to_string(),
        [single] if single.pattern().is_universal() => return universal.to_string(),
        _ => {}
    }

    let clauses: Vec<String> = implicants
        .iter()
        .map(|term| render_clause(term, variables, mode, config))
        .collect();
    clauses.join(config.clause_joiner(mode))
}

fn render_clause(term: &Term, variables: &[String], mode: Mode, config: &RenderConfig) -> String {
    let pattern = term.pattern();
    assert!(
        pattern.width() <= variables.len(),
        "Pattern is wider than the variable list"
    );

    let negated = mode.negated_bit();
    let literals: Vec<String> = pattern
        .bits()
        .iter()
        .zip(variables)
        .filter(|&(&bit, _)| bit != Bit::DontCare)
        .map(|(&bit, name)| {
            if bit == negated {
                format!("{}{}", config.not, name)
            } else {
                name.clone()
            }
        })
        .collect();

    let body = literals.join(config.literal_joiner(mode));
    if pattern.is_universal() {
        body
    } else {
        format!("({})", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::initial_group;
    use crate::primes::prime_implicants;

    use test_log::test;

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_constants() {
        let v = vars(&["A", "B"]);
        assert_eq!(render(&[], &v, Mode::Minterm), "0");
        assert_eq!(render(&[], &v, Mode::Maxterm), "1");

        let all = prime_implicants(initial_group(0..4, 2));
        assert_eq!(render(&all, &v, Mode::Minterm), "1");
        assert_eq!(render(&all, &v, Mode::Maxterm), "0");
    }

    #[test]
    fn test_minterm_clause() {
        let v = vars(&["A", "B", "C"]);
        let t = Term::singleton(0b101, 3);
        assert_eq!(render(&[t], &v, Mode::Minterm), "(A AND NOT B AND C)");
    }

    #[test]
    fn test_maxterm_clause() {
        let v = vars(&["A", "B", "C"]);
        let t = Term::singleton(0b101, 3);
        assert_eq!(render(&[t], &v, Mode::Maxterm), "(NOT A OR B OR NOT C)");
    }

    #[test]
    fn test_dont_care_positions_skipped() {
        let v = vars(&["A", "B", "C"]);
        let primes = prime_implicants(initial_group([0, 1, 4, 5, 7], 3));
        // Primes in discovery order: 1-1, then -0-
        let text = render(&primes, &v, Mode::Minterm);
        assert_eq!(text, "(A AND C) OR (NOT B)");
        let text = render(&primes, &v, Mode::Maxterm);
        assert_eq!(text, "(NOT A OR NOT C) AND (B)");
    }

    #[test]
    fn test_custom_config() {
        let v = vars(&["x", "y"]);
        let config = RenderConfig {
            not: "!",
            and: "&",
            or: " | ",
        };
        let terms = [Term::singleton(0, 2), Term::singleton(3, 2)];
        assert_eq!(
            render_with_config(&terms, &v, Mode::Minterm, &config),
            "(!x&!y) | (x&y)"
        );
    }
}
