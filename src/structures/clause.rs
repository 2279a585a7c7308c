//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_kernel::structures::literal::{CLiteral, Literal};
//! # use otter_kernel::structures::clause::{Clause, ClauseStatus};
//! # use otter_kernel::structures::valuation::TruthValue;
//! let clause = vec![CLiteral::new(3, true),
//!                   CLiteral::new(1, false),
//!                   CLiteral::new(0, false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_string(), "[x3 ∨ ¬x1 ∨ ¬x0]");
//!
//! let mut some_valuation = vec![TruthValue::True; 4];
//! some_valuation[3] = TruthValue::False;
//! assert_eq!(clause.status(&some_valuation), ClauseStatus::Falsified);
//!
//! some_valuation[1] = TruthValue::Undefined;
//! assert_eq!(clause.status(&some_valuation), ClauseStatus::Unit(CLiteral::new(1, false)));
//! assert_eq!(clause.rebase(&some_valuation), Some(vec![CLiteral::new(1, false)]));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::{TruthValue, Valuation},
};

/// The clause trait.
pub trait Clause {
    /// A string representation of the clause, with literals joined by '∨' and the whole in brackets.
    fn as_string(&self) -> String {
        let literals = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        format!("[{}]", literals.join(" ∨ "))
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self
            .literals()
            .map(|literal| literal.as_int().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !dimacs_string.is_empty() {
                dimacs_string.push(' ');
            }
            dimacs_string.push('0');
        }
        dimacs_string
    }

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order of the literals of the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// The status of the clause on the given valuation, determined in a single pass through the clause.
    fn status(&self, valuation: &impl Valuation) -> ClauseStatus {
        let mut undefined_count = 0;
        let mut undefined_literal = None;

        for literal in self.literals() {
            match valuation.literal_value(literal) {
                TruthValue::True => return ClauseStatus::Satisfied,
                TruthValue::False => {}
                TruthValue::Undefined => {
                    undefined_count += 1;
                    if undefined_literal.is_none() {
                        undefined_literal = Some(literal);
                    }
                }
            }
        }

        match (undefined_count, undefined_literal) {
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            (0, _) => ClauseStatus::Falsified,
            _ => ClauseStatus::Undecided,
        }
    }

    /// The clause simplified against the given valuation.
    ///
    /// - None, if some literal of the clause is true (the clause is satisfied and has nothing further to say).
    /// - Otherwise, the literals of the clause without a value, in order.
    ///   In particular, the empty clause if every literal is false.
    fn rebase(&self, valuation: &impl Valuation) -> Option<CClause> {
        let mut rebased = CClause::default();
        for literal in self.literals() {
            match valuation.literal_value(literal) {
                TruthValue::True => return None,
                TruthValue::False => {}
                TruthValue::Undefined => rebased.push(literal),
            }
        }
        Some(rebased)
    }

    /// True if the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        for literal in self.literals() {
            if seen.contains(&literal.negate()) {
                return true;
            }
            seen.insert(literal);
        }
        false
    }
}

/// The implementation of a clause as a vector of literals.
pub type CClause = Vec<CLiteral>;

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false.
    Falsified,

    /// No literal is true and exactly one literal is without a value, and so must be made true.
    Unit(CLiteral),

    /// No literal is true and at least two literals are without a value.
    Undecided,
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(atom: Atom) -> CLiteral {
        CLiteral::positive(atom)
    }

    fn n(atom: Atom) -> CLiteral {
        CLiteral::negative(atom)
    }

    #[test]
    fn status_single_pass() {
        let valuation = vec![TruthValue::True, TruthValue::Undefined, TruthValue::Undefined];

        assert_eq!(vec![n(0), p(1), p(2)].status(&valuation), ClauseStatus::Undecided);
        assert_eq!(vec![n(0), p(1)].status(&valuation), ClauseStatus::Unit(p(1)));
        assert_eq!(vec![n(1), p(0)].status(&valuation), ClauseStatus::Satisfied);
        assert_eq!(vec![n(0)].status(&valuation), ClauseStatus::Falsified);
        assert_eq!(CClause::new().status(&valuation), ClauseStatus::Falsified);
    }

    #[test]
    fn rebase_soundness() {
        let valuation = vec![TruthValue::False, TruthValue::Undefined, TruthValue::True];

        assert_eq!(vec![p(0), p(1), n(2)].rebase(&valuation), Some(vec![p(1)]));
        assert_eq!(vec![p(0), n(2)].rebase(&valuation), Some(vec![]));
        assert_eq!(vec![p(0), p(2)].rebase(&valuation), None);
        assert_eq!(vec![p(1), n(1)].rebase(&valuation), Some(vec![p(1), n(1)]));
    }

    #[test]
    fn strings() {
        let clause = vec![p(0), n(4)];
        assert_eq!(clause.as_string(), "[x0 ∨ ¬x4]");
        assert_eq!(clause.as_dimacs(true), "1 -5 0");
        assert_eq!(clause.as_dimacs(false), "1 -5");
        assert_eq!(CClause::new().as_string(), "[]");
        assert_eq!(p(2).as_string(), "[x2]");
    }

    #[test]
    fn tautology() {
        assert!(vec![p(0), p(1), n(0)].is_tautology());
        assert!(!vec![p(0), p(1), p(0)].is_tautology());
    }
}
