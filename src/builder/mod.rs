/*!
Tools for building a context.

The library has one basic method for building a context: [add_clause](crate::context::Context::add_clause).
And, a formula written in DIMACS may be read into a fresh context with [from_dimacs](crate::context::Context::from_dimacs).

# Examples

A clause built from literals, and a single literal added as a (unit) clause.

```rust
# use otter_kernel::builder::ClauseOk;
# use otter_kernel::context::Context;
# use otter_kernel::structures::literal::{CLiteral, Literal};
# use otter_kernel::structures::valuation::TruthValue;
let mut the_context = Context::new(2).unwrap();
let p = CLiteral::positive(0);
let q = CLiteral::positive(1);

assert_eq!(the_context.add_clause(vec![p, -q]), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(vec![q, -q]), Ok(ClauseOk::Tautology));

assert_eq!(the_context.add_clause(q), Ok(ClauseOk::Added));
assert_eq!(the_context.value_of(1), Ok(TruthValue::True));
assert_eq!(the_context.add_clause(q), Ok(ClauseOk::Redundant));
```

# Unit clauses

The literal of a unit clause is assigned as soon as the clause is added, and so the value of the atom of the literal may be read without propagation.
If the atom already has the opposite value the formula is unsatisfiable, the (unit) clause is stored as a witness to this, and the context enters a [conflict state](crate::context::ContextState::Conflict).
*/

mod dimacs;

use crate::{
    context::{Context, ContextState},
    db::atom::AtomValue,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// The clause was a unit clause already satisfied by the valuation (and so was not added to the context).
    Redundant,
}

impl Context {
    /// Adds a clause to the context.
    ///
    /// Errors are returned, and nothing is changed, if the clause is empty or contains an atom outside of the context.
    /// Otherwise, repeated literals are removed (keeping the first occurrence of each) before the clause is stored.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        if clause.size() == 0 {
            return Err(ErrorKind::from(err::ClauseDBError::EmptyClause));
        }

        for atom in clause.atoms() {
            self.atom_db.check_atom(atom)?;
        }

        if clause.is_tautology() {
            log::trace!(target: targets::CLAUSE_DB, "Skipped tautology {}.", clause.as_string());
            return Ok(ClauseOk::Tautology);
        }

        let mut unique = CClause::with_capacity(clause.size());
        for literal in clause.literals() {
            if !unique.contains(&literal) {
                unique.push(literal);
            }
        }

        let unit = match unique[..] {
            [literal] => Some(literal),
            _ => None,
        };

        match unit {
            Some(literal) => match self.atom_db.assign(literal) {
                Ok(AtomValue::NotSet) => {
                    self.clause_db.store(unique)?;
                    self.note_input();
                    Ok(ClauseOk::Added)
                }

                Ok(AtomValue::Same) => Ok(ClauseOk::Redundant),

                Err(err::AtomDBError::ValuationConflict(_)) => {
                    log::info!(target: targets::CLAUSE_DB, "Unit clause {literal} conflicts with the valuation.");
                    let key = self.clause_db.store(unique)?;
                    if !matches!(self.state, ContextState::Conflict(_)) {
                        self.state = ContextState::Conflict(key);
                    }
                    Err(ErrorKind::FundamentalConflict)
                }

                Err(e) => Err(ErrorKind::from(e)),
            },

            None => {
                self.clause_db.store(unique)?;
                self.note_input();
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Notes fresh input, so propagation is no longer known to be at a fixpoint.
    ///
    /// A conflict state is kept.
    fn note_input(&mut self) {
        if self.state == ContextState::Fixpoint {
            self.state = ContextState::Input;
        }
    }
}
