/*!
Unit propagation, to a fixpoint or a conflict.

See [Context::unit_propagate] for the relevant context method.

# Overview

A clause on a valuation is unit if no literal of the clause is true and exactly one literal of the clause has no value.
In this case the literal without a value must be made true, for otherwise the clause would be false.

Unit propagation repeatedly makes true the literal of each unit clause, until either:
- No clause is unit (a *fixpoint*), or:
- Some clause has every literal false (a *conflict*).

As no decisions are made, a conflict shows the formula is unsatisfiable.
So, a conflict is terminal, and any further call to propagate returns the conflict without doing anything.

# Variations

Two variations of unit propagation are supported, selected by [PropagationMode].

- [Scan](PropagationMode::Scan) examines every clause in turn, making true the literal of each unit clause found, and repeats the scan until a scan makes nothing true.
  The status of each clause is determined by a single pass through the clause, see [Clause::status].
- [Queue](PropagationMode::Queue) rebases the formula and queues the literal of each unit clause, then makes true each queued literal in turn, rebasing the formula after each.
  See [apply_consequences](crate::procedures::apply_consequences).

On a formula without a conflict each variation makes true exactly the same literals, as the literals made true are those of the (unique) closure of the formula under unit resolution.
And, a conflict is found by one variation if and only if a conflict is found by the other.

```rust
# use otter_kernel::context::{Context, ContextState};
# use otter_kernel::structures::literal::{CLiteral, Literal};
# use otter_kernel::types::err::ErrorKind;
let mut the_context = Context::new(3).unwrap();
let [p, q, r] = [0, 1, 2].map(CLiteral::positive);

assert!(the_context.add_clause(vec![-p, q]).is_ok());
assert!(the_context.add_clause(vec![-q, r]).is_ok());
assert!(the_context.add_clause(vec![-q, -r]).is_ok());
assert!(the_context.add_clause(p).is_ok());

assert_eq!(the_context.unit_propagate(), Err(ErrorKind::FundamentalConflict));
assert!(matches!(the_context.state, ContextState::Conflict(_)));
assert_eq!(the_context.unit_propagate(), Err(ErrorKind::FundamentalConflict));
```
*/

use crate::{
    config::PropagationMode,
    context::{Context, ContextState},
    db::{atom::AtomValue, ClauseKey},
    misc::log::targets::{self},
    structures::clause::{Clause, ClauseStatus},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Propagates the formula of the context to a fixpoint or a conflict.
    ///
    /// Returns [FundamentalConflict](ErrorKind::FundamentalConflict) if some clause is falsified, and the context remains in a conflict state.
    pub fn unit_propagate(&mut self) -> Result<(), ErrorKind> {
        if let ContextState::Conflict(_) = self.state {
            log::trace!(target: targets::PROPAGATION, "Propagation on a context in conflict.");
            return Err(ErrorKind::FundamentalConflict);
        }

        self.state = ContextState::Propagating;
        log::trace!(target: targets::PROPAGATION, "Propagation by {}.", self.config.propagation);

        match self.config.propagation {
            PropagationMode::Scan => self.propagate_by_scan(),
            PropagationMode::Queue => self.apply_consequences(),
        }
    }

    /// Repeated scans of the clause database, until a scan makes no literal true.
    fn propagate_by_scan(&mut self) -> Result<(), ErrorKind> {
        loop {
            self.counters.rounds += 1;

            let mut forced = false;
            let mut conflict = None;

            'scan: for (key, clause) in self.clause_db.iter() {
                match clause.status(self.atom_db.valuation()) {
                    ClauseStatus::Satisfied | ClauseStatus::Undecided => {}

                    ClauseStatus::Falsified => {
                        conflict = Some(key);
                        break 'scan;
                    }

                    ClauseStatus::Unit(literal) => match self.atom_db.assign(literal) {
                        Ok(AtomValue::NotSet) => {
                            log::trace!(target: targets::PROPAGATION, "{literal} forced by {key:?}.");
                            self.counters.forced += 1;
                            forced = true;
                        }

                        Ok(AtomValue::Same) => {}

                        Err(err::AtomDBError::ValuationConflict(_)) => {
                            conflict = Some(key);
                            break 'scan;
                        }

                        Err(e) => return Err(ErrorKind::from(e)),
                    },
                }
            }

            if let Some(key) = conflict {
                return Err(self.note_conflict(key));
            }

            if !forced {
                break;
            }
        }

        if self.config.simplify {
            let rebased = self.rebase_keyed();
            self.counters.rebases += 1;
            self.clause_db.replace(rebased);
        }

        log::trace!(target: targets::PROPAGATION, "Fixpoint after {} rounds.", self.counters.rounds);
        self.state = ContextState::Fixpoint;
        Ok(())
    }

    /// Notes the clause with the given key is falsified, returning the error to return.
    pub(crate) fn note_conflict(&mut self, key: ClauseKey) -> ErrorKind {
        log::info!(target: targets::PROPAGATION, "Conflict with {key:?}.");
        self.consequence_q.clear();
        self.state = ContextState::Conflict(key);
        ErrorKind::FundamentalConflict
    }
}
