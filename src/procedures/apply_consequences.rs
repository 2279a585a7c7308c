/*!
Unit propagation with a queue of consequences.

See [propagate](crate::procedures::propagate) for an overview of unit propagation.

# Overview

Applying consequences sequences two more basic procedures in a loop:
- [Rebase](crate::procedures::rebase) the formula, queue the literal of each unit clause, and replace the clause database with the rebase.
- Take a queued consequence, and make the literal of the consequence true.

```rust,ignore
self.rebase_and_queue()?;
while let Some((literal, key)) = self.consequence_q.pop() {
    match self.atom_db.assign(literal) {
        Ok(AtomValue::NotSet) => self.rebase_and_queue()?,
        Ok(AtomValue::Same) => {}
        Err(ValuationConflict(_)) => return Err(self.note_conflict(key)),
        ...
    }
}
self.state = ContextState::Fixpoint;
```

A rebase which contains the empty clause is a conflict, and in this case the clause database is not replaced.
So, the conflict clause of the context is the clause as stored before the conflict.

As the clause database is replaced by each rebase, once a fixpoint is reached every stored clause has at least two literals, and each of those literals is without a value.
*/

use crate::{
    context::{Context, ContextState},
    db::atom::AtomValue,
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Applies queued consequences, until there are no consequences to apply or a conflict is found.
    pub(crate) fn apply_consequences(&mut self) -> Result<(), ErrorKind> {
        self.consequence_q.clear();
        self.rebase_and_queue()?;

        while let Some((literal, key)) = self.consequence_q.pop() {
            self.counters.rounds += 1;

            match self.atom_db.assign(literal) {
                Ok(AtomValue::NotSet) => {
                    log::trace!(target: targets::PROPAGATION, "{literal} forced by {key:?}.");
                    self.counters.forced += 1;
                    self.rebase_and_queue()?;
                }

                Ok(AtomValue::Same) => {}

                Err(err::AtomDBError::ValuationConflict(_)) => {
                    return Err(self.note_conflict(key));
                }

                Err(e) => return Err(ErrorKind::from(e)),
            }
        }

        log::trace!(target: targets::PROPAGATION, "Fixpoint after {} rounds.", self.counters.rounds);
        self.state = ContextState::Fixpoint;
        Ok(())
    }

    /// Rebases the clause database, queueing the literal of each unit clause.
    fn rebase_and_queue(&mut self) -> Result<(), ErrorKind> {
        let rebased = self.rebase_keyed();
        self.counters.rebases += 1;
        log::trace!(target: targets::REBASE, "Rebase to {} clauses.", rebased.len());

        for (key, clause) in &rebased {
            match clause[..] {
                [] => return Err(self.note_conflict(*key)),

                [literal] => {
                    self.consequence_q.push(literal, *key);
                }

                _ => {}
            }
        }

        self.clause_db.replace(rebased);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Config, PropagationMode},
        context::{Context, ContextState},
        structures::{
            clause::Clause,
            literal::{CLiteral, Literal},
            valuation::TruthValue,
        },
        types::err::ErrorKind,
    };

    fn queue_context(atoms: usize) -> Context {
        let config = Config {
            propagation: PropagationMode::Queue,
            ..Default::default()
        };
        Context::from_config(config, atoms).unwrap()
    }

    #[test]
    fn residue_is_unvalued() {
        let mut the_context = queue_context(5);
        let [p, q, r, s, t] = [0, 1, 2, 3, 4].map(CLiteral::positive);

        assert!(the_context.add_clause(vec![-p, q]).is_ok());
        assert!(the_context.add_clause(vec![-q, r, s]).is_ok());
        assert!(the_context.add_clause(vec![-r, s, t]).is_ok());
        assert!(the_context.add_clause(p).is_ok());

        assert!(the_context.unit_propagate().is_ok());
        assert_eq!(the_context.value_of(q.atom()), Ok(TruthValue::True));

        for (_, clause) in the_context.clause_db.iter() {
            assert!(clause.size() >= 2);
            for literal in clause.literals() {
                assert_eq!(the_context.value_of(literal.atom()), Ok(TruthValue::Undefined));
            }
        }
        assert_eq!(the_context.clause_db.clause_count(), 2);
    }

    #[test]
    fn conflict_keeps_stored_clause() {
        let mut the_context = queue_context(2);
        let [p, q] = [0, 1].map(CLiteral::positive);

        assert!(the_context.add_clause(vec![-p, q]).is_ok());
        assert!(the_context.add_clause(vec![-p, -q]).is_ok());
        assert!(the_context.add_clause(p).is_ok());

        assert_eq!(the_context.unit_propagate(), Err(ErrorKind::FundamentalConflict));
        assert!(matches!(the_context.state, ContextState::Conflict(_)));

        let conflict = the_context.conflict_clause().unwrap();
        assert!(conflict.literals().all(|literal| the_context.is_falsified(literal)));
    }
}
