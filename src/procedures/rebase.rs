/*!
Simplification of the formula of a context against the current valuation.

For each clause of the [clause database](crate::db::clause):
- If some literal of the clause is true, the clause is dropped.
- Otherwise, the clause is replaced by its literals without a value, in order.

So, a clause whose literals are all false is replaced by the empty clause, and a clause with exactly one literal without a value is replaced by a unit clause.
For details on a single clause, see [Clause::rebase].

A rebase is a pure read of the context.
The clause database is rewritten with a rebase only during [propagation](crate::procedures::propagate).

```rust
# use otter_kernel::context::Context;
# use otter_kernel::structures::literal::{CLiteral, Literal};
let mut the_context = Context::new(3).unwrap();
let [p, q, r] = [0, 1, 2].map(CLiteral::positive);

assert!(the_context.add_clause(vec![p, q, r]).is_ok());
assert!(the_context.add_clause(vec![p, -q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());

assert_eq!(the_context.rebase(), vec![vec![q, r], vec![-q]]);
assert_eq!(the_context.clause_db.clause_count(), 3);
```
*/

use crate::{
    context::Context,
    db::ClauseKey,
    structures::clause::{CClause, Clause},
};

impl Context {
    /// The clauses of the context, simplified against the current valuation.
    pub fn rebase(&self) -> Vec<CClause> {
        self.rebase_keyed()
            .into_iter()
            .map(|(_, clause)| clause)
            .collect()
    }

    /// As [rebase](Context::rebase), with each simplified clause paired with the key of the clause it was simplified from.
    pub fn rebase_keyed(&self) -> Vec<(ClauseKey, CClause)> {
        let valuation = self.atom_db.valuation();
        self.clause_db
            .iter()
            .filter_map(|(key, clause)| clause.rebase(valuation).map(|rebased| (key, rebased)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        context::Context,
        structures::{
            clause::{Clause, ClauseStatus},
            literal::{CLiteral, Literal},
        },
    };

    #[test]
    fn rebase_is_pure() {
        let mut the_context = Context::new(4).unwrap();
        let [p, q, r, s] = [0, 1, 2, 3].map(CLiteral::positive);

        assert!(the_context.add_clause(vec![p, -q, r]).is_ok());
        assert!(the_context.add_clause(vec![q, s]).is_ok());
        assert!(the_context.add_clause(q).is_ok());

        let before = the_context.clause_db.literal_count();
        let rebased = the_context.rebase();
        assert_eq!(rebased, vec![vec![p, r]]);
        assert_eq!(the_context.rebase(), rebased);
        assert_eq!(the_context.clause_db.literal_count(), before);
    }

    #[test]
    fn rebase_soundness() {
        let mut the_context = Context::new(3).unwrap();
        let [p, q, r] = [0, 1, 2].map(CLiteral::positive);

        assert!(the_context.add_clause(vec![p, q, r]).is_ok());
        assert!(the_context.add_clause(vec![-q, -r]).is_ok());
        assert!(the_context.add_clause(-p).is_ok());
        assert!(the_context.add_clause(-q).is_ok());

        let valuation = the_context.atom_db.valuation();
        for (key, rebased) in the_context.rebase_keyed() {
            let original = the_context.clause_db.get(key).unwrap();
            assert_ne!(original.status(valuation), ClauseStatus::Satisfied);
            for literal in rebased.literals() {
                assert!(original.contains(&literal));
                assert_eq!(the_context.value_of(literal.atom()), Ok(Default::default()));
            }
        }

        assert_eq!(the_context.rebase(), vec![vec![r]]);
    }
}
