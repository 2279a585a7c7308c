/*!
Databases for holding information relevant to propagation.

- The [atom database](crate::db::atom) holds the valuation and the [trail](crate::db::trail) of assignments.
- The [clause database](crate::db::clause) holds the formula, as an arena of clauses accessed through [ClauseKey]s.
- The [consequence queue](crate::db::consequence_q) holds literals found to be forced, but not yet applied.

Each database is exclusively owned by a [context](crate::context), and only the atom database may mutate the value of an atom.
*/

pub mod atom;
pub mod clause;
pub mod consequence_q;
pub mod trail;

slotmap::new_key_type! {
    /// A key to access a clause stored in the [clause database](crate::db::clause).
    ///
    /// A key is fixed for the life of the clause, even as the literals of the clause are rebased.
    pub struct ClauseKey;
}
