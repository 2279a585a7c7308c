/*!
A database of clauses, stored in an arena and accessed through [ClauseKey]s.

Clauses are stored exactly as given, after the checks of [add_clause](crate::context::Context::add_clause).
The database is then rewritten wholesale with the result of a [rebase](crate::procedures::rebase), either after each forced literal (when propagating with a queue) or at a fixpoint (when propagating by scan, and configured to simplify).

# Keys

A [ClauseKey] is fixed for the life of a clause.
So, when a clause is rebased its key continues to refer to the (shorter) clause, and when a clause is dropped due to being satisfied its key no longer refers to anything.

Propagation refers to clauses through keys only, and never holds a clause while the database is rewritten.
*/

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::{self},
};

/// The clause database.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    clauses: SlotMap<ClauseKey, CClause>,
}

impl ClauseDB {
    /// Stores a clause, returning the key to the clause.
    ///
    /// An empty clause is never stored.
    pub(crate) fn store(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            log::warn!(target: targets::CLAUSE_DB, "Attempt to store an empty clause.");
            return Err(err::ClauseDBError::EmptyClause);
        }

        let string = clause.as_string();
        let key = self.clauses.insert(clause);
        log::trace!(target: targets::CLAUSE_DB, "Stored {string} with key {key:?}.");
        Ok(key)
    }

    /// The clause stored with the given key.
    pub fn get(&self, key: ClauseKey) -> Result<&CClause, err::ClauseDBError> {
        self.clauses.get(key).ok_or(err::ClauseDBError::Missing)
    }

    /// An iterator over all stored clauses, together with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        self.clauses.iter()
    }

    /// A count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of the literals in all stored clauses.
    pub fn literal_count(&self) -> usize {
        self.clauses.values().map(|clause| clause.size()).sum()
    }

    /// True if no clause is stored.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Rewrites the database with a (keyed) rebase of the database.
    ///
    /// Each clause is replaced by the clause paired with its key in `rebased`, and any clause whose key does not appear is dropped.
    /// Keys in `rebased` which are not part of the database are ignored.
    pub(crate) fn replace(&mut self, rebased: Vec<(ClauseKey, CClause)>) {
        let before = self.clauses.len();
        let mut rebased: HashMap<ClauseKey, CClause> = rebased.into_iter().collect();

        self.clauses
            .retain(|key, clause| match rebased.remove(&key) {
                Some(fresh) => {
                    *clause = fresh;
                    true
                }
                None => false,
            });

        log::trace!(target: targets::CLAUSE_DB, "Replaced {before} clauses with {}.", self.clauses.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::CLiteral;

    #[test]
    fn empty_rejected() {
        let mut clause_db = ClauseDB::default();
        assert_eq!(clause_db.store(vec![]), Err(err::ClauseDBError::EmptyClause));
        assert!(clause_db.is_empty());
    }

    #[test]
    fn replace_keeps_keys() {
        let mut clause_db = ClauseDB::default();
        let [p, q, r] = [0, 1, 2].map(CLiteral::positive);

        let a = clause_db.store(vec![p, q, r]).unwrap();
        let b = clause_db.store(vec![-p, q]).unwrap();
        let c = clause_db.store(vec![-q, -r]).unwrap();
        assert_eq!(clause_db.literal_count(), 7);

        clause_db.replace(vec![(a, vec![q, r]), (c, vec![-q, -r])]);

        assert_eq!(clause_db.clause_count(), 2);
        assert_eq!(clause_db.get(a), Ok(&vec![q, r]));
        assert_eq!(clause_db.get(b), Err(err::ClauseDBError::Missing));
        assert_eq!(clause_db.get(c), Ok(&vec![-q, -r]));
    }
}
