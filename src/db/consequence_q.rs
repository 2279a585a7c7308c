/*!
A queue of observed consequences to be applied.

Observed consequences are literals which *must* be true on the current valuation, together with the key of the (unit) clause which forces the literal.

The queue is used when [propagating with a queue](crate::procedures::apply_consequences).
There, each round of propagation rebases the clause database and queues the literal of each unit clause found, and the queue is then drained one literal at a time.

# Invariants

- A literal is on the queue at most once.
- A literal is queued only if it had no value at the time it was queued.
  Still, by the time the literal is taken from the queue its atom may have been valued (by way of some other literal on the queue), and so taking a literal from the queue always goes through [assign](crate::db::atom::AtomDB::assign).
*/

use std::collections::{HashSet, VecDeque};

use crate::{db::ClauseKey, misc::log::targets::QUEUE, structures::literal::CLiteral};

/// A queue of forced literals and the clauses which force them.
#[derive(Clone, Debug, Default)]
pub struct ConsequenceQ {
    queue: VecDeque<(CLiteral, ClauseKey)>,

    /// The literals on the queue.
    queued: HashSet<CLiteral>,
}

impl ConsequenceQ {
    /// Queues the literal, unless the literal is already queued.
    ///
    /// Returns true if the literal was queued.
    pub fn push(&mut self, literal: CLiteral, key: ClauseKey) -> bool {
        if !self.queued.insert(literal) {
            return false;
        }
        log::trace!(target: QUEUE, "Queued {literal} from {key:?}.");
        self.queue.push_back((literal, key));
        true
    }

    /// Takes the oldest consequence from the queue.
    pub fn pop(&mut self) -> Option<(CLiteral, ClauseKey)> {
        let (literal, key) = self.queue.pop_front()?;
        self.queued.remove(&literal);
        Some((literal, key))
    }

    /// A count of queued consequences.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes all queued consequences.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.queued.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn unique_entries() {
        let mut keys: SlotMap<ClauseKey, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());

        let p = CLiteral::positive(0);
        let mut q = ConsequenceQ::default();

        assert!(q.push(p, a));
        assert!(!q.push(p, b));
        assert!(q.push(-p, b));
        assert_eq!(q.len(), 2);

        assert_eq!(q.pop(), Some((p, a)));
        assert_eq!(q.pop(), Some((-p, b)));
        assert!(q.is_empty());
    }

    #[test]
    fn requeue_after_pop() {
        let mut keys: SlotMap<ClauseKey, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());

        let [p, q] = [0, 1].map(CLiteral::positive);
        let mut queue = ConsequenceQ::default();

        assert!(queue.push(p, a));
        assert!(queue.push(q, a));
        assert_eq!(queue.pop(), Some((p, a)));

        assert!(queue.push(p, b));
        assert!(!queue.push(q, b));
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.push(q, b));
    }
}
