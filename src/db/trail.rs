//! A record of assignments, in the order the assignments were made.
//!
//! The trail is append-only, as nothing is ever unassigned by the library.
//! Still, the order of assignments is exactly the undo log a backtracking layer needs: clearing the value of each atom from some position to the end of the trail restores the valuation at that position.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The trail of assignments.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    literals: Vec<CLiteral>,
}

impl Trail {
    /// Stores an assignment, represented as a literal.
    pub(crate) fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The assignments made, in order of assignment.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The atom valued at the given position of the trail, if some atom was.
    pub fn atom_at(&self, position: usize) -> Option<Atom> {
        self.literals.get(position).map(|literal| literal.atom())
    }

    /// The assignments made from the given position onwards, in order of assignment.
    pub fn assignments_from(&self, position: usize) -> &[CLiteral] {
        self.literals.get(position..).unwrap_or(&[])
    }

    /// A count of assignments made.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True if no assignment has been made.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        let mut trail = Trail::default();
        assert!(trail.is_empty());

        trail.store_assignment(CLiteral::positive(4));
        trail.store_assignment(CLiteral::negative(1));

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.atom_at(0), Some(4));
        assert_eq!(trail.atom_at(1), Some(1));
        assert_eq!(trail.atom_at(2), None);
        assert_eq!(trail.assignments_from(1), &[CLiteral::negative(1)]);
        assert!(trail.assignments_from(7).is_empty());
    }
}
