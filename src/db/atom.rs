/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- The current (often partial) [valuation](Valuation).
- The [trail](Trail) of assignments, in order.

# Invariants

- The count of atoms is fixed when the database is made.
- The value of an atom is only ever changed through [assign](AtomDB::assign), and only from [Undefined](TruthValue::Undefined).
  An attempt to assign an atom the value opposite to its current value is a conflict, and leaves the database unchanged.
- Every change to the valuation is recorded on the trail.

```rust
# use otter_kernel::db::atom::{AtomDB, AtomValue};
# use otter_kernel::structures::literal::{CLiteral, Literal};
# use otter_kernel::structures::valuation::TruthValue;
# use otter_kernel::types::err;
let mut atom_db = AtomDB::new(2).unwrap();
let p = CLiteral::positive(0);

assert_eq!(atom_db.assign(p), Ok(AtomValue::NotSet));
assert_eq!(atom_db.assign(p), Ok(AtomValue::Same));
assert_eq!(atom_db.assign(-p), Err(err::AtomDBError::ValuationConflict(-p)));

assert_eq!(atom_db.value_of(0), Ok(TruthValue::True));
assert_eq!(atom_db.value_of(2), Err(err::AtomDBError::OutOfRange(2)));
assert_eq!(atom_db.trail().literals(), &[p]);
```
*/

use crate::{
    db::trail::Trail,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        valuation::{CValuation, TruthValue, Valuation},
    },
    types::err::{self},
};

/// The atom database.
#[derive(Clone, Debug)]
pub struct AtomDB {
    /// The current (often partial) [valuation](Valuation).
    valuation: CValuation,

    /// The assignments made, in order.
    trail: Trail,
}

/// The status of the valuation of an atom, relative to some literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom had no value.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,
}

impl AtomDB {
    /// A new [AtomDB] with `count` atoms, each without a value.
    ///
    /// The valuation is allocated up front, and failure to allocate is [AtomsExhausted](err::AtomDBError::AtomsExhausted) rather than an abort.
    pub fn new(count: usize) -> Result<Self, err::AtomDBError> {
        if count > ATOM_MAX as usize + 1 {
            return Err(err::AtomDBError::AtomsExhausted);
        }

        let mut valuation = CValuation::new();
        if valuation.try_reserve_exact(count).is_err() {
            log::error!(target: targets::VALUATION, "Unable to allocate a valuation for {count} atoms.");
            return Err(err::AtomDBError::AtomsExhausted);
        }
        valuation.resize(count, TruthValue::Undefined);

        Ok(AtomDB {
            valuation,
            trail: Trail::default(),
        })
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// The trail of assignments made.
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Ok if the atom is part of the database, otherwise an [OutOfRange](err::AtomDBError::OutOfRange) error.
    pub fn check_atom(&self, atom: Atom) -> Result<(), err::AtomDBError> {
        match (atom as usize) < self.valuation.len() {
            true => Ok(()),
            false => Err(err::AtomDBError::OutOfRange(atom)),
        }
    }

    /// The current value of an atom.
    pub fn value_of(&self, atom: Atom) -> Result<TruthValue, err::AtomDBError> {
        self.valuation
            .value_of(atom)
            .ok_or(err::AtomDBError::OutOfRange(atom))
    }

    /// True if the atom of the literal has a value matching the polarity of the literal.
    ///
    /// A literal whose atom is not part of the database is neither satisfied nor falsified.
    pub fn is_satisfied(&self, literal: CLiteral) -> bool {
        self.valuation.literal_value(literal) == TruthValue::True
    }

    /// True if the atom of the literal has a value conflicting with the polarity of the literal.
    pub fn is_falsified(&self, literal: CLiteral) -> bool {
        self.valuation.literal_value(literal) == TruthValue::False
    }

    /// Assigns the atom of the literal the polarity of the literal, if the atom has no value.
    ///
    /// - If the atom has no value, the value is set and the literal is stored on the trail.
    /// - If the atom already has the same value, nothing happens.
    /// - If the atom has the opposite value, a [ValuationConflict](err::AtomDBError::ValuationConflict) error is returned and nothing happens.
    pub fn assign(&mut self, literal: CLiteral) -> Result<AtomValue, err::AtomDBError> {
        let atom = literal.atom();
        let value = TruthValue::from(literal.polarity());

        let Some(current) = self.valuation.get_mut(atom as usize) else {
            return Err(err::AtomDBError::OutOfRange(atom));
        };

        match *current {
            TruthValue::Undefined => {
                *current = value;
                self.trail.store_assignment(literal);
                log::trace!(target: targets::VALUATION, "Assigned {literal}.");
                Ok(AtomValue::NotSet)
            }

            existing if existing == value => Ok(AtomValue::Same),

            _ => {
                log::trace!(target: targets::VALUATION, "Assignment of {literal} conflicts.");
                Err(err::AtomDBError::ValuationConflict(literal))
            }
        }
    }

    /// The valuation as a string of DIMACS literals, omitting atoms without a value.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .atom_value_pairs()
            .filter_map(|(atom, value)| {
                value
                    .as_bool()
                    .map(|polarity| CLiteral::new(atom, polarity).as_int().to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
