/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of [TruthValue]s, where each index of the vector is interpreted as an atom.
In other words, the canonical representation of a valuation 𝐯 is a vector *v* whose length is the number of atoms in the context such that:
-  *v*\[a\] = True *if any only if* 𝐯(a) = true.
-  *v*\[a\] = False *if any only if* 𝐯(a) = false.
-  *v*\[a\] = Undefined *if any only if* 𝐯(a) is undefined.

```rust
# use otter_kernel::structures::literal::{CLiteral, Literal};
# use otter_kernel::structures::valuation::{TruthValue, Valuation};
let valuation = vec![TruthValue::True, TruthValue::Undefined, TruthValue::False];

assert_eq!(valuation.value_of(1), Some(TruthValue::Undefined));
assert_eq!(valuation.value_of(3), None);
assert_eq!(valuation.literal_value(CLiteral::negative(2)), TruthValue::True);
assert_eq!(valuation.unvalued_atoms().count(), 1);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The value of an atom, or of a literal, on some valuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TruthValue {
    /// No value has been given.
    #[default]
    Undefined,

    /// True.
    True,

    /// False.
    False,
}

impl TruthValue {
    /// True if the value is not [Undefined](TruthValue::Undefined).
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// The value as a boolean, if defined.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Undefined => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl std::ops::Not for TruthValue {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Undefined => Self::Undefined,
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }
}

impl std::fmt::Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
        }
    }
}

/// The canonical representation of a valuation.
pub type CValuation = Vec<TruthValue>;

/// A valuation is something which stores some value of an atom, perhaps [Undefined](TruthValue::Undefined).
pub trait Valuation {
    /// The value of an atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<TruthValue>;

    /// The value of a literal under the valuation.
    ///
    /// A literal whose atom is not part of the valuation is [Undefined](TruthValue::Undefined).
    fn literal_value(&self, literal: CLiteral) -> TruthValue {
        match self.value_of(literal.atom()) {
            Some(value) if literal.polarity() => value,
            Some(value) => !value,
            None => TruthValue::Undefined,
        }
    }

    /// An iterator through all (Atom, Value) pairs.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, TruthValue)>;

    /// An iterator through atoms which have some value.
    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter(|(_, value)| value.is_defined())
            .map(|(atom, _)| atom)
    }

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter(|(_, value)| !value.is_defined())
            .map(|(atom, _)| atom)
    }

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<TruthValue> {
        self.get(atom as usize).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, TruthValue)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (index as Atom, *value))
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation() {
        assert_eq!(!TruthValue::True, TruthValue::False);
        assert_eq!(!TruthValue::False, TruthValue::True);
        assert_eq!(!TruthValue::Undefined, TruthValue::Undefined);
    }

    #[test]
    fn literal_values() {
        let valuation: CValuation = vec![TruthValue::True, TruthValue::False, TruthValue::Undefined];

        assert_eq!(valuation.literal_value(CLiteral::positive(0)), TruthValue::True);
        assert_eq!(valuation.literal_value(CLiteral::negative(0)), TruthValue::False);
        assert_eq!(valuation.literal_value(CLiteral::positive(1)), TruthValue::False);
        assert_eq!(valuation.literal_value(CLiteral::negative(1)), TruthValue::True);
        assert_eq!(valuation.literal_value(CLiteral::negative(2)), TruthValue::Undefined);
        assert_eq!(valuation.literal_value(CLiteral::positive(9)), TruthValue::Undefined);

        assert_eq!(valuation.valued_atoms().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![2]);
    }
}
