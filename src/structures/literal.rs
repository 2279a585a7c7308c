//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, which packs an atom and a polarity into a single integer *code*:
//! - The positive literal of atom *a* has code 2*a* + 1.
//! - The negative literal of atom *a* has code 2*a*.
//!
//! So, the atom of a literal is its code shifted right by one, the polarity of a literal is its lowest bit, and negation flips the lowest bit.
//!
//! Codes are [u64]s, and so every [Atom] has a literal of each polarity, including atoms past [ATOM_MAX](crate::structures::atom::ATOM_MAX).
//! Such literals are never part of a context, and adding them is an [OutOfRange](crate::types::err::AtomDBError::OutOfRange) error.
//!
//! ```rust
//! # use otter_kernel::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let literal = CLiteral::new(atom, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.code(), 159);
//!
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), CLiteral::negative(79));
//! assert_eq!(-(-literal), literal);
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//!     For a [CLiteral] this is the order of codes.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indicies of maps, etc.
//!
//! In DIMACS an integer is used, with the sign of the integer indicating the polarity of the literal and the absolute value one more than the atom.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's DIMACS integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical representation of a literal, as an atom and polarity packed into a single integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    code: u64,
}

impl CLiteral {
    /// The literal asserting the atom is true.
    pub fn positive(atom: Atom) -> Self {
        Self {
            code: ((atom as u64) << 1) | 1,
        }
    }

    /// The literal asserting the atom is false.
    pub fn negative(atom: Atom) -> Self {
        Self {
            code: (atom as u64) << 1,
        }
    }

    /// The literal with the given code.
    pub fn from_code(code: u64) -> Self {
        Self { code }
    }

    /// The integer from which the atom and polarity of the literal are recovered.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// The literal written as the given (non-zero) DIMACS integer, if the integer is not zero and the atom is representable.
    ///
    /// ```rust
    /// # use otter_kernel::structures::literal::{CLiteral, Literal};
    /// assert_eq!(CLiteral::from_int(-3), Some(CLiteral::negative(2)));
    /// assert_eq!(CLiteral::from_int(0), None);
    /// ```
    pub fn from_int(int: isize) -> Option<Self> {
        let atom = int.unsigned_abs().checked_sub(1)?;
        let atom = Atom::try_from(atom).ok()?;
        if atom > crate::structures::atom::ATOM_MAX {
            return None;
        }
        Some(Self::new(atom, int.is_positive()))
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => Self::positive(atom),
            false => Self::negative(atom),
        }
    }

    fn negate(&self) -> Self {
        Self {
            code: self.code ^ 1,
        }
    }

    fn atom(&self) -> Atom {
        (self.code >> 1) as Atom
    }

    fn polarity(&self) -> bool {
        self.code & 1 == 1
    }

    fn as_int(&self) -> isize {
        let int = self.atom() as isize + 1;
        match self.polarity() {
            true => int,
            false => -int,
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity() {
            true => write!(f, "x{}", self.atom()),
            false => write!(f, "¬x{}", self.atom()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::atom::ATOM_MAX;

    #[test]
    fn involution() {
        for atom in [0, 1, 2, 97, crate::structures::atom::ATOM_MAX] {
            let p = CLiteral::positive(atom);
            let n = CLiteral::negative(atom);

            assert_eq!(p.negate(), n);
            assert_eq!(n.negate(), p);
            assert_eq!(p.negate().negate(), p);

            assert_eq!(p.atom(), atom);
            assert_eq!(n.atom(), atom);
            assert_eq!(p.negate().atom(), p.atom());

            assert!(p.polarity());
            assert!(!n.polarity());
            assert_ne!(p, n);
        }
    }

    #[test]
    fn code_recovery() {
        let literal = CLiteral::negative(41);
        assert_eq!(CLiteral::from_code(literal.code()), literal);
        assert_eq!(literal.code(), 82);
        assert_eq!(CLiteral::positive(41).code(), 83);
    }

    #[test]
    fn dimacs_ints() {
        assert_eq!(CLiteral::positive(0).as_int(), 1);
        assert_eq!(CLiteral::negative(0).as_int(), -1);
        assert_eq!(CLiteral::from_int(7), Some(CLiteral::positive(6)));
        assert_eq!(CLiteral::from_int(-1), Some(CLiteral::negative(0)));
        assert_eq!(CLiteral::from_int(0), None);

        for int in [-12, -1, 1, 5] {
            assert_eq!(CLiteral::from_int(int).map(|l| l.as_int()), Some(int));
        }
    }

    #[test]
    fn order() {
        let mut literals = vec![
            CLiteral::positive(2),
            CLiteral::negative(2),
            CLiteral::positive(0),
            CLiteral::negative(1),
        ];
        literals.sort();
        assert_eq!(
            literals,
            vec![
                CLiteral::positive(0),
                CLiteral::negative(1),
                CLiteral::negative(2),
                CLiteral::positive(2),
            ]
        );
    }

    #[test]
    fn beyond_atom_max() {
        for atom in [ATOM_MAX + 1, 1 << 31, Atom::MAX] {
            assert_eq!(CLiteral::positive(atom).atom(), atom);
            assert_eq!(CLiteral::negative(atom).atom(), atom);
            assert_eq!(CLiteral::positive(atom).negate(), CLiteral::negative(atom));
            assert_ne!(CLiteral::positive(atom).atom(), 0);
        }
        assert_eq!(CLiteral::positive(Atom::MAX).as_int(), Atom::MAX as isize + 1);
    }

    #[test]
    fn display() {
        assert_eq!(CLiteral::positive(3).to_string(), "x3");
        assert_eq!(CLiteral::negative(3).to_string(), "¬x3");
    }
}
