//! Error types used in the library.
//!
//! - Some of these are caller misuse --- e.g. an atom outside of the context, or an empty clause.
//!   These are reported before any mutation, and the context may continue to be used.
//! - Some of these are expected --- e.g. a [FundamentalConflict](ErrorKind::FundamentalConflict) is the outcome of propagation on an unsatisfiable formula.
//!   In this case the context remains in a conflict state, and recovery requires some form of backtracking (which is not part of the library).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, literal::CLiteral};

/// The general error type, wrapping the errors of each part of the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error from the [atom database](crate::db::atom).
    AtomDB(AtomDBError),

    /// An error from the [clause database](crate::db::clause).
    ClauseDB(ClauseDBError),

    /// An error while parsing a formula.
    Parse(ParseError),

    /// The formula is unsatisfiable on the current valuation.
    /// As no decisions are made, the formula is unsatisfiable.
    FundamentalConflict,

    /// Some request was made which does not make sense given the state of the context.
    InvalidState,
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// The atom is not part of the context.
    OutOfRange(Atom),

    /// The atom of the literal already has the opposite value.
    ValuationConflict(CLiteral),

    /// More atoms were requested than may be represented, or than space could be found for.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// No clause is stored with the given key.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input, or no problem specification.
    ProblemSpecification,

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
