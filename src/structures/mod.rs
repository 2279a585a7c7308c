//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! The conjunction of clauses in the [clause database](crate::db::clause) is a formula, which is always equivalent to the formula given to the context on the current [valuation](valuation), though the two may differ as the database is rebased.
//!
//! ## Truth values
//!
//! A truth value is one of three things: true, false, or undefined.
//! Undefined is the value of any atom which has not (yet) been valued, and the lattice is flat: once an atom is true or false, it stays so.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
