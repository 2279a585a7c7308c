//! A kernel for determining the consequences of formulas written in conjunctive normal form by unit propagation.
//!
//! otter_kernel stores a conjunction of clauses over a fixed collection of atoms and determines, by unit propagation, whether the current partial valuation is forced, satisfied, or contradictory.
//! There is no search: no decisions, no backtracking, no clause learning.
//! The kernel is intended as the lowest layer of a solver, and as a small, readable instance of the core structures of one.
//!
//! # Orientation
//!
//! The library is designed around a [context], to which clauses are added and within which propagation takes place.
//!
//! Internally, and at a high level, propagation is viewed in terms of two databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation, together with the order in which atoms were valued, is stored in an [atom database](crate::db::atom).
//!
//! Useful starting points, then, may be:
//! - The [propagation procedure](crate::procedures::propagate) to inspect the dynamics of propagation.
//! - The [rebase procedure](crate::procedures::rebase) to inspect how a formula is simplified against a valuation.
//! - The [structures] to familiarise yourself with the representation of atoms, literals, and clauses.
//!
//! # Examples
//!
//! + Propagate a chain of implications.
//!
//! ```rust
//! # use otter_kernel::context::Context;
//! # use otter_kernel::reports::Report;
//! # use otter_kernel::structures::literal::{CLiteral, Literal};
//! # use otter_kernel::structures::valuation::TruthValue;
//! let mut the_context = Context::new(3).unwrap();
//!
//! let [p, q, r] = [0, 1, 2].map(CLiteral::positive);
//!
//! assert!(the_context.add_clause(p).is_ok());
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-q, r, p]).is_ok());
//!
//! assert!(the_context.unit_propagate().is_ok());
//! assert_eq!(the_context.value_of(q.atom()), Ok(TruthValue::True));
//! assert_eq!(the_context.value_of(r.atom()), Ok(TruthValue::Undefined));
//! assert_eq!(the_context.report(), Report::Satisfiable);
//! ```
//!
//! + Read a DIMACS formula and find a conflict.
//!
//! ```rust
//! # use otter_kernel::context::Context;
//! # use otter_kernel::config::Config;
//! # use otter_kernel::reports::Report;
//! let dimacs = b"
//! p cnf 2 3
//!  1     0
//! -1  2  0
//! -2 -1  0
//! ";
//!
//! let mut the_context = Context::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
//! assert!(the_context.unit_propagate().is_err());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No log implementation is provided by the library, though the binary installs one when built with the `log` feature.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
