/*!
The context --- to which clauses are added and within which propagation takes place.

A context exclusively owns an [atom database](crate::db::atom) and a [clause database](crate::db::clause), together with the [configuration](crate::config) fixed when the context was made.

# Example
```rust
# use otter_kernel::context::{Context, ContextState};
# use otter_kernel::config::{Config, PropagationMode};
# use otter_kernel::reports::Report;
# use otter_kernel::structures::literal::{CLiteral, Literal};
# use otter_kernel::structures::valuation::TruthValue;
let config = Config {
    propagation: PropagationMode::Queue,
    ..Default::default()
};
let mut the_context = Context::from_config(config, 2).unwrap();

let p = CLiteral::positive(0);
let q = CLiteral::positive(1);

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());
assert_eq!(the_context.state, ContextState::Input);

assert!(the_context.unit_propagate().is_ok());
assert_eq!(the_context.state, ContextState::Fixpoint);
assert_eq!(the_context.value_of(q.atom()), Ok(TruthValue::True));
assert_eq!(the_context.report(), Report::Satisfiable);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, consequence_q::ConsequenceQ, ClauseKey},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseStatus},
        literal::CLiteral,
        valuation::TruthValue,
    },
    types::err::{self, ErrorKind},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses may have been added since the last propagation, if any.
    Input,

    /// Propagation is in progress.
    Propagating,

    /// No clause forces a literal without a value, and no clause is falsified.
    Fixpoint,

    /// The clause with the given key is falsified.
    ///
    /// This state is terminal.
    Conflict(ClauseKey),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Propagating => write!(f, "Propagating"),
            Self::Fixpoint => write!(f, "Fixpoint"),
            Self::Conflict(_) => write!(f, "Conflict"),
        }
    }
}

/// A context.
#[derive(Debug)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to propagation.
    pub counters: Counters,

    /// The atom database. See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database. See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Literals found to be forced, but not yet applied.
    pub(crate) consequence_q: ConsequenceQ,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    /// A context with the default configuration and `atom_count` atoms, each without a value.
    pub fn new(atom_count: usize) -> Result<Self, ErrorKind> {
        Self::from_config(Config::default(), atom_count)
    }

    /// A context with the given configuration and `atom_count` atoms, each without a value.
    pub fn from_config(config: Config, atom_count: usize) -> Result<Self, ErrorKind> {
        Ok(Context {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::new(atom_count)?,
            clause_db: ClauseDB::default(),
            consequence_q: ConsequenceQ::default(),
            state: ContextState::Input,
        })
    }

    /// The current value of an atom.
    pub fn value_of(&self, atom: Atom) -> Result<TruthValue, err::AtomDBError> {
        self.atom_db.value_of(atom)
    }

    /// True if the literal is true on the current valuation.
    pub fn is_satisfied(&self, literal: CLiteral) -> bool {
        self.atom_db.is_satisfied(literal)
    }

    /// True if the literal is false on the current valuation.
    pub fn is_falsified(&self, literal: CLiteral) -> bool {
        self.atom_db.is_falsified(literal)
    }

    /// A report on the state of the context.
    ///
    /// - [Unsatisfiable](Report::Unsatisfiable), if some clause has been found to be falsified.
    /// - [Satisfiable](Report::Satisfiable), if propagation has reached a fixpoint and every stored clause is satisfied.
    /// - [Unknown](Report::Unknown), otherwise.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Conflict(_) => Report::Unsatisfiable,

            ContextState::Fixpoint => {
                let valuation = self.atom_db.valuation();
                let all_satisfied = self
                    .clause_db
                    .iter()
                    .all(|(_, clause)| clause.status(valuation) == ClauseStatus::Satisfied);

                match all_satisfied {
                    true => Report::Satisfiable,
                    false => Report::Unknown,
                }
            }

            ContextState::Input | ContextState::Propagating => Report::Unknown,
        }
    }

    /// The clause found to be falsified, if the context is in a conflict state.
    ///
    /// The clause is as stored when the conflict was found, and so may contain literals which were false before the conflict.
    pub fn conflict_clause(&self) -> Result<&CClause, ErrorKind> {
        match self.state {
            ContextState::Conflict(key) => Ok(self.clause_db.get(key)?),
            _ => Err(ErrorKind::InvalidState),
        }
    }
}
