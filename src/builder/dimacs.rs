use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

impl Context {
    /// A fresh context with the given configuration, containing the formula read from a DIMACS input.
    ///
    /// The count of atoms of the context is taken from the problem specification of the input (`p cnf <atoms> <clauses>`), which must precede any clause.
    /// DIMACS variable *n* is atom *n - 1*.
    ///
    /// The valuation of the context is allocated from the problem specification, and a count past `ATOM_MAX + 1` or one which cannot be allocated is [AtomsExhausted](err::AtomDBError::AtomsExhausted).
    ///
    /// A unit clause which conflicts with the valuation does not stop the input from being read, and the context returned is in a conflict state.
    ///
    /// ```rust,ignore
    /// let the_context = Context::from_dimacs(BufReader::new(&file), Config::default())?;
    /// ```
    ///
    /// ```rust
    /// # use otter_kernel::context::Context;
    /// # use otter_kernel::config::Config;
    /// # use otter_kernel::reports::Report;
    /// let dimacs = b"
    /// c A comment.
    /// p cnf 4 3
    ///  1  2
    ///        0
    /// -1     0
    ///     -2 3 4 0
    /// ";
    ///
    /// let mut the_context = Context::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
    /// assert_eq!(the_context.clause_db.clause_count(), 3);
    /// assert!(the_context.unit_propagate().is_ok());
    /// assert_eq!(the_context.report(), Report::Unknown);
    /// assert_eq!(the_context.rebase().len(), 1);
    /// ```
    pub fn from_dimacs(mut reader: impl BufRead, config: Config) -> Result<Self, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // first phase, read until the problem specification
        let (atom_count, expected_clauses) = 'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'preamble_loop,
                Some('p') => break 'preamble_loop problem_specification(&buffer)?,
                Some(_) => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
            }
        };

        log::info!(target: targets::PARSE, "Expecting {atom_count} atoms and {expected_clauses} clauses.");

        let mut the_context = Context::from_config(config, atom_count)?;
        let mut clause_buffer = CClause::default();
        let mut clause_counter = 0;
        let mut atoms_used = 0;

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue 'formula_loop,
                Some('p') => {
                    return Err(ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }
                _ => {}
            }

            for item in buffer.split_whitespace() {
                let Ok(int) = item.parse::<isize>() else {
                    log::error!(target: targets::PARSE, "Unable to read '{item}' on line {line_counter}.");
                    return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                };

                match int {
                    0 => {
                        let the_clause = std::mem::take(&mut clause_buffer);
                        the_context.add_dimacs_clause(the_clause)?;
                        clause_counter += 1;
                    }

                    _ => match CLiteral::from_int(int) {
                        Some(literal) => {
                            atoms_used = atoms_used.max(literal.atom() as usize + 1);
                            clause_buffer.push(literal)
                        }
                        None => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
                    },
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Final clause without a terminating 0.");
            the_context.add_dimacs_clause(clause_buffer)?;
            clause_counter += 1;
        }

        if clause_counter != expected_clauses {
            log::warn!(target: targets::PARSE, "Read {clause_counter} clauses, expected {expected_clauses}.");
        }

        if atoms_used < atom_count {
            log::warn!(target: targets::PARSE, "Clauses use {atoms_used} of the {atom_count} atoms specified.");
        }

        Ok(the_context)
    }

    /// Adds a clause read from DIMACS, where a conflict is noted in the state of the context rather than returned.
    fn add_dimacs_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        match self.add_clause(clause) {
            Ok(_) | Err(ErrorKind::FundamentalConflict) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// The atom and clause counts of a problem specification line.
fn problem_specification(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    }

    let mut count = || -> Result<usize, ErrorKind> {
        problem_details
            .next()
            .and_then(|string| string.parse().ok())
            .ok_or(ErrorKind::from(err::ParseError::ProblemSpecification))
    };

    let atom_count = count()?;
    let clause_count = count()?;
    Ok((atom_count, clause_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_lines() {
        assert_eq!(problem_specification("p cnf 3 7\n"), Ok((3, 7)));
        assert_eq!(problem_specification("p  cnf  10   2"), Ok((10, 2)));

        let bad = Err(ErrorKind::Parse(err::ParseError::ProblemSpecification));
        assert_eq!(problem_specification("p cnf 3"), bad);
        assert_eq!(problem_specification("p wcnf 3 7"), bad);
        assert_eq!(problem_specification("p cnf three 7"), bad);
    }
}
