use otter_kernel::{
    config::{Config, PropagationMode},
    context::{Context, ContextState},
    reports::Report,
    structures::{
        clause::{CClause, Clause, ClauseStatus},
        literal::{CLiteral, Literal},
        valuation::{TruthValue, Valuation},
    },
    types::err::ErrorKind,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A random formula over `atoms` atoms, with clauses of length one to `max_length`.
fn random_formula(rng: &mut StdRng, atoms: u32, clauses: usize, max_length: usize) -> Vec<CClause> {
    (0..clauses)
        .map(|_| {
            let length = rng.gen_range(1..=max_length);
            (0..length)
                .map(|_| CLiteral::new(rng.gen_range(0..atoms), rng.gen_bool(0.5)))
                .collect()
        })
        .collect()
}

/// A context with the given propagation mode, the formula added, and propagation applied.
fn propagated(formula: &[CClause], atoms: u32, propagation: PropagationMode) -> (Context, Result<(), ErrorKind>) {
    let config = Config {
        propagation,
        ..Default::default()
    };
    let mut ctx = Context::from_config(config, atoms as usize).unwrap();

    for clause in formula {
        match ctx.add_clause(clause.clone()) {
            Ok(_) | Err(ErrorKind::FundamentalConflict) => {}
            Err(e) => panic!("Unexpected error: {e:?}"),
        }
    }

    let result = ctx.unit_propagate();
    (ctx, result)
}

mod equivalence {
    use super::*;

    #[test]
    fn scan_and_queue_agree() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..400 {
            let atoms = rng.gen_range(1..=12);
            let clauses = rng.gen_range(1..=24);
            let formula = random_formula(&mut rng, atoms, clauses, 4);

            let (scan, scan_result) = propagated(&formula, atoms, PropagationMode::Scan);
            let (queue, queue_result) = propagated(&formula, atoms, PropagationMode::Queue);

            assert_eq!(scan_result, queue_result);
            assert_eq!(scan.report(), queue.report());

            if scan_result.is_ok() {
                assert_eq!(scan.atom_db.valuation(), queue.atom_db.valuation());
                assert_eq!(scan.rebase(), queue.rebase());
                assert_eq!(scan.clause_db.clause_count(), queue.clause_db.clause_count());
            }
        }
    }

    #[test]
    fn fixpoint_has_no_units() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let atoms = rng.gen_range(2..=10);
            let formula = random_formula(&mut rng, atoms, 16, 3);

            for mode in [PropagationMode::Scan, PropagationMode::Queue] {
                let (ctx, result) = propagated(&formula, atoms, mode);
                if result.is_err() {
                    assert!(matches!(ctx.state, ContextState::Conflict(_)));
                    continue;
                }

                assert_eq!(ctx.state, ContextState::Fixpoint);
                for clause in &formula {
                    match clause.status(ctx.atom_db.valuation()) {
                        ClauseStatus::Satisfied | ClauseStatus::Undecided => {}
                        status => panic!("{} is {status:?} at a fixpoint", clause.as_string()),
                    }
                }
            }
        }
    }

    #[test]
    fn conflicts_are_falsified() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut conflicts = 0;

        for _ in 0..200 {
            let atoms = rng.gen_range(1..=6);
            let formula = random_formula(&mut rng, atoms, 20, 2);

            for mode in [PropagationMode::Scan, PropagationMode::Queue] {
                let (ctx, _) = propagated(&formula, atoms, mode);
                if let Ok(clause) = ctx.conflict_clause() {
                    conflicts += 1;
                    assert_eq!(ctx.report(), Report::Unsatisfiable);
                    assert!(clause.literals().all(|literal| ctx.is_falsified(literal)));
                }
            }
        }

        assert!(conflicts > 0);
    }
}

mod rebase {
    use super::*;

    #[test]
    fn soundness() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let atoms = rng.gen_range(2..=10);
            let formula = random_formula(&mut rng, atoms, 12, 4);

            let config = Config::default();
            let mut ctx = Context::from_config(config, atoms as usize).unwrap();
            for clause in &formula {
                let _ = ctx.add_clause(clause.clone());
            }

            let valuation = ctx.atom_db.valuation();
            for (key, rebased) in ctx.rebase_keyed() {
                let original = ctx.clause_db.get(key).unwrap();
                assert_ne!(original.status(valuation), ClauseStatus::Satisfied);

                for literal in rebased.literals() {
                    assert!(original.literals().any(|other| other == literal));
                    assert_eq!(valuation.literal_value(literal), TruthValue::Undefined);
                }

                let dropped = original.literals().filter(|literal| !rebased.contains(literal));
                for literal in dropped {
                    assert_eq!(valuation.literal_value(literal), TruthValue::False);
                }
            }
        }
    }

    #[test]
    fn monotonicity() {
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..100 {
            let atoms = rng.gen_range(2..=8);
            let formula = random_formula(&mut rng, atoms, 10, 3);
            let (ctx, _) = propagated(&formula, atoms, PropagationMode::Queue);

            let trail = ctx.atom_db.trail().literals();
            for literal in trail {
                assert!(ctx.is_satisfied(*literal));
            }

            let defined = ctx.atom_db.valuation().valued_atoms().count();
            assert_eq!(defined, trail.len());
        }
    }
}
