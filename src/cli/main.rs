#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{io::BufReader, path::PathBuf};

use clap::Parser;
use otter_kernel::{
    config::{Config, PropagationMode},
    context::Context,
    reports::Report,
    structures::clause::Clause,
};

/// Determines the consequences of a formula by unit propagation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The DIMACS form CNF file to parse
    formula_file: PathBuf,

    /// How to find forced literals
    #[arg(short, long, default_value_t, value_enum)]
    propagation: PropagationMode,

    /// Display the valuation on completion, unless unsatisfiable
    #[arg(short, long, default_value_t = false)]
    valuation: bool,

    /// Display the clauses remaining on completion
    #[arg(short, long, default_value_t = false)]
    clauses: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// Keep clauses as given when a scan reaches a fixpoint
    #[arg(long, default_value_t = false)]
    no_simplify: bool,
}

fn main() {
    #[cfg(feature = "log")]
    init_logger();

    let args = Args::parse();

    let config = Config {
        propagation: args.propagation,
        simplify: !args.no_simplify,
    };

    println!("c Reading DIMACS file from {:?}", args.formula_file);

    let file = match std::fs::File::open(&args.formula_file) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let mut the_context = match Context::from_dimacs(BufReader::new(&file), config) {
        Ok(context) => context,
        Err(e) => {
            println!("c Error reading DIMACS: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "c Read {} atoms and {} clauses",
        the_context.atom_db.count(),
        the_context.clause_db.clause_count()
    );

    match the_context.unit_propagate() {
        Ok(()) => {}
        Err(otter_kernel::types::err::ErrorKind::FundamentalConflict) => {}
        Err(e) => {
            println!("c Propagation error: {e:?}");
            std::process::exit(1);
        }
    }

    if args.stats {
        println!("c Propagation:     {}", the_context.config.propagation);
        println!("c Rounds:          {}", the_context.counters.rounds);
        println!("c Rebases:         {}", the_context.counters.rebases);
        println!("c Forced literals: {}", the_context.counters.forced);
        println!("c Assignments:     {}", the_context.atom_db.trail().len());
    }

    let report = the_context.report();

    println!("s {}", report.to_string().to_uppercase());

    if args.valuation && report != Report::Unsatisfiable {
        let valuation = the_context.atom_db.valuation_string();
        match valuation.is_empty() {
            true => println!("v 0"),
            false => println!("v {valuation} 0"),
        }
    }

    if args.clauses {
        if let Ok(clause) = the_context.conflict_clause() {
            println!("c Conflict clause: {}", clause.as_dimacs(true));
        } else {
            for (_, clause) in the_context.clause_db.iter() {
                println!("{}", clause.as_dimacs(true));
            }
        }
    }

    match report {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::Unknown => std::process::exit(0),
    }
}

/// Installs a console logger writing to stderr, with all levels enabled.
#[cfg(feature = "log")]
fn init_logger() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Trace));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("c Failed to initialise logger: {e}");
            }
        }
        Err(e) => eprintln!("c Failed to configure logger: {e}"),
    }
}
