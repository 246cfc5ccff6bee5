use std::{
    io::{BufReader, Write},
    path::PathBuf,
};

use clap::{value_parser, Arg, ArgMatches, Command};

use marten_sat::{config::Config, context::Context, reports::Report, types::err::ErrorKind};

/// The stack reserved for the solve thread.
///
/// The search recurses once per branching atom, so the required stack grows with the atom count
/// of the formula rather than staying within the default for the main thread.
const SOLVE_STACK_BYTES: usize = 256 * 1024 * 1024;

fn cli() -> Command {
    Command::new("marten_sat")
        .about("Determines whether a DIMACS CNF formula is satisfiable")
        .arg(
            Arg::new("formula")
                .value_parser(value_parser!(PathBuf))
                .required(false)
                .help("Path to a DIMACS CNF file, optionally xz compressed.
Reads the standard input when absent (or given as '-')."),
        )
        .arg(
            Arg::new("stats")
                .short('s')
                .long("stats")
                .value_parser(value_parser!(bool))
                .num_args(0)
                .help("Display counters from the solve on the error stream."),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .num_args(1)
                .help("The seed for the source of randomness."),
        )
        .arg(
            Arg::new("random_decisions")
                .long("random-decisions")
                .value_parser(value_parser!(f64))
                .num_args(1)
                .help("The probability of branching on a uniformly random atom rather than the
most-constrained atom.
Zero, the default, keeps a solve fully deterministic."),
        )
}

fn config_from_args(matches: &ArgMatches) -> Config {
    let mut config = Config::default();

    if let Ok(Some(seed)) = matches.try_get_one::<u64>("seed") {
        config.seed = *seed;
    }

    if let Ok(Some(bias)) = matches.try_get_one::<f64>("random_decisions") {
        if !(0.0..=1.0).contains(bias) {
            eprintln!("Random decision probability must be between 0 and 1");
            std::process::exit(1);
        }
        config.random_decision_bias = *bias;
    }

    config
}

/// Reads the formula into the context, from a file or the standard input.
fn load_formula(context: &mut Context, path: Option<&PathBuf>) -> Result<(), ErrorKind> {
    match path {
        None => {
            context.read_dimacs(std::io::stdin().lock())?;
        }

        Some(path) => {
            let file = match std::fs::File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Failed to open {path:?}: {e}");
                    std::process::exit(1);
                }
            };

            match path.extension() {
                Some(extension) if extension == "xz" => {
                    context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))?;
                }
                _ => {
                    context.read_dimacs(BufReader::new(&file))?;
                }
            }
        }
    };
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    let config = config_from_args(&matches);

    let mut context = Context::from_config(config);

    let mut path = None;
    if let Ok(Some(formula)) = matches.try_get_one::<PathBuf>("formula") {
        if formula.as_os_str() != "-" {
            path = Some(formula);
        }
    }

    if let Err(e) = load_formula(&mut context, path) {
        eprintln!("Failed to read formula: {e:?}");
        std::process::exit(1);
    }

    let timer = std::time::Instant::now();

    let solve = std::thread::Builder::new()
        .name("solve".to_string())
        .stack_size(SOLVE_STACK_BYTES)
        .spawn(move || {
            let report = context.solve();
            (context, report)
        });

    let (context, report) = match solve.map(|handle| handle.join()) {
        Ok(Ok(pair)) => pair,
        _ => {
            eprintln!("The solve thread failed");
            std::process::exit(2);
        }
    };

    log::info!("Solve took {:?}", timer.elapsed());

    match report {
        Ok(Report::Satisfiable) => {
            let model = context.model().unwrap_or_default();
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            for (index, value) in model.iter().enumerate() {
                let _ = writeln!(out, "{} {}", index + 1, u8::from(*value));
            }
        }

        Ok(Report::Unsatisfiable) => {
            println!("UNSAT");
        }

        Ok(Report::Unknown) => {
            eprintln!("The solve completed without a verdict");
            std::process::exit(2);
        }

        Err(e) => {
            eprintln!("Solve failure: {e:?}");
            std::process::exit(2);
        }
    }

    if let Ok(Some(true)) = matches.try_get_one::<bool>("stats") {
        let counters = context.counters;
        eprintln!("decisions:    {}", counters.total_decisions);
        eprintln!("attempts:     {}", counters.total_attempts);
        eprintln!("propagations: {}", counters.total_propagations);
        eprintln!("conflicts:    {}", counters.total_conflicts);
        eprintln!("backjumps:    {}", counters.total_backjumps);
    }
}
