use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use mindfa::prelude::*;

use tracing::{debug, error, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("mindfa")
        .about("Reads the definition of a DFA, minimizes it and prints the definition of the minimal DFA")
        .arg(
            Arg::new("input")
                .help("file containing the definition, the definition is read from stdin if omitted")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .action(ArgAction::SetTrue)
                .help("print the transition tables of the input and the minimized automaton to stderr"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn read_input(matches: &ArgMatches) -> Result<Dfa, DefinitionError> {
    match matches.get_one::<PathBuf>("input") {
        Some(path) => {
            debug!("reading definition from {}", path.display());
            read_definition(BufReader::new(File::open(path)?))
        }
        None => {
            debug!("reading definition from stdin");
            read_definition(std::io::stdin().lock())
        }
    }
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);
    let print_tables = matches.get_flag("table");

    let dfa = match read_input(&matches) {
        Ok(dfa) => dfa,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "read automaton with {} states over {} symbols",
        dfa.size(),
        dfa.alphabet().len()
    );
    if print_tables {
        eprintln!("{}", dfa.build_transition_table());
    }

    let start = std::time::Instant::now();
    let minimized = match dfa.minimize() {
        Ok(minimized) => minimized,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "minimization to {} states took {}µs",
        minimized.size(),
        start.elapsed().as_micros()
    );
    if print_tables {
        eprintln!("{}", minimized.build_transition_table());
    }

    print!("{}", minimized.to_definition());
    ExitCode::SUCCESS
}
