mod config;

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use config::TourConfig;
use tour_concurrency::{Demo, Transcript, DEFAULT_PINGS};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tour")]
#[command(about = "Runs the language tour lessons", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log more (-v info, -vv debug, -vvv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every lesson in order (the default)
    All,
    /// Run one concurrency exercise, or all of them
    Concurrency {
        /// notify, fan-in, tokens, queue, reports, fibonacci, multiplex,
        /// ping-pong or counter
        demo: Option<Demo>,
        /// Rounds of ping-pong
        #[arg(long, default_value_t = DEFAULT_PINGS)]
        pings: usize,
    },
    /// Conditions, loops, functions, pointers, slices, error values
    Basics,
    /// Structs, traits, enums, generics
    Types,
    /// Run an exercise on standard input
    Exercise {
        #[command(subcommand)]
        exercise: Exercise,
    },
}

#[derive(Subcommand)]
enum Exercise {
    /// Reads a string and a count
    RepeatedString,
    /// Reads whitespace-separated words
    CustomSort,
    /// Reads how many terms to skip and how many to print
    ModuloFibonacci,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TourConfig::load(cli.config.as_deref())?;
    tour_runtime::init(config.runtime.clone());
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => run_all(&config),
        Commands::Concurrency { demo, pings } => run_concurrency(&config, demo, pings),
        Commands::Basics => {
            print_lines(tour_basics::lesson_lines());
            Ok(())
        }
        Commands::Types => {
            print_lines(tour_types::lesson_lines());
            Ok(())
        }
        Commands::Exercise { exercise } => run_exercise(&config, exercise),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn run_all(config: &TourConfig) -> anyhow::Result<()> {
    println!("# basics");
    print_lines(tour_basics::lesson_lines());
    println!();
    println!("# types");
    print_lines(tour_types::lesson_lines());
    println!();
    println!("# concurrency");
    run_concurrency(config, None, DEFAULT_PINGS)
}

fn run_concurrency(config: &TourConfig, demo: Option<Demo>, pings: usize) -> anyhow::Result<()> {
    let transcript = Transcript::stdout();
    match demo {
        Some(demo) => demo.run(&config.timings, pings, &transcript)?,
        None => tour_concurrency::run_all(&config.timings, pings, &transcript)?,
    }
    Ok(())
}

fn run_exercise(config: &TourConfig, exercise: Exercise) -> anyhow::Result<()> {
    let input = io::stdin().lock();
    let output = io::stdout().lock();

    match exercise {
        Exercise::RepeatedString => tour_exercises::repeated_string::run(input, output)?,
        Exercise::CustomSort => tour_exercises::custom_sort::run(input, output)?,
        Exercise::ModuloFibonacci => {
            let pacing = config.exercises.fibonacci_pacing();
            let outcome = tour_exercises::modulo_fibonacci::run(input, output, pacing)?;
            tracing::info!(?outcome, "modulo fibonacci finished");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_all() {
        let cli = Cli::try_parse_from(["tour"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_concurrency_demo() {
        let cli = Cli::try_parse_from(["tour", "concurrency", "ping-pong", "--pings", "6", "-vv"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Concurrency { demo, pings }) => {
                assert_eq!(demo, Some(Demo::PingPong));
                assert_eq!(pings, 6);
            }
            _ => panic!("expected concurrency command"),
        }
    }

    #[test]
    fn test_unknown_demo_rejected() {
        assert!(Cli::try_parse_from(["tour", "concurrency", "juggling"]).is_err());
    }

    #[test]
    fn test_parse_exercise_with_config() {
        let cli = Cli::try_parse_from([
            "tour",
            "exercise",
            "modulo-fibonacci",
            "--config",
            "tour.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tour.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Exercise {
                exercise: Exercise::ModuloFibonacci
            })
        ));
    }
}
