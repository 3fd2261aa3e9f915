use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

mod classes;
mod clipboard;
mod config;
mod generate;
mod interactive;
mod table;

/// passgen - Generate random passwords from a selection of character classes.
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Args {
    /// Path to the configuration file (default: ~/.passgen/config.yaml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log what is going on to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate passwords and print them.
    Generate(generate::GenerateArgs),
    /// Pick a length and character classes at a prompt, then generate passwords until you quit.
    Interactive,
    /// List the character classes and the characters each one contributes.
    Classes,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Generate(generate_args) => {
            let config = config::load_config(args.config)?;
            generate::generate(generate_args, &config)?;
        }
        Command::Interactive => {
            let config = config::load_config(args.config)?;
            interactive::run(&config)?;
        }
        Command::Classes => classes::list_classes()?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn default_config_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".passgen");
    p.push("config.yaml");
    Some(p)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Invalid(passgen::ValidationError),
    #[error("Failed to generate a password: {0}")]
    Generation(passgen::GenerationError),
    #[error("The configuration file {0:?} does not exist.")]
    ConfigNotFound(PathBuf),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::ValidationError> for ProgError {
    fn from(err: passgen::ValidationError) -> ProgError {
        ProgError::Invalid(err)
    }
}

impl From<passgen::GenerationError> for ProgError {
    fn from(err: passgen::GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}

impl From<passgen::SubmitError> for ProgError {
    fn from(err: passgen::SubmitError) -> ProgError {
        match err {
            passgen::SubmitError::Validation(err) => ProgError::Invalid(err),
            passgen::SubmitError::Generation(err) => ProgError::Generation(err),
        }
    }
}
