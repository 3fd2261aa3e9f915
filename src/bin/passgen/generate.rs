use std::io::{self, Write};

use anyhow::Context;
use log::debug;
use serde::Serialize;

use passgen::{
    CharacterClass, ClassSet, GenerationRequest, PasswordLength, Secret, ValidationError,
};

use crate::config::{Config, RngKind};
use crate::ProgError;

#[derive(clap::Args)]
pub(crate) struct GenerateArgs {
    /// Password length, from 4 to 16 (default: taken from the configuration file).
    #[arg(short = 'L', long, allow_hyphen_values = true)]
    length: Option<String>,
    /// Include lowercase letters.
    #[arg(short, long)]
    lowercase: bool,
    /// Include uppercase letters.
    #[arg(short, long)]
    uppercase: bool,
    /// Include digits.
    #[arg(short, long)]
    digits: bool,
    /// Include symbols.
    #[arg(short, long)]
    symbols: bool,
    /// Number of passwords to generate, one per line.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=100)
    )]
    count: u16,
    /// Print each password as a JSON object.
    #[arg(long)]
    json: bool,
    /// Copy the password to the clipboard instead of printing it.
    #[arg(long, conflicts_with_all = ["json", "count"])]
    copy: bool,
    /// Random source to draw from (default: taken from the configuration file).
    #[arg(long, value_enum)]
    rng: Option<RngKind>,
}

impl GenerateArgs {
    /// The classes picked with flags, if any flag was given.
    fn classes(&self) -> Option<ClassSet> {
        let flags = [
            (CharacterClass::Lowercase, self.lowercase),
            (CharacterClass::Uppercase, self.uppercase),
            (CharacterClass::Digit, self.digits),
            (CharacterClass::Symbol, self.symbols),
        ];
        if flags.iter().any(|(_, enabled)| *enabled) {
            Some(
                flags
                    .into_iter()
                    .filter(|(_, enabled)| *enabled)
                    .map(|(class, _)| class)
                    .collect(),
            )
        } else {
            None
        }
    }
}

#[derive(Serialize)]
struct JsonPassword<'a> {
    password: &'a Secret,
    length: PasswordLength,
    classes: Vec<CharacterClass>,
}

pub(crate) fn generate(args: GenerateArgs, config: &Config) -> Result<(), ProgError> {
    let length = match args.length.as_deref() {
        Some(input) => PasswordLength::parse(input)?,
        None => config.length.ok_or(ValidationError::Required)?,
    };
    let classes = args.classes().unwrap_or(config.classes);
    let request = GenerationRequest::new(length, classes)?;
    let rng = args.rng.unwrap_or(config.rng);
    debug!(
        "generating {} password(s) of length {} with {:?} randomness",
        args.count, length, rng
    );
    let mut source = rng.index_source();

    if args.copy {
        let password = request.generate(source.as_mut())?;
        crate::clipboard::send_to_clipboard(password.as_str().as_bytes())?;
        eprintln!("Copied to the clipboard.");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for _ in 0..args.count {
        let password = request.generate(source.as_mut())?;
        if args.json {
            let item = JsonPassword {
                password: &password,
                length,
                classes: request.classes().enabled().collect(),
            };
            serde_json::to_writer(&mut stdout, &item)
                .context("failed to write password as JSON to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        } else {
            writeln!(stdout, "{}", password.as_str()).context("failed to write to stdout")?;
        }
    }
    Ok(())
}
