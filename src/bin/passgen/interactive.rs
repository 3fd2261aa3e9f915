//! The interactive generator: a length prompt and class toggles, followed by a menu of things
//! to do with the result.

use anyhow::Context;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use passgen::{CharacterClass, GeneratorSession, IndexSource, PasswordLength, SubmitError};

use crate::config::Config;
use crate::ProgError;

static ACTIONS: &[&str] = &[
    "Generate another",
    "Copy to clipboard",
    "Change options",
    "Reset",
    "Quit",
];

pub(crate) fn run(config: &Config) -> Result<(), ProgError> {
    let theme = ColorfulTheme::default();
    let mut session = GeneratorSession::new();
    let mut source = config.rng.index_source();
    // What was last typed into the length prompt, kept across failed submissions.
    let mut length_input = String::new();

    eprintln!("{}", style("Password Generator").bold());
    loop {
        length_input = prompt_length(&theme, &length_input)?;
        prompt_classes(&theme, &mut session)?;
        if !submit(&mut session, &length_input, source.as_mut())? {
            continue;
        }

        loop {
            let selection = Select::with_theme(&theme)
                .items(ACTIONS)
                .default(0)
                .interact_opt()
                .context("failed to query your selection")?;
            match selection {
                Some(0) => {
                    submit(&mut session, &length_input, source.as_mut())?;
                }
                Some(1) => {
                    if let Some(password) = session.password() {
                        crate::clipboard::send_to_clipboard(password.as_str().as_bytes())?;
                        eprintln!("Copied to the clipboard.");
                    }
                }
                Some(2) => break,
                Some(3) => {
                    session.reset();
                    length_input.clear();
                    eprintln!("Reset.");
                    break;
                }
                _ => return Ok(()),
            }
        }
    }
}

fn prompt_length(theme: &ColorfulTheme, initial: &str) -> Result<String, ProgError> {
    let mut input = Input::<String>::with_theme(theme);
    input
        .with_prompt("Password Length")
        .allow_empty(true)
        .validate_with(|value: &String| PasswordLength::parse(value).map(|_| ()));
    if !initial.is_empty() {
        input.with_initial_text(initial);
    }
    Ok(input
        .interact_text()
        .context("failed to read the password length")?)
}

fn prompt_classes(theme: &ColorfulTheme, session: &mut GeneratorSession) -> Result<(), ProgError> {
    let labels = CharacterClass::ALL.map(CharacterClass::label);
    let checked = CharacterClass::ALL.map(|class| session.classes().contains(class));
    let selected = MultiSelect::with_theme(theme)
        .with_prompt("Character classes (space to toggle)")
        .items(&labels)
        .defaults(&checked)
        .interact()
        .context("failed to read the character classes")?;
    for (idx, class) in CharacterClass::ALL.into_iter().enumerate() {
        session.set_class(class, selected.contains(&idx));
    }
    Ok(())
}

/// Generate a password and print it. Returns `false` if the input didn't validate; the problem
/// has been shown to the user by then.
fn submit(
    session: &mut GeneratorSession,
    length_input: &str,
    source: &mut dyn IndexSource,
) -> Result<bool, ProgError> {
    match session.submit(length_input, source) {
        Ok(password) => {
            println!("{}", style(password.as_str()).green().bold());
            Ok(true)
        }
        Err(SubmitError::Validation(err)) => {
            eprintln!("{}", style(err).red());
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}
