//! Generate random passwords from a selection of character classes.
//!
//! [`build_alphabet`] turns the enabled classes into the alphabet to sample from, and
//! [`password_generation::generate_random_password`] draws from it. [`GenerationRequest`]
//! validates the inputs first, and [`GeneratorSession`] holds the state a front end keeps
//! between actions.

use serde::{Deserialize, Serialize};

mod character_class;
pub mod password_generation;
mod request;
mod session;

pub use character_class::{build_alphabet, CharacterClass, ClassSet};
pub use password_generation::{IndexSource, RandomIndices};
pub use request::{GenerationRequest, PasswordLength, ValidationError};
pub use session::{GeneratorSession, SubmitError};

/// A generated password.
///
/// The `Debug` output never shows the contents.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenerationError(GenerationErrorRepr);

impl From<GenerationErrorRepr> for GenerationError {
    fn from(err: GenerationErrorRepr) -> GenerationError {
        GenerationError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GenerationErrorRepr {
    #[error("cannot generate a password of {len} characters from an empty alphabet")]
    EmptyAlphabet { len: usize },
    #[error("the index source returned {idx}, which is out of range for an alphabet of {bound}")]
    IndexOutOfRange { idx: usize, bound: usize },
}
