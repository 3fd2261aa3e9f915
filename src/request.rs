use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::password_generation::{generate_random_password, IndexSource};
use crate::{build_alphabet, ClassSet, GenerationError, Secret};

/// A password length that passed validation: a whole number in `4..=16`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PasswordLength(u8);

impl PasswordLength {
    pub const MIN: u8 = 4;
    pub const MAX: u8 = 16;

    pub fn new(len: u8) -> Result<PasswordLength, ValidationError> {
        if len < Self::MIN {
            Err(ValidationError::TooShort)
        } else if len > Self::MAX {
            Err(ValidationError::TooLong)
        } else {
            Ok(PasswordLength(len))
        }
    }

    /// Validate a length as typed by the user.
    ///
    /// Accepts anything that reads as a whole number, so `" 8 "` and `"8.0"` are both fine.
    pub fn parse(input: &str) -> Result<PasswordLength, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Required);
        }
        let value = input
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::NotANumber)?;
        if value.fract() != 0.0 {
            return Err(ValidationError::NotAWholeNumber);
        }
        if value < f64::from(Self::MIN) {
            Err(ValidationError::TooShort)
        } else if value > f64::from(Self::MAX) {
            Err(ValidationError::TooLong)
        } else {
            Ok(PasswordLength(value as u8))
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl FromStr for PasswordLength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<PasswordLength, ValidationError> {
        PasswordLength::parse(s)
    }
}

impl TryFrom<u8> for PasswordLength {
    type Error = ValidationError;

    fn try_from(len: u8) -> Result<PasswordLength, ValidationError> {
        PasswordLength::new(len)
    }
}

impl From<PasswordLength> for u8 {
    fn from(len: PasswordLength) -> u8 {
        len.0
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Problems with the user's input, found before anything is generated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Password is required")]
    Required,
    #[error("Password length must be a number")]
    NotANumber,
    #[error("Password length must be a whole number")]
    NotAWholeNumber,
    #[error("min 4 chars")]
    TooShort,
    #[error("max 16 chars")]
    TooLong,
    #[error("select at least one character class")]
    NoCharacterClass,
}

/// A validated request for one password.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationRequest {
    length: PasswordLength,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(
        length: PasswordLength,
        classes: ClassSet,
    ) -> Result<GenerationRequest, ValidationError> {
        if classes.is_empty() {
            return Err(ValidationError::NoCharacterClass);
        }
        Ok(GenerationRequest { length, classes })
    }

    pub fn length(&self) -> PasswordLength {
        self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn alphabet(&self) -> String {
        build_alphabet(&self.classes)
    }

    pub fn generate<S>(&self, source: &mut S) -> Result<Secret, GenerationError>
    where
        S: IndexSource + ?Sized,
    {
        generate_random_password(source, &self.alphabet(), self.length.get())
    }
}
