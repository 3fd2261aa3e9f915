use log::debug;

use crate::password_generation::IndexSource;
use crate::{
    CharacterClass, ClassSet, GenerationError, GenerationRequest, PasswordLength, Secret,
    ValidationError,
};

/// The state a front end keeps between user actions: the class toggles, the last submitted
/// length and the last generated password.
#[derive(Debug, Default)]
pub struct GeneratorSession {
    classes: ClassSet,
    length: Option<PasswordLength>,
    password: Option<Secret>,
}

impl GeneratorSession {
    pub fn new() -> GeneratorSession {
        GeneratorSession::default()
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        self.classes.set(class, enabled);
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
    }

    /// The length used for the last successful generation.
    pub fn length(&self) -> Option<PasswordLength> {
        self.length
    }

    pub fn password(&self) -> Option<&Secret> {
        self.password.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.password.is_some()
    }

    /// Validate `length_input` against the current toggles and generate a new password,
    /// replacing the previous one.
    ///
    /// If validation fails nothing is generated and the previous result is kept.
    pub fn submit<S>(&mut self, length_input: &str, source: &mut S) -> Result<&Secret, SubmitError>
    where
        S: IndexSource + ?Sized,
    {
        let length = PasswordLength::parse(length_input)?;
        let request = GenerationRequest::new(length, self.classes)?;
        let password = request.generate(source)?;
        debug!(
            "generated a password of length {} from {} character classes",
            length,
            self.classes.enabled().count()
        );
        self.length = Some(length);
        Ok(self.password.insert(password))
    }

    /// Clear the result and the length, and put the toggles back to their defaults.
    pub fn reset(&mut self) {
        debug!("resetting generator session");
        *self = GeneratorSession::default();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomIndices;

    #[test]
    fn fresh_session() {
        let session = GeneratorSession::new();
        assert!(!session.is_generated());
        assert!(session.password().is_none());
        assert_eq!(*session.classes(), ClassSet::default());
    }

    #[test]
    fn submit_stores_the_result() {
        let mut session = GeneratorSession::new();
        session.toggle(CharacterClass::Digit);
        let password = session
            .submit("4", &mut RandomIndices::thread())
            .unwrap()
            .clone();
        assert_eq!(password.as_str().len(), 4);
        assert!(session.is_generated());
        assert_eq!(session.password(), Some(&password));
        assert_eq!(session.length(), PasswordLength::new(4).ok());
    }

    #[test]
    fn invalid_submit_keeps_previous_result() {
        let mut session = GeneratorSession::new();
        let mut source = RandomIndices::thread();
        let first = session.submit("8", &mut source).unwrap().clone();

        let err = session.submit("3", &mut source).unwrap_err();
        assert!(matches!(err, SubmitError::Validation(ValidationError::TooShort)));
        let err = session.submit("17", &mut source).unwrap_err();
        assert!(matches!(err, SubmitError::Validation(ValidationError::TooLong)));

        assert_eq!(session.password(), Some(&first));
        assert_eq!(session.length(), PasswordLength::new(8).ok());
    }

    #[test]
    fn submit_without_classes_is_a_validation_error() {
        let mut session = GeneratorSession::new();
        session.set_class(CharacterClass::Lowercase, false);
        let err = session.submit("8", &mut RandomIndices::thread()).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Validation(ValidationError::NoCharacterClass)
        ));
        assert!(!session.is_generated());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = GeneratorSession::new();
        for class in CharacterClass::ALL {
            session.set_class(class, true);
        }
        session.toggle(CharacterClass::Lowercase);
        session.submit("12", &mut RandomIndices::thread()).unwrap();
        assert!(session.is_generated());

        session.reset();

        assert!(!session.is_generated());
        assert!(session.password().is_none());
        assert!(session.length().is_none());
        assert_eq!(
            *session.classes(),
            ClassSet {
                lowercase: true,
                uppercase: false,
                digits: false,
                symbols: false,
            }
        );
    }
}
