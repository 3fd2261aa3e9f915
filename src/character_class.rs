//! The character classes a password can be drawn from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named group of characters which contributes its literal alphabet when enabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order their literals are concatenated into an alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }

    /// Label shown next to the toggle for this class.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Uppercase => "Include Uppercase",
            CharacterClass::Digit => "Include Numbers",
            CharacterClass::Symbol => "Include Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of enabled character classes.
///
/// The default set has only [`CharacterClass::Lowercase`] enabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for ClassSet {
    fn default() -> ClassSet {
        ClassSet {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }
}

impl ClassSet {
    /// A set with no class enabled.
    pub fn none() -> ClassSet {
        ClassSet {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Digit => &mut self.digits,
            CharacterClass::Symbol => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.contains(class));
    }

    pub fn with(mut self, class: CharacterClass) -> ClassSet {
        self.set(class, true);
        self
    }

    /// The enabled classes, in alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> ClassSet {
        iter.into_iter().fold(ClassSet::none(), ClassSet::with)
    }
}

/// Concatenate the literals of the enabled classes, in the fixed order lowercase, uppercase,
/// digits, symbols. An empty set gives an empty alphabet.
pub fn build_alphabet(classes: &ClassSet) -> String {
    classes.enabled().map(CharacterClass::literal).collect()
}

static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static DIGITS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_only_lowercase() {
        let classes = ClassSet::default();
        assert_eq!(
            classes.enabled().collect::<Vec<_>>(),
            vec![CharacterClass::Lowercase]
        );
        assert_eq!(build_alphabet(&classes), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn alphabet_follows_fixed_class_order() {
        // Insertion order doesn't matter; the alphabet is always lowercase first.
        let classes: ClassSet = [
            CharacterClass::Symbol,
            CharacterClass::Digit,
            CharacterClass::Lowercase,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            build_alphabet(&classes),
            "abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+~`|}{[]:;?><,./-="
        );
    }

    #[test]
    fn every_class_enabled() {
        let classes: ClassSet = CharacterClass::ALL.into_iter().collect();
        let alphabet = build_alphabet(&classes);
        assert_eq!(alphabet.chars().count(), 26 + 26 + 10 + 29);
        assert!(alphabet.starts_with("abc"));
        assert!(alphabet.ends_with("-="));
    }

    #[test]
    fn empty_set_gives_empty_alphabet() {
        assert!(ClassSet::none().is_empty());
        assert_eq!(build_alphabet(&ClassSet::none()), "");
    }

    #[test]
    fn toggle_flips_one_class() {
        let mut classes = ClassSet::default();
        classes.toggle(CharacterClass::Digit);
        assert!(classes.contains(CharacterClass::Digit));
        classes.toggle(CharacterClass::Lowercase);
        assert!(!classes.contains(CharacterClass::Lowercase));
        assert_eq!(build_alphabet(&classes), "0123456789");
    }

    #[test]
    fn class_set_from_yaml_fills_defaults() {
        let classes: ClassSet = serde_yaml::from_str("uppercase: true").unwrap();
        assert!(classes.lowercase);
        assert!(classes.uppercase);
        assert!(!classes.digits);
        assert!(!classes.symbols);
    }
}
