use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use passgen::{ClassSet, IndexSource, PasswordLength, RandomIndices};

use crate::ProgError;

/// Settings read from the configuration file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Length used by `generate` when `--length` isn't given.
    pub(crate) length: Option<PasswordLength>,
    /// Classes used by `generate` when no class flag is given.
    pub(crate) classes: ClassSet,
    pub(crate) rng: RngKind,
}

/// Where random indices come from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RngKind {
    /// The thread-local RNG from `rand`.
    #[default]
    Thread,
    /// The operating system's random source.
    Os,
}

impl RngKind {
    pub(crate) fn index_source(self) -> Box<dyn IndexSource> {
        match self {
            RngKind::Thread => Box::new(RandomIndices::thread()),
            RngKind::Os => Box::new(RandomIndices::os()),
        }
    }
}

/// Load the configuration at `config_path`, or from the default location.
///
/// A missing file at the default location just means the defaults apply; a missing file that
/// was asked for explicitly is an error.
pub(crate) fn load_config(config_path: Option<PathBuf>) -> Result<Config, ProgError> {
    let (path, explicit) = match config_path {
        Some(p) => (p, true),
        None => match crate::default_config_path() {
            Some(p) => (p, false),
            None => {
                debug!("HOME is not set; using the default configuration");
                return Ok(Config::default());
            }
        },
    };

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if explicit {
                return Err(ProgError::ConfigNotFound(path));
            }
            debug!(
                "no configuration at {}; using the default configuration",
                path.display()
            );
            return Ok(Config::default());
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!(
                    "failed to open configuration file {}",
                    path.display()
                ))
                .into())
        }
    };

    debug!("reading configuration from {}", path.display());
    let config = serde_yaml::from_reader(file)
        .with_context(|| format!("failed to parse configuration file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_full_config() {
        let config: Config = serde_yaml::from_str(
            "length: 12\nclasses:\n  lowercase: false\n  digits: true\nrng: os\n",
        )
        .unwrap();
        assert_eq!(config.length, PasswordLength::new(12).ok());
        assert_eq!(
            config.classes,
            ClassSet {
                lowercase: false,
                uppercase: false,
                digits: true,
                symbols: false,
            }
        );
        assert_eq!(config.rng, RngKind::Os);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_yaml::from_str("rng: thread").unwrap();
        assert_eq!(config.length, None);
        assert_eq!(config.classes, ClassSet::default());
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        let err = serde_yaml::from_str::<Config>("length: 40").unwrap_err();
        assert!(err.to_string().contains("max 16 chars"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_yaml::from_str::<Config>("lenght: 8").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "length: 6").unwrap();
        let config = load_config(Some(file.path().to_owned())).unwrap();
        assert_eq!(config.length, PasswordLength::new(6).ok());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        match load_config(Some(path.clone())) {
            Err(ProgError::ConfigNotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
