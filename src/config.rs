//! Runtime settings, read once at startup.
//!
//! - `CARDIOSCOPE_DATA_PATH`: dataset loaded at startup (default `heart.csv`).
//!   A first positional argument overrides it.
//! - `CARDIOSCOPE_LOG_MODE`: `auto` | `file` | `stdout`
//! - `CARDIOSCOPE_LOG_FILE`: log destination in file mode (default `cardioscope.log`)

use std::path::PathBuf;

const DATA_PATH_ENV: &str = "CARDIOSCOPE_DATA_PATH";
const LOG_MODE_ENV: &str = "CARDIOSCOPE_LOG_MODE";
const LOG_FILE_ENV: &str = "CARDIOSCOPE_LOG_FILE";

const DEFAULT_DATA_PATH: &str = "heart.csv";
const DEFAULT_LOG_FILE: &str = "cardioscope.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when stdout is a terminal (the TUI owns it), stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Unrecognised values fall back to `Auto`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Whether to log to a file given the terminal state.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: PathBuf,
    /// Whether `data_path` was chosen explicitly rather than defaulted
    pub data_path_explicit: bool,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Settings {
    /// Read the process environment and command line.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Build settings from an environment lookup and positional arguments.
    pub fn from_sources<E, A>(env: E, args: A) -> Self
    where
        E: Fn(&str) -> Option<String>,
        A: IntoIterator<Item = String>,
    {
        let arg_path = args.into_iter().find(|a| !a.starts_with('-'));
        let env_path = env(DATA_PATH_ENV).filter(|p| !p.trim().is_empty());
        let data_path_explicit = arg_path.is_some() || env_path.is_some();

        Self {
            data_path: PathBuf::from(
                arg_path
                    .or(env_path)
                    .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            ),
            data_path_explicit,
            log_mode: env(LOG_MODE_ENV).map(|m| LogMode::parse(&m)).unwrap_or_default(),
            log_file: PathBuf::from(env(LOG_FILE_ENV).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(env(&[]), Vec::new());
        assert_eq!(settings.data_path, PathBuf::from("heart.csv"));
        assert!(!settings.data_path_explicit);
        assert_eq!(settings.log_mode, LogMode::Auto);
        assert_eq!(settings.log_file, PathBuf::from("cardioscope.log"));
    }

    #[test]
    fn test_argument_overrides_environment() {
        let settings = Settings::from_sources(
            env(&[("CARDIOSCOPE_DATA_PATH", "/data/env.csv")]),
            vec!["/data/arg.csv".to_string()],
        );
        assert_eq!(settings.data_path, PathBuf::from("/data/arg.csv"));
        assert!(settings.data_path_explicit);

        let settings =
            Settings::from_sources(env(&[("CARDIOSCOPE_DATA_PATH", "/data/env.csv")]), Vec::new());
        assert_eq!(settings.data_path, PathBuf::from("/data/env.csv"));
    }

    #[test]
    fn test_log_mode() {
        assert_eq!(LogMode::parse("FILE"), LogMode::File);
        assert_eq!(LogMode::parse("stdout"), LogMode::Stdout);
        assert_eq!(LogMode::parse("bogus"), LogMode::Auto);

        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }
}
