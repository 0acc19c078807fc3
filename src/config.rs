//! Runtime settings resolved from command-line flags and the environment.

use crate::tasklist::services::{AppendPolicy, ParseAppendPolicyError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Environment variable naming the default task file.
pub const FILE_ENV: &str = "CRAS_FILE";
/// Environment variable selecting the append policy.
pub const APPEND_POLICY_ENV: &str = "CRAS_APPEND_POLICY";
/// Environment variable disabling colour output (<https://no-color.org/>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";
/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CRAS_LOG";

/// Read access to environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` when unset or not UTF-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Values supplied on the command line, before environment fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Task file given positionally.
    pub file: Option<String>,
    /// `--no-color` was passed.
    pub no_color: bool,
    /// `--append-policy` value.
    pub append_policy: Option<String>,
}

/// Errors raised while resolving settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a file argument nor `CRAS_FILE` names a task file.
    #[error("no task file given and CRAS_FILE is not set")]
    MissingFile,

    /// The append policy value is unknown.
    #[error(transparent)]
    AppendPolicy(#[from] ParseAppendPolicyError),
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Task file to operate on.
    pub file: Utf8PathBuf,
    /// Whether status labels are coloured.
    pub color: bool,
    /// Which due dates accept appended tasks.
    pub append_policy: AppendPolicy,
}

impl Settings {
    /// Resolves settings, preferring command-line values over the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] when no task file is named and
    /// [`ConfigError::AppendPolicy`] when the policy value is unknown.
    pub fn resolve(
        overrides: SettingsOverrides,
        env: &impl Environment,
    ) -> Result<Self, ConfigError> {
        let file = overrides
            .file
            .or_else(|| env.var(FILE_ENV))
            .filter(|path| !path.is_empty())
            .map(Utf8PathBuf::from)
            .ok_or(ConfigError::MissingFile)?;

        let no_color_env = env.var(NO_COLOR_ENV).is_some_and(|value| !value.is_empty());
        let color = !(overrides.no_color || no_color_env);

        let append_policy = match overrides.append_policy.or_else(|| env.var(APPEND_POLICY_ENV)) {
            Some(value) => value.parse::<AppendPolicy>()?,
            None => AppendPolicy::default(),
        };

        Ok(Self {
            file,
            color,
            append_policy,
        })
    }
}
