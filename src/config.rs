//! Action configuration read from the GitHub Actions runner environment.
//!
//! Inputs arrive as `INPUT_*` variables and runner context as `GITHUB_*`
//! variables. Lookups go through [`EnvSource`] so tests never touch the
//! process environment.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

use crate::checklist::adapters::github::GitHubHostConfig;
use crate::checklist::domain::{EventError, TriggerEvent};

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Errors raised while loading configuration or the event payload.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),

    /// A reaction was requested without credentials to post it.
    #[error("if \"reaction\" is supplied, GITHUB_TOKEN is required")]
    ReactionRequiresToken,

    /// The event payload file could not be read.
    #[error("failed to read event payload '{path}': {source}")]
    EventRead {
        /// Payload path.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The event payload could not be decoded.
    #[error(transparent)]
    Event(#[from] EventError),
}

/// Source of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Configuration for one gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Host connection settings.
    pub github: GitHubHostConfig,
    /// Name of the triggering event.
    pub event_name: String,
    /// Path of the JSON event payload.
    pub event_path: String,
    /// Trigger phrase input. Validated but not used by the checklist gate.
    pub trigger: String,
    /// Whether the trigger must prefix the comment.
    pub prefix_only: bool,
    /// Optional reaction emoji input.
    pub reaction: Option<String>,
    /// Whether logs are emitted as JSON.
    pub log_json: bool,
}

impl ActionConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    /// Loads configuration from the given source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] for missing required values and
    /// [`ConfigError::ReactionRequiresToken`] when a reaction is requested
    /// without a token.
    pub fn from_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let trigger = required(source, "INPUT_TRIGGER")?;
        let reaction = optional(source, "INPUT_REACTION");
        let token = optional(source, "GITHUB_TOKEN");
        if reaction.is_some() && token.is_none() {
            return Err(ConfigError::ReactionRequiresToken);
        }
        let token_value = token.ok_or(ConfigError::MissingVariable("GITHUB_TOKEN"))?;

        Ok(Self {
            github: GitHubHostConfig {
                api_url: optional(source, "GITHUB_API_URL")
                    .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
                repository: required(source, "GITHUB_REPOSITORY")?,
                token: token_value,
            },
            event_name: required(source, "GITHUB_EVENT_NAME")?,
            event_path: required(source, "GITHUB_EVENT_PATH")?,
            trigger,
            prefix_only: optional(source, "INPUT_PREFIX_ONLY").as_deref() == Some("true"),
            reaction,
            log_json: optional(source, "CHECKLIST_LOG_JSON").as_deref() == Some("true"),
        })
    }

    /// Reads and decodes the event payload named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EventRead`] when the file cannot be read and
    /// [`ConfigError::Event`] when it cannot be decoded.
    pub fn load_event(&self) -> Result<TriggerEvent, ConfigError> {
        let payload = read_payload(Utf8Path::new(&self.event_path)).map_err(|source| {
            ConfigError::EventRead {
                path: self.event_path.clone(),
                source,
            }
        })?;
        Ok(TriggerEvent::from_payload(&self.event_name, &payload)?)
    }
}

fn optional(source: &impl EnvSource, key: &str) -> Option<String> {
    source
        .var(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required(source: &impl EnvSource, key: &'static str) -> Result<String, ConfigError> {
    optional(source, key).ok_or(ConfigError::MissingVariable(key))
}

fn read_payload(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("event path must include a file name"))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority())?.read_to_string(file_name)
}
