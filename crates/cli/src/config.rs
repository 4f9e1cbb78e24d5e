//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

/// How the report is printed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Styled text for a terminal
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Settings that may come from the environment before flags are applied.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Content directory; the embedded tables are used when unset.
    pub data_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STATPLAN_DATA_DIR` - Directory with planner data files (default: embedded)
    /// - `STATPLAN_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("STATPLAN_DATA_DIR").ok().map(PathBuf::from);

        if let Some(format) = read_env::<OutputFormat>("STATPLAN_FORMAT") {
            config.format = format;
        } else if let Ok(raw) = env::var("STATPLAN_FORMAT") {
            tracing::warn!("Ignoring unknown STATPLAN_FORMAT '{}'", raw);
        }

        config
    }

    /// Applies command-line overrides on top of environment values.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
