use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{AppError, Result};

/// Prefix shared by every environment variable this tool reads.
pub const ENV_PREFIX: &str = "FIND_BUILD_";

fn default_file() -> PathBuf {
    PathBuf::from("builds.json")
}

fn default_number() -> String {
    "53".to_string()
}

/// Lookup configuration parsed from `FIND_BUILD_*` environment variables.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the builds file, relative to the working directory.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Build number to search for, compared as text.
    #[serde(default = "default_number")]
    pub number: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: default_file(),
            number: default_number(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .map_err(|e| AppError::Config {
                message: e.to_string(),
            })
    }

    /// Same as [`Config::from_env`], but reads from an explicit set of pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefixed = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|rest| (rest.to_lowercase(), value))
            });

        envy::from_iter(prefixed).map_err(|e| AppError::Config {
            message: e.to_string(),
        })
    }
}
