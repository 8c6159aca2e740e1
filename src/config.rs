// Process configuration.
// The summary service credential comes from the environment and is checked
// before any network call.

use std::env;
use std::path::PathBuf;

use crate::cache::CACHE_FILE;
use crate::error::{Result, SurgeError};

/// Environment variable holding the summary service credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the text-generation service.
    pub api_key: String,
    /// Location of the report cache file.
    pub cache_path: PathBuf,
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| SurgeError::MissingApiKey)?;

        Ok(Self {
            api_key,
            cache_path: PathBuf::from(CACHE_FILE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutation is process-global, so missing and present cases share
    // one test.
    #[test]
    fn test_from_env_requires_api_key() {
        unsafe { env::remove_var(API_KEY_VAR) };
        assert!(matches!(Config::from_env(), Err(SurgeError::MissingApiKey)));

        unsafe { env::set_var(API_KEY_VAR, "test-key") };
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.cache_path, PathBuf::from(CACHE_FILE));

        unsafe { env::remove_var(API_KEY_VAR) };
    }
}
