//! Environment variable utilities

use crate::error::{Result, ToolError};
use std::env;

/// Environment variable helpers
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get a required environment variable, failing with a configuration
    /// error that names the missing variable
    pub fn require_var(key: &str) -> Result<String> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Ok(value),
            Ok(_) => Err(ToolError::config(format!(
                "Environment variable {key} is set but empty"
            ))),
            Err(_) => Err(ToolError::config(format!(
                "Required environment variable {key} is not set"
            ))),
        }
    }

    /// Get an environment variable with a default value
    pub fn get_var_or_default(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Set environment variable (mainly for testing)
    pub fn set_var<K, V>(key: K, value: V)
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        unsafe { env::set_var(key.as_ref(), value.as_ref()) }
    }

    /// Remove environment variable (mainly for testing)
    pub fn remove_var<K: AsRef<str>>(key: K) {
        unsafe { env::remove_var(key.as_ref()) }
    }
}
