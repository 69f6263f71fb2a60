use std::env::var;

use super::EnvError;

pub fn get_env_var(key: &str) -> Result<String, EnvError> {
    var(key).map_err(|e| EnvError::EnvVar(e, key.to_owned()))
}

/// Read an optional variable, falling back to a default when unset.
pub fn get_env_var_or(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|_| default.to_owned())
}
