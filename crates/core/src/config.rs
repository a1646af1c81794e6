use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TracetidyError};

/// Which sanitizers make up the chain, in application order. The defaults
/// mirror the standard chain; deployments that only need a subset override
/// via config file or environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SanitizeConfig {
    pub sanitizers: Vec<String>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            sanitizers: vec![
                "duration".to_string(),
                "parent-id".to_string(),
                "error-tag".to_string(),
            ],
        }
    }
}

impl SanitizeConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        let config_path = config_file_path();
        if let Some(file_overrides) = load_file_overrides(&config_path)? {
            apply_overrides(&mut cfg, file_overrides);
        }
        apply_overrides(&mut cfg, load_env_overrides());
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        apply_overrides(&mut cfg, load_env_overrides());
        Ok(cfg)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    sanitizers: Option<Vec<String>>,
}

fn config_file_path() -> PathBuf {
    if let Ok(path) = env::var("TRACETIDY_CONFIG") {
        return PathBuf::from(path);
    }

    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let config_home = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(home).join(".config"));
    config_home.join("tracetidy/config.toml")
}

fn load_file_overrides(path: &PathBuf) -> Result<Option<ConfigOverrides>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| TracetidyError::Config(format!("failed reading {}: {e}", path.display())))?;
    let parsed: ConfigOverrides = toml::from_str(&raw)
        .map_err(|e| TracetidyError::Config(format!("failed parsing {}: {e}", path.display())))?;
    Ok(Some(parsed))
}

fn load_env_overrides() -> ConfigOverrides {
    ConfigOverrides {
        sanitizers: env::var("TRACETIDY_SANITIZERS")
            .ok()
            .map(|v| parse_sanitizer_list(&v)),
    }
}

fn apply_overrides(cfg: &mut SanitizeConfig, overrides: ConfigOverrides) {
    if let Some(v) = overrides.sanitizers {
        cfg.sanitizers = v;
    }
}

fn parse_sanitizer_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_all_sanitizers() {
        let cfg = SanitizeConfig::default();
        assert_eq!(cfg.sanitizers, vec!["duration", "parent-id", "error-tag"]);
    }

    #[test]
    fn parse_sanitizer_list_trims_and_skips_empty() {
        assert_eq!(
            parse_sanitizer_list("duration, error-tag,,"),
            vec!["duration".to_string(), "error-tag".to_string()]
        );
    }

    #[test]
    fn apply_overrides_replaces_sanitizer_list() {
        let mut cfg = SanitizeConfig::default();
        apply_overrides(
            &mut cfg,
            ConfigOverrides {
                sanitizers: Some(vec!["duration".to_string()]),
            },
        );
        assert_eq!(cfg.sanitizers, vec!["duration"]);
    }

    #[test]
    fn file_overrides_parse_from_toml() {
        let parsed: ConfigOverrides = toml::from_str("sanitizers = [\"parent-id\"]").unwrap();
        assert_eq!(parsed.sanitizers, Some(vec!["parent-id".to_string()]));
    }
}
