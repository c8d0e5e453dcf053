use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, ENV_BASE_URL, ENV_ENCODING, ENV_LOG_DIR, ENV_OUTPUT,
    LEGACY_LOCATIESERVER_BASE_URL, LOCATIESERVER_BASE_URL, SUGGEST_ROWS,
};
use crate::error::{LocatorError, Result};
use crate::types::OutputEncoding;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime settings. Defaults match the behaviour of the plain interactive tool;
/// the TOML file, environment and CLI flags override them in that order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub rows: u32,
    pub output: PathBuf,
    pub encoding: OutputEncoding,
    /// No timeout unless configured
    pub timeout_seconds: Option<u64>,
    /// Directory for JSON log files; console-only logging when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: LOCATIESERVER_BASE_URL.to_string(),
            rows: SUGGEST_ROWS,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            encoding: OutputEncoding::Utf8,
            timeout_seconds: None,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load `path`, or the default config file if no path is given.
    ///
    /// An absent default file yields the defaults; an absent explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            LocatorError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.rows == 0 {
            return Err(LocatorError::Config("rows must be at least 1".into()));
        }
        Ok(config)
    }

    /// Apply `NL_LOCATOR_*` variables through a lookup function.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = PathBuf::from(output);
        }
        if let Some(encoding) = lookup(ENV_ENCODING) {
            self.encoding = encoding.parse().map_err(LocatorError::Config)?;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }

    /// Switch to the v3 endpoint and Latin-1 output.
    pub fn legacy(mut self) -> Self {
        self.base_url = LEGACY_LOCATIESERVER_BASE_URL.to_string();
        self.encoding = OutputEncoding::Latin1;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_plain_tool() {
        let config = Config::default();
        assert_eq!(config.base_url, LOCATIESERVER_BASE_URL);
        assert_eq!(config.rows, 15);
        assert_eq!(config.output, PathBuf::from("addresses.csv"));
        assert_eq!(config.encoding, OutputEncoding::Utf8);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml("encoding = \"latin1\"\ntimeout_seconds = 10\n").unwrap();
        assert_eq!(config.encoding, OutputEncoding::Latin1);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.rows, 15);
    }

    #[test]
    fn toml_accepts_same_encoding_labels_as_env() {
        for label in ["latin-1", "ISO-8859-1", "latin1"] {
            let config = Config::from_toml(&format!("encoding = \"{label}\"")).unwrap();
            assert_eq!(config.encoding, OutputEncoding::Latin1, "{label}");
        }
        let config = Config::from_toml("encoding = \"utf-8\"").unwrap();
        assert_eq!(config.encoding, OutputEncoding::Utf8);
        assert!(matches!(
            Config::from_toml("encoding = \"koi8\""),
            Err(LocatorError::Toml(_))
        ));
    }

    #[test]
    fn zero_rows_rejected() {
        assert!(matches!(Config::from_toml("rows = 0"), Err(LocatorError::Config(_))));
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_OUTPUT, "/tmp/out.csv"),
            (ENV_ENCODING, "latin-1"),
        ]
        .into_iter()
        .collect();
        let config = Config::default()
            .apply_env(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.output, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.encoding, OutputEncoding::Latin1);
        assert_eq!(config.base_url, LOCATIESERVER_BASE_URL);
    }

    #[test]
    fn bad_env_encoding_is_config_error() {
        let result =
            Config::default().apply_env(|k| (k == ENV_ENCODING).then(|| "koi8".to_string()));
        assert!(matches!(result, Err(LocatorError::Config(_))));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, LocatorError::Config(_)));
    }

    #[test]
    fn legacy_profile() {
        let config = Config::default().legacy();
        assert_eq!(config.base_url, LEGACY_LOCATIESERVER_BASE_URL);
        assert_eq!(config.encoding, OutputEncoding::Latin1);
    }
}
