use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use hashdemo_core::BruteForceConfig;
use hashdemo_core::search::{
    DEFAULT_ALPHABET, DEFAULT_MAX_LENGTH, DEFAULT_PROGRESS_INTERVAL, MAX_LENGTH_CEILING,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Keys accepted by `config get` and `config set`
pub const KNOWN_KEYS: &[&str] = &[
    "search.max_length",
    "search.alphabet",
    "search.progress_interval",
    "output.default_format",
    "output.color_enabled",
    "output.progress_enabled",
];

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchConfig {
    pub max_length: usize,
    pub alphabet: String,
    pub progress_interval: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub default_format: String,
    pub color_enabled: bool,
    pub progress_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            alphabet: DEFAULT_ALPHABET.to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color_enabled: true,
            progress_enabled: true,
        }
    }
}

impl SearchConfig {
    /// Brute-force alphabet and length bound, validated
    pub fn brute_force_config(&self) -> Result<BruteForceConfig> {
        BruteForceConfig::new(&self.alphabet, self.max_length)
            .context("Invalid [search] configuration")
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, max_length: Option<usize>) {
        if let Some(length) = max_length {
            self.search.max_length = length;
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("hashdemo/config.toml");
        }

        #[cfg(target_os = "linux")]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config/hashdemo/config.toml")
        }

        #[cfg(not(target_os = "linux"))]
        {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hashdemo")
                .join("config.toml")
        }
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables, e.g. HASHDEMO_SEARCH__MAX_LENGTH=4
        figment = figment.merge(Env::prefixed("HASHDEMO_").split("__"));

        figment.extract().context("Failed to load configuration")
    }

    /// Get a configuration value by key (dot notation)
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;
        let value = toml::Value::try_from(&config)?;

        let mut current = &value;
        for part in key.split('.') {
            match current {
                toml::Value::Table(table) => {
                    current = table
                        .get(part)
                        .ok_or_else(|| anyhow::anyhow!("Key '{}' not found", key))?;
                }
                _ => anyhow::bail!("Invalid key path: {}", key),
            }
        }

        match current {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            _ => anyhow::bail!("Value at '{}' is not a simple type", key),
        }
    }

    /// Set a configuration value by key (dot notation)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed_value = Self::parse_config_value(key, value)?;
        let Some((section, field)) = key.split_once('.') else {
            anyhow::bail!("Invalid key path: {}", key);
        };

        let mut config = if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path).with_context(|| {
                format!("Failed to read {}", self.config_path.display())
            })?;
            toml::from_str(&content)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };

        let toml::Value::Table(root) = &mut config else {
            anyhow::bail!("Configuration file is not a table");
        };
        let section_value = root
            .entry(section.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
        let toml::Value::Table(table) = section_value else {
            anyhow::bail!("Invalid key path: expected table at '{}'", section);
        };
        table.insert(field.to_string(), parsed_value);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(&config)?;
        fs::write(&self.config_path, toml_string)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;

        Ok(())
    }

    /// List all configuration values
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = self.load()?;
        let value = toml::Value::try_from(&config)?;

        let mut items = Vec::new();
        Self::collect_values(&value, String::new(), &mut items);
        items.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(items)
    }

    /// Recursively collect all key-value pairs from TOML
    fn collect_values(value: &toml::Value, prefix: String, items: &mut Vec<(String, String)>) {
        match value {
            toml::Value::Table(table) => {
                for (key, val) in table {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    Self::collect_values(val, new_prefix, items);
                }
            }
            toml::Value::String(s) => items.push((prefix, s.clone())),
            toml::Value::Integer(i) => items.push((prefix, i.to_string())),
            toml::Value::Boolean(b) => items.push((prefix, b.to_string())),
            _ => {}
        }
    }

    /// Validate a value and convert it to its TOML type
    fn parse_config_value(key: &str, value: &str) -> Result<toml::Value> {
        match key {
            "search.max_length" => {
                let length: usize = value
                    .parse()
                    .context("max_length must be a positive integer")?;
                if !(1..=MAX_LENGTH_CEILING).contains(&length) {
                    anyhow::bail!("max_length must be between 1 and {MAX_LENGTH_CEILING}");
                }
                Ok(toml::Value::Integer(length as i64))
            }
            "search.alphabet" => {
                BruteForceConfig::new(value, DEFAULT_MAX_LENGTH)
                    .context("Invalid alphabet")?;
                Ok(toml::Value::String(value.to_string()))
            }
            "search.progress_interval" => {
                let interval: u32 = value
                    .parse()
                    .context("progress_interval must be a non-negative integer")?;
                Ok(toml::Value::Integer(i64::from(interval)))
            }
            "output.default_format" => match value {
                "text" | "json" => Ok(toml::Value::String(value.to_string())),
                _ => anyhow::bail!("default_format must be 'text' or 'json'"),
            },
            "output.color_enabled" | "output.progress_enabled" => {
                let enabled: bool = value.parse().context("Value must be 'true' or 'false'")?;
                Ok(toml::Value::Boolean(enabled))
            }
            _ => anyhow::bail!("Unknown configuration key '{}'", key),
        }
    }
}
