use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use skillcheck_rules::Limits;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[limits]
max_body_words = 5000          # Hard limit on the SKILL.md body (Error above)
warn_body_words = 4000         # Soft limit on the SKILL.md body (Warning above)
max_reference_words = 2000     # Soft per-file limit under references/ (deep mode)
max_name_length = 64
max_description_length = 1024

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub limits: Limits,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillcheck/skillcheck.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".skillcheck").join("skillcheck.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Config path has no parent directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillcheck/skillcheck.toml (auto-created if missing)
    /// 2. Local override: ./skillcheck.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        // Ensure global config exists
        let global_config_path = Self::ensure_global_config()?;

        // Build config with layered sources (later sources override earlier ones)
        let mut config_builder = config::Config::builder()
            // Layer 1: Global config (required - we just created it if missing)
            .add_source(config::File::from(global_config_path))
            // Layer 2: Local workspace config (optional override)
            .add_source(config::File::with_name("skillcheck").required(false))
            // Layer 3: Environment variables with SKILLCHECK__ prefix
            .add_source(config::Environment::with_prefix("SKILLCHECK").separator("__"));

        // Layer 4: Convenience env var override (highest priority)
        if let Ok(level) = env::var("SKILLCHECK_LOG") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.limits.max_body_words, 5000);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_limits_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[limits]\nmax_body_words = 100\n[logging]\nlevel = \"info\"\n")
                .unwrap();
        assert_eq!(config.limits.max_body_words, 100);
        assert_eq!(config.limits.max_name_length, 64);
    }
}
