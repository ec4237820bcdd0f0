use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Drop and recreate the user table on startup
    #[serde(default)]
    pub reset_on_startup: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Parse configuration from YAML text, expanding environment variables first
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let expanded_content = Self::expand_env_vars(content)?;

        serde_yaml::from_str(&expanded_content).map_err(|e| e.to_string())
    }

    /// Create default configuration for in-memory SQLite
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                db_type: "sqlite".to_string(),
                url: ":memory:".to_string(),
                max_connections: 1,
                connection_timeout: default_connection_timeout(),
                reset_on_startup: false,
            },
        }
    }

    /// Build the backend configuration described by the `database` section
    pub fn backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        let database_type = DatabaseType::from_config_name(&self.database.db_type).ok_or_else(
            || {
                AppError::Configuration(format!(
                    "Unsupported database type: {}",
                    self.database.db_type
                ))
            },
        )?;

        Ok(
            DatabaseBackendConfig::new(database_type, self.database.url.clone())
                .with_max_connections(self.database.max_connections)
                .with_connection_timeout(self.database.connection_timeout),
        )
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let chars: Vec<char> = content.chars().collect();
        let mut expanded = String::new();
        let mut i = 0;

        while i < chars.len() {
            if i + 1 < chars.len() && chars[i] == '$' && chars[i + 1] == '{' {
                let mut j = i + 2;
                while j < chars.len() && chars[j] != '}' {
                    j += 1;
                }

                if j < chars.len() {
                    let var_expr: String = chars[i + 2..j].iter().collect();

                    let (var_name, default_value) = match var_expr.split_once(":-") {
                        Some((name, default)) => (name.to_string(), Some(default.to_string())),
                        None => (var_expr, None),
                    };

                    let value = match std::env::var(&var_name) {
                        Ok(val) => val,
                        Err(_) => default_value.ok_or_else(|| {
                            format!(
                                "Environment variable {} not found and no default provided",
                                var_name
                            )
                        })?,
                    };

                    expanded.push_str(&value);
                    i = j + 1;
                } else {
                    // Unterminated expression, keep the rest verbatim
                    expanded.push(chars[i]);
                    i += 1;
                }
            } else {
                expanded.push(chars[i]);
                i += 1;
            }
        }

        Ok(expanded)
    }
}
