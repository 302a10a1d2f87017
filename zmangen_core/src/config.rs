use crate::error::{Result, ZmangenError};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "zmangen.toml";

/// Settings for the method classifier pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// JSON AST dump read when no path is given on the command line
    pub ast_path: String,
    /// Name of the enum skeleton printed for the zero-argument bucket
    pub enum_name: String,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            ast_path: "a.json".to_string(),
            enum_name: "Calculations".to_string(),
        }
    }
}

/// Settings for the declaration emitter pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Directory the default output files are written to
    pub output_path: String,
    /// File name of the generated constants
    pub constants_file: String,
    /// File name of the generated enums
    pub enums_file: String,
    /// Prefix prepended to constant names and plain enum names
    pub private_prefix: String,
    /// Reference tables to emit from; the embedded tables are used when unset
    pub tables_path: Option<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            output_path: "./".to_string(),
            constants_file: "constants.rs".to_string(),
            enums_file: "enums.rs".to_string(),
            private_prefix: "_".to_string(),
            tables_path: None,
        }
    }
}

/// Root configuration, read from `zmangen.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZmangenConfig {
    #[serde(default)]
    pub classify: ClassifyConfig,
    #[serde(default)]
    pub emit: EmitConfig,
}

impl ZmangenConfig {
    /// Load configuration by searching for zmangen.toml in the current
    /// directory and its ancestors.
    pub fn new() -> Result<ZmangenConfig> {
        info!("Loading zmangen configuration");
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");

        let current_dir = env::current_dir()?;
        match Self::find_config_file(&current_dir) {
            Some(config_path) => Self::from_path(&config_path),
            None => {
                debug!(
                    "No {} found from {:?}, using defaults",
                    CONFIG_FILE_NAME, current_dir
                );
                Ok(ZmangenConfig::default())
            }
        }
    }

    /// Load configuration from an explicit file.
    pub fn from_path(config_path: &Path) -> Result<ZmangenConfig> {
        if !config_path.exists() {
            error!("Configuration file {:?} does not exist", config_path);
            return Err(ZmangenError::ConfigNotFound {
                path: config_path.to_path_buf(),
            });
        }
        info!("Found configuration file at: {:?}", config_path);
        dotenv::dotenv().ok();

        let contents = fs::read_to_string(config_path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            ZmangenError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        Self::from_toml_str(&contents)
    }

    /// Parse configuration text and resolve `${VAR}` references in paths.
    pub fn from_toml_str(contents: &str) -> Result<ZmangenConfig> {
        let mut config: ZmangenConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            ZmangenError::config(e.to_string())
        })?;

        config.classify.ast_path = Self::substitute_env_vars(&config.classify.ast_path)?;
        config.emit.output_path = Self::substitute_env_vars(&config.emit.output_path)?;
        if let Some(tables_path) = &config.emit.tables_path {
            config.emit.tables_path = Some(Self::substitute_env_vars(tables_path)?);
        }

        debug!(
            "Configuration resolved: ast_path={}, output_path={}, tables={:?}",
            config.classify.ast_path, config.emit.output_path, config.emit.tables_path
        );
        Ok(config)
    }

    /// Default destination of the constants file.
    pub fn constants_output(&self) -> PathBuf {
        Path::new(&self.emit.output_path).join(&self.emit.constants_file)
    }

    /// Default destination of the enums file.
    pub fn enums_output(&self) -> PathBuf {
        Path::new(&self.emit.output_path).join(&self.emit.enums_file)
    }

    /// Searches for `zmangen.toml` starting from `start_dir` and traversing
    /// up to the root.
    fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start_dir);
        for path in start_dir.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.exists() {
                return Some(config_path);
            }
        }
        None
    }

    /// Substitute environment variables in config strings.
    /// Supports ${VAR_NAME:-default} syntax
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(ZmangenError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
