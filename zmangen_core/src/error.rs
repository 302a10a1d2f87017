use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZmangenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Malformed AST node: {0}")]
    MalformedNode(String),

    #[error("Unknown type `{type_tag}` for constant {constant}")]
    UnknownConstantType { constant: String, type_tag: String },

    #[error("Invalid identifier: `{label}` in {table} has no identifier characters")]
    InvalidIdentifier { table: String, label: String },

    #[error("Duplicate variant {variant} in enum {enum_name} (from label `{label}`)")]
    DuplicateVariant {
        enum_name: String,
        variant: String,
        label: String,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<regex::Error> for ZmangenError {
    fn from(err: regex::Error) -> Self {
        ZmangenError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ZmangenError>;

impl ZmangenError {
    pub fn config(message: impl Into<String>) -> Self {
        ZmangenError::Config(message.into())
    }

    pub fn malformed_node(message: impl Into<String>) -> Self {
        ZmangenError::MalformedNode(message.into())
    }

    pub fn unknown_constant_type(constant: impl Into<String>, type_tag: impl Into<String>) -> Self {
        ZmangenError::UnknownConstantType {
            constant: constant.into(),
            type_tag: type_tag.into(),
        }
    }

    pub fn invalid_identifier(table: impl Into<String>, label: impl Into<String>) -> Self {
        ZmangenError::InvalidIdentifier {
            table: table.into(),
            label: label.into(),
        }
    }

    pub fn duplicate_variant(
        enum_name: impl Into<String>,
        variant: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        ZmangenError::DuplicateVariant {
            enum_name: enum_name.into(),
            variant: variant.into(),
            label: label.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ZmangenError::Write {
            path: path.into(),
            source,
        }
    }
}
