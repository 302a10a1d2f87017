//! Declarative reference tables fed to the emitter.

use crate::config::ZmangenConfig;
use crate::error::{Result, ZmangenError};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};
use tracing::{debug, info};

/// The tables shipped with the crate.
pub const EMBEDDED_TABLES: &str = include_str!("../data/tables.toml");

/// Semantic type of a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Real,
    Integer,
    /// Milliseconds since the Unix epoch, UTC.
    Instant,
}

impl FromStr for SemanticType {
    type Err = ();

    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        match tag {
            "real" | "float" | "f64" => Ok(SemanticType::Real),
            "integer" | "int" | "i64" => Ok(SemanticType::Integer),
            "instant" | "datetime" => Ok(SemanticType::Instant),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SemanticType::Real => "real",
            SemanticType::Integer => "integer",
            SemanticType::Instant => "instant",
        };
        write!(f, "{tag}")
    }
}

/// A named constant. `value` is a Rust expression emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Constant {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub type_tag: String,
}

impl Constant {
    pub fn new(name: &str, value: &str, type_tag: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            type_tag: type_tag.to_string(),
        }
    }

    pub fn semantic_type(&self) -> Result<SemanticType> {
        self.type_tag
            .parse()
            .map_err(|_| ZmangenError::unknown_constant_type(&self.name, &self.type_tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

/// An enumeration with explicit discriminants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumTable {
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransliteratedMember {
    /// Label in the native script.
    pub name: String,
    /// Latin-script label; also the source of the variant identifier.
    pub transliterated_name: String,
    pub value: i64,
}

/// An enumeration whose members carry a native and a transliterated label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransliteratedTable {
    pub name: String,
    /// Manual work the operator has to do on the emitted code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    pub members: Vec<TransliteratedMember>,
}

/// Everything the emitter turns into source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReferenceTables {
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub enums: Vec<EnumTable>,
    #[serde(default)]
    pub transliterated_enums: Vec<TransliteratedTable>,
}

impl ReferenceTables {
    pub fn embedded() -> Result<Self> {
        debug!("Parsing embedded reference tables");
        Self::from_toml_str(EMBEDDED_TABLES)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Reading reference tables from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The tables named by `emit.tables_path`, or the embedded ones.
    pub fn load(config: &ZmangenConfig) -> Result<Self> {
        let tables = match &config.emit.tables_path {
            Some(path) => Self::from_path(Path::new(path))?,
            None => Self::embedded()?,
        };
        info!(
            constants = tables.constants.len(),
            enums = tables.enums.len(),
            transliterated_enums = tables.transliterated_enums.len(),
            "Reference tables loaded"
        );
        Ok(tables)
    }

    /// Notices attached to transliterated tables, in table order.
    pub fn follow_ups(&self) -> Vec<(&str, &str)> {
        self.transliterated_enums
            .iter()
            .filter_map(|t| t.follow_up.as_deref().map(|f| (t.name.as_str(), f)))
            .collect()
    }
}
