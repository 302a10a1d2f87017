//! Typed view over the JSON AST dump of a Java compilation unit.
//!
//! Only the fields the classifier reads are modeled. Every field is optional
//! on the wire; the accessors on [`BodyDeclaration`] turn absent values into
//! empty or default ones so callers never probe raw maps.

use crate::error::{Result, ZmangenError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Node kinds the classifier distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    MethodDeclaration,
    Modifier,
    MarkerAnnotation,
    SimpleType,
    Other(String),
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "MethodDeclaration" => NodeKind::MethodDeclaration,
            "Modifier" => NodeKind::Modifier,
            "MarkerAnnotation" => NodeKind::MarkerAnnotation,
            "SimpleType" => NodeKind::SimpleType,
            _ => NodeKind::Other(tag),
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(NodeKind::from)
    }
}

/// A `SimpleName`-like node; qualified names carry no identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Name {
    #[serde(default)]
    identifier: Option<String>,
}

impl Name {
    pub fn identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or("")
    }
}

/// Root of the dump.
#[derive(Debug, Clone, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    types: Option<Vec<TypeDeclaration>>,
}

impl CompilationUnit {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Reading AST from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        debug!("AST file size: {} bytes", contents.len());
        Self::from_json(&contents)
    }

    /// The first declared type. A unit without types is malformed.
    pub fn primary_type(&self) -> Result<&TypeDeclaration> {
        let types = self
            .types
            .as_ref()
            .ok_or_else(|| ZmangenError::malformed_node("compilation unit has no `types` list"))?;
        types
            .first()
            .ok_or_else(|| ZmangenError::malformed_node("compilation unit declares no types"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default)]
    name: Option<Name>,
    #[serde(rename = "bodyDeclarations", default)]
    body_declarations: Vec<BodyDeclaration>,
}

impl TypeDeclaration {
    pub fn name(&self) -> &str {
        self.name.as_ref().map(Name::identifier).unwrap_or("")
    }

    pub fn body_declarations(&self) -> &[BodyDeclaration] {
        &self.body_declarations
    }
}

/// One member of a type body: method, field, nested type, initializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyDeclaration {
    #[serde(rename = "node", default)]
    kind: Option<NodeKind>,
    #[serde(default)]
    name: Option<Name>,
    #[serde(default)]
    modifiers: Vec<ModifierNode>,
    #[serde(rename = "returnType2", default)]
    return_type: Option<TypeNode>,
    #[serde(default)]
    parameters: Option<Vec<serde_json::Value>>,
}

impl BodyDeclaration {
    pub fn kind(&self) -> Option<&NodeKind> {
        self.kind.as_ref()
    }

    /// Declared name, empty for nameless members such as initializers.
    pub fn name(&self) -> &str {
        self.name.as_ref().map(Name::identifier).unwrap_or("")
    }

    pub fn modifiers(&self) -> &[ModifierNode] {
        &self.modifiers
    }

    pub fn return_type(&self) -> Option<&TypeNode> {
        self.return_type.as_ref()
    }

    /// Number of declared parameters. A declaration without a `parameters`
    /// field counts as taking one, so it never lands in a zero-arity bucket.
    pub fn arity(&self) -> usize {
        self.parameters.as_ref().map_or(1, Vec::len)
    }
}

/// Entry of a `modifiers` list: a keyword or an annotation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModifierNode {
    #[serde(rename = "node", default)]
    kind: Option<NodeKind>,
    #[serde(default)]
    keyword: Option<String>,
    #[serde(rename = "typeName", default)]
    type_name: Option<Name>,
}

impl ModifierNode {
    /// True for a `Modifier` node with the given keyword.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == Some(NodeKind::Modifier) && self.keyword.as_deref() == Some(keyword)
    }

    /// True for a `MarkerAnnotation` node naming the given annotation type.
    pub fn is_marker(&self, annotation: &str) -> bool {
        self.kind == Some(NodeKind::MarkerAnnotation)
            && self.type_name.as_ref().map(Name::identifier) == Some(annotation)
    }
}

/// A `returnType2` node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeNode {
    #[serde(rename = "node", default)]
    kind: Option<NodeKind>,
    #[serde(default)]
    name: Option<Name>,
}

impl TypeNode {
    /// True when this is a `SimpleType` spelled exactly `type_name`.
    pub fn is_simple_type(&self, type_name: &str) -> bool {
        self.kind == Some(NodeKind::SimpleType)
            && self.name.as_ref().map(Name::identifier) == Some(type_name)
    }
}
