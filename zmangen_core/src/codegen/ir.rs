//! Structured representation of the generated Rust source.
//!
//! Table records are lowered into these nodes first; [`crate::codegen::render`]
//! is the only place that turns them into text.

/// Derives carried by every emitted discriminant enum.
pub const NUM_ENUM_DERIVES: [&str; 7] = [
    "Debug",
    "PartialEq",
    "Eq",
    "Clone",
    "Copy",
    "IntoPrimitive",
    "TryFromPrimitive",
];

/// Integer representation of emitted discriminant enums.
pub const DISCRIMINANT_REPR: &str = "i64";

/// A complete generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Leading `//` comment lines, without the slashes.
    pub header: Vec<String>,
    /// Paths of `use` declarations, e.g. `chrono::{DateTime, Utc}`.
    pub uses: Vec<String>,
    pub items: Vec<Item>,
}

impl SourceFile {
    pub fn new(uses: Vec<String>, items: Vec<Item>) -> Self {
        Self {
            header: Vec::new(),
            uses,
            items,
        }
    }

    pub fn with_header(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Static(StaticDecl),
    Enum(EnumDecl),
    Impl(ImplBlock),
}

/// Target types a constant can be emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RustType {
    F64,
    I64,
    DateTimeUtc,
}

impl RustType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RustType::F64 => "f64",
            RustType::I64 => "i64",
            RustType::DateTimeUtc => "DateTime<Utc>",
        }
    }
}

/// Right-hand side of a static.
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    /// Emitted exactly as given.
    Verbatim(String),
    /// `DateTime::from_timestamp_millis(millis)`, aborting const evaluation
    /// with a message naming `label` when out of range.
    TimestampMillis { millis: String, label: String },
}

/// `pub static NAME: TYPE = INIT;`
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDecl {
    pub name: String,
    pub ty: RustType,
    pub init: Initializer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub discriminant: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub derives: Vec<String>,
    pub repr: Option<String>,
    pub variants: Vec<Variant>,
}

impl EnumDecl {
    /// A bare `pub enum` with unit variants and no attributes.
    pub fn skeleton(name: &str, variants: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.to_string(),
            derives: Vec::new(),
            repr: None,
            variants: variants
                .into_iter()
                .map(|name| Variant {
                    name,
                    discriminant: None,
                })
                .collect(),
        }
    }

    /// An enum convertible to and from its `i64` discriminant with `num_enum`.
    pub fn with_discriminants(name: &str, variants: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            name: name.to_string(),
            derives: NUM_ENUM_DERIVES.iter().map(|d| d.to_string()).collect(),
            repr: Some(DISCRIMINANT_REPR.to_string()),
            variants: variants
                .into_iter()
                .map(|(name, value)| Variant {
                    name,
                    discriminant: Some(value),
                })
                .collect(),
        }
    }
}

/// Inherent `impl` block of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplBlock {
    pub target: String,
    pub methods: Vec<MatchFn>,
}

/// `pub fn NAME(&self) -> &'static str { match self { ... } }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFn {
    pub name: String,
    pub arms: Vec<MatchArm>,
}

/// `Target::variant => "value",`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchArm {
    pub variant: String,
    pub value: String,
}
