//! Partitions the public API of a Java class by return type and arity.
//!
//! Methods returning a bare `Date` are the calendar calculations; the ones
//! taking no arguments map one-to-one onto variants of the generated
//! calculations enum.

use crate::ast::{BodyDeclaration, CompilationUnit, NodeKind};
use crate::codegen::ir::{EnumDecl, Item, SourceFile};
use crate::error::{Result, ZmangenError};
use std::collections::BTreeSet;
use tracing::{debug, info, trace};

const ACCESSOR_PREFIX: &str = "get";
const MUTATOR_PREFIX: &str = "set";
const PUBLIC_KEYWORD: &str = "public";
const DEPRECATED_ANNOTATION: &str = "Deprecated";
const DATE_TYPE: &str = "Date";

/// Why a declaration contributed to no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Mutator,
    NotMethod,
    NotPublic,
    Deprecated,
    NoReturnType,
    /// Named exactly `get`, so nothing is left after the prefix strip.
    EmptyName,
}

/// Outcome for a single body declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Returns `Date` and takes no parameters.
    ZeroArgDate(String),
    /// Returns `Date` and takes parameters.
    ArgDate(String),
    /// Public, non-deprecated, returns anything else.
    Other(String),
    Skipped(SkipReason),
}

/// The three name sets, sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodBuckets {
    pub zero_arg: BTreeSet<String>,
    pub with_args: BTreeSet<String>,
    pub other: BTreeSet<String>,
}

impl MethodBuckets {
    fn insert(&mut self, classification: Classification) {
        match classification {
            Classification::ZeroArgDate(name) => {
                self.zero_arg.insert(name);
            }
            Classification::ArgDate(name) => {
                self.with_args.insert(name);
            }
            Classification::Other(name) => {
                self.other.insert(name);
            }
            Classification::Skipped(_) => {}
        }
    }
}

/// Classify every direct member of the unit's first declared type.
pub fn classify(unit: &CompilationUnit) -> Result<MethodBuckets> {
    let primary = unit.primary_type()?;
    let declarations = primary.body_declarations();
    info!(
        type_name = primary.name(),
        declaration_count = declarations.len(),
        "Classifying methods"
    );

    let mut buckets = MethodBuckets::default();
    for decl in declarations {
        let classification = classify_declaration(decl)?;
        trace!(name = decl.name(), ?classification, "Classified declaration");
        buckets.insert(classification);
    }

    info!(
        zero_arg = buckets.zero_arg.len(),
        with_args = buckets.with_args.len(),
        other = buckets.other.len(),
        "Classification complete"
    );
    Ok(buckets)
}

/// Run one declaration through the filtering pipeline.
///
/// The mutator check and the accessor-prefix strip look only at the name and
/// run before the node tag is inspected, so a `set…` member without a tag is
/// skipped rather than rejected.
pub fn classify_declaration(decl: &BodyDeclaration) -> Result<Classification> {
    let raw_name = decl.name();
    if raw_name.starts_with(MUTATOR_PREFIX) {
        return Ok(Classification::Skipped(SkipReason::Mutator));
    }
    let name = raw_name.strip_prefix(ACCESSOR_PREFIX).unwrap_or(raw_name);

    match decl.kind() {
        None => {
            return Err(ZmangenError::malformed_node(format!(
                "declaration `{raw_name}` has no node tag"
            )));
        }
        Some(NodeKind::MethodDeclaration) => {}
        Some(_) => return Ok(Classification::Skipped(SkipReason::NotMethod)),
    }

    let mut is_public = false;
    for modifier in decl.modifiers() {
        if modifier.is_keyword(PUBLIC_KEYWORD) {
            is_public = true;
        }
        if modifier.is_marker(DEPRECATED_ANNOTATION) {
            return Ok(Classification::Skipped(SkipReason::Deprecated));
        }
    }
    if !is_public {
        return Ok(Classification::Skipped(SkipReason::NotPublic));
    }

    let Some(return_type) = decl.return_type() else {
        return Ok(Classification::Skipped(SkipReason::NoReturnType));
    };

    if name.is_empty() {
        debug!(raw_name, "Skipping accessor with empty canonical name");
        return Ok(Classification::Skipped(SkipReason::EmptyName));
    }

    let name = name.to_string();
    if return_type.is_simple_type(DATE_TYPE) {
        if decl.arity() == 0 {
            Ok(Classification::ZeroArgDate(name))
        } else {
            Ok(Classification::ArgDate(name))
        }
    } else {
        Ok(Classification::Other(name))
    }
}

/// Render the zero-argument bucket as a bare enum skeleton, one unit variant
/// per method in sorted order.
pub fn generate_calculations_string(buckets: &MethodBuckets, enum_name: &str) -> String {
    debug!(
        enum_name,
        variant_count = buckets.zero_arg.len(),
        "Generating calculations enum"
    );
    let skeleton = EnumDecl::skeleton(enum_name, buckets.zero_arg.iter().cloned());
    SourceFile::new(Vec::new(), vec![Item::Enum(skeleton)]).render()
}
