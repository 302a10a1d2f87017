//! Enums file generation: plain discriminant enums, then transliterated
//! enums with their label lookups.

use super::casing::{is_valid_identifier, to_identifier_case};
use super::ir::{EnumDecl, ImplBlock, Item, MatchArm, MatchFn, SourceFile};
use super::{EmitOptions, GENERATED_HEADER};
use crate::error::{Result, ZmangenError};
use crate::tables::{EnumTable, TransliteratedTable};
use std::collections::HashSet;
use tracing::{debug, info};

const NUM_ENUM_USE: &str = "num_enum::{IntoPrimitive, TryFromPrimitive}";

/// Lookup returning the transliterated label.
pub const EN_STRING_FN: &str = "en_string";
/// Lookup returning the native-script label.
pub const HE_STRING_FN: &str = "he_string";

/// Generate the enums file.
///
/// Plain enums come first, each named with the private prefix, followed by
/// every transliterated table as an enum and an `impl` holding the two
/// label lookups. Tables are emitted in the order given.
pub fn generate_enums_string(
    enums: &[EnumTable],
    transliterated: &[TransliteratedTable],
    options: &EmitOptions,
) -> Result<String> {
    info!(
        enum_count = enums.len(),
        transliterated_count = transliterated.len(),
        "Generating enums"
    );

    let mut items = Vec::new();
    for table in enums {
        items.push(Item::Enum(lower_enum(table, options)?));
    }
    for table in transliterated {
        let (decl, lookups) = lower_transliterated(table)?;
        items.push(Item::Enum(decl));
        items.push(Item::Impl(lookups));
    }

    let uses = if items.is_empty() {
        Vec::new()
    } else {
        vec![NUM_ENUM_USE.to_string()]
    };

    Ok(SourceFile::new(uses, items)
        .with_header(GENERATED_HEADER)
        .render())
}

fn lower_enum(table: &EnumTable, options: &EmitOptions) -> Result<EnumDecl> {
    let name = format!(
        "{}{}",
        options.private_prefix,
        identifier(&table.name, &table.name)?
    );
    debug!(enum_name = %name, member_count = table.members.len(), "Lowering enum");

    let mut variants = VariantNames::new(&name);
    let members = table
        .members
        .iter()
        .map(|member| Ok((variants.claim(&member.name)?, member.value)))
        .collect::<Result<Vec<_>>>()?;
    Ok(EnumDecl::with_discriminants(&name, members))
}

fn lower_transliterated(table: &TransliteratedTable) -> Result<(EnumDecl, ImplBlock)> {
    let name = &table.name;
    debug!(enum_name = %name, member_count = table.members.len(), "Lowering transliterated enum");

    let mut variants = VariantNames::new(name);
    let mut members = Vec::with_capacity(table.members.len());
    let mut en_arms = Vec::with_capacity(table.members.len());
    let mut he_arms = Vec::with_capacity(table.members.len());
    for member in &table.members {
        let variant = variants.claim(&member.transliterated_name)?;
        en_arms.push(MatchArm {
            variant: variant.clone(),
            value: member.transliterated_name.clone(),
        });
        he_arms.push(MatchArm {
            variant: variant.clone(),
            value: member.name.clone(),
        });
        members.push((variant, member.value));
    }

    let lookups = ImplBlock {
        target: name.clone(),
        methods: vec![
            MatchFn {
                name: EN_STRING_FN.to_string(),
                arms: en_arms,
            },
            MatchFn {
                name: HE_STRING_FN.to_string(),
                arms: he_arms,
            },
        ],
    };
    Ok((EnumDecl::with_discriminants(name, members), lookups))
}

/// Case `label` into an identifier, rejecting labels with nothing usable.
fn identifier(table: &str, label: &str) -> Result<String> {
    let ident = to_identifier_case(label);
    if is_valid_identifier(&ident) {
        Ok(ident)
    } else {
        Err(ZmangenError::invalid_identifier(table, label))
    }
}

/// Variant identifiers already used in one enum.
struct VariantNames<'a> {
    enum_name: &'a str,
    seen: HashSet<String>,
}

impl<'a> VariantNames<'a> {
    fn new(enum_name: &'a str) -> Self {
        Self {
            enum_name,
            seen: HashSet::new(),
        }
    }

    fn claim(&mut self, label: &str) -> Result<String> {
        let variant = identifier(self.enum_name, label)?;
        if !self.seen.insert(variant.clone()) {
            return Err(ZmangenError::duplicate_variant(
                self.enum_name,
                variant,
                label,
            ));
        }
        Ok(variant)
    }
}
