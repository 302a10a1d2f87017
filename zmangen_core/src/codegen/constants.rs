//! Constants file generation.

use super::ir::{Initializer, Item, RustType, SourceFile, StaticDecl};
use super::{EmitOptions, GENERATED_HEADER};
use crate::error::Result;
use crate::tables::{Constant, SemanticType};
use tracing::{debug, info};

const CHRONO_USE: &str = "chrono::{DateTime, Utc}";

/// Generate the constants file: one `pub static` per record, in table order.
///
/// `chrono` is imported only when at least one constant is an instant.
pub fn generate_constants_string(constants: &[Constant], options: &EmitOptions) -> Result<String> {
    info!(constant_count = constants.len(), "Generating constants");

    let items = constants
        .iter()
        .map(|constant| lower_constant(constant, options).map(Item::Static))
        .collect::<Result<Vec<_>>>()?;

    let needs_chrono = items
        .iter()
        .any(|item| matches!(item, Item::Static(decl) if decl.ty == RustType::DateTimeUtc));
    let uses = if needs_chrono {
        vec![CHRONO_USE.to_string()]
    } else {
        Vec::new()
    };

    Ok(SourceFile::new(uses, items)
        .with_header(GENERATED_HEADER)
        .render())
}

fn lower_constant(constant: &Constant, options: &EmitOptions) -> Result<StaticDecl> {
    let name = format!("{}{}", options.private_prefix, constant.name);
    let semantic_type = constant.semantic_type()?;
    debug!(constant = %name, %semantic_type, "Lowering constant");

    let (ty, init) = match semantic_type {
        SemanticType::Real => (RustType::F64, Initializer::Verbatim(constant.value.clone())),
        SemanticType::Integer => (RustType::I64, Initializer::Verbatim(constant.value.clone())),
        SemanticType::Instant => (
            RustType::DateTimeUtc,
            Initializer::TimestampMillis {
                millis: constant.value.clone(),
                label: name.clone(),
            },
        ),
    };
    Ok(StaticDecl { name, ty, init })
}
