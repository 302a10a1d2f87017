//! Text rendering of the source IR.
//!
//! Every node implements [`Emit`] against a [`CodeWriter`], which owns the
//! indentation. Layout rules:
//! - header comments, then `use` declarations, each group followed by a blank line
//! - consecutive statics are kept together; every other item is separated by a blank line
//! - four-space indentation, trailing commas on variants and match arms

use super::ir::{
    EnumDecl, ImplBlock, Initializer, Item, MatchArm, MatchFn, SourceFile, StaticDecl, Variant,
};

const INDENT: &str = "    ";

/// Line-oriented string builder with block indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
    output: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one indented line.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write `opener {`, the body one level deeper, then the closing brace.
    pub fn block(&mut self, opener: &str, body: impl FnOnce(&mut Self)) {
        self.line(&format!("{opener} {{"));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Rendering of an IR node.
pub trait Emit {
    fn emit(&self, w: &mut CodeWriter);
}

impl SourceFile {
    pub fn render(&self) -> String {
        let mut w = CodeWriter::new();
        self.emit(&mut w);
        w.finish()
    }
}

impl Emit for SourceFile {
    fn emit(&self, w: &mut CodeWriter) {
        if !self.header.is_empty() {
            for line in &self.header {
                if line.is_empty() {
                    w.line("//");
                } else {
                    w.line(&format!("// {line}"));
                }
            }
            w.blank();
        }

        if !self.uses.is_empty() {
            for path in &self.uses {
                w.line(&format!("use {path};"));
            }
            w.blank();
        }

        let mut previous: Option<&Item> = None;
        for item in &self.items {
            let keep_together = matches!(
                (previous, item),
                (Some(Item::Static(_)), Item::Static(_))
            );
            if previous.is_some() && !keep_together {
                w.blank();
            }
            item.emit(w);
            previous = Some(item);
        }
    }
}

impl Emit for Item {
    fn emit(&self, w: &mut CodeWriter) {
        match self {
            Item::Static(decl) => decl.emit(w),
            Item::Enum(decl) => decl.emit(w),
            Item::Impl(block) => block.emit(w),
        }
    }
}

impl Emit for StaticDecl {
    fn emit(&self, w: &mut CodeWriter) {
        let init = match &self.init {
            Initializer::Verbatim(expr) => expr.clone(),
            Initializer::TimestampMillis { millis, label } => format!(
                "DateTime::from_timestamp_millis({millis}).expect(\"{}\")",
                escape_rust_str(&format!("{label} is out of range"))
            ),
        };
        w.line(&format!(
            "pub static {}: {} = {};",
            self.name,
            self.ty.as_str(),
            init
        ));
    }
}

impl Emit for EnumDecl {
    fn emit(&self, w: &mut CodeWriter) {
        if !self.derives.is_empty() {
            w.line(&format!("#[derive({})]", self.derives.join(", ")));
        }
        if let Some(repr) = &self.repr {
            w.line(&format!("#[repr({repr})]"));
        }
        w.block(&format!("pub enum {}", self.name), |w| {
            for variant in &self.variants {
                variant.emit(w);
            }
        });
    }
}

impl Emit for Variant {
    fn emit(&self, w: &mut CodeWriter) {
        match self.discriminant {
            Some(value) => w.line(&format!("{} = {},", self.name, value)),
            None => w.line(&format!("{},", self.name)),
        }
    }
}

impl Emit for ImplBlock {
    fn emit(&self, w: &mut CodeWriter) {
        w.block(&format!("impl {}", self.target), |w| {
            for (i, method) in self.methods.iter().enumerate() {
                if i > 0 {
                    w.blank();
                }
                MatchFnInImpl {
                    target: &self.target,
                    method,
                }
                .emit(w);
            }
        });
    }
}

/// A [`MatchFn`] together with the type its arms name.
struct MatchFnInImpl<'a> {
    target: &'a str,
    method: &'a MatchFn,
}

impl Emit for MatchFnInImpl<'_> {
    fn emit(&self, w: &mut CodeWriter) {
        let opener = format!("pub fn {}(&self) -> &'static str", self.method.name);
        w.block(&opener, |w| {
            w.block("match self", |w| {
                for arm in &self.method.arms {
                    emit_arm(self.target, arm, w);
                }
            });
        });
    }
}

fn emit_arm(target: &str, arm: &MatchArm, w: &mut CodeWriter) {
    w.line(&format!(
        "{}::{} => \"{}\",",
        target,
        arm.variant,
        escape_rust_str(&arm.value)
    ));
}

/// Escape text for use inside a Rust string literal.
pub fn escape_rust_str(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
