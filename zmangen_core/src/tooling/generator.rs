//! File generation driver.

use crate::ast::CompilationUnit;
use crate::classifier::{MethodBuckets, classify, generate_calculations_string};
use crate::codegen::{EmitOptions, generate_constants_string, generate_enums_string};
use crate::config::ZmangenConfig;
use crate::error::{Result, ZmangenError};
use crate::tables::ReferenceTables;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The artifact a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `pub static` constants.
    Constants,
    /// Plain and transliterated enums.
    Enums,
    /// The calculations enum skeleton.
    Calculations,
}

/// Information about a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// The path where the file was written.
    pub path: PathBuf,
    /// The number of bytes written.
    pub bytes_written: usize,
    pub kind: ArtifactKind,
}

/// Manual work left on an emitted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub table: String,
    pub notice: String,
}

/// Report of a full generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// List of files that were generated.
    pub files: Vec<GeneratedFile>,
    pub constants_processed: usize,
    pub enums_processed: usize,
    pub transliterated_processed: usize,
    /// Notices the operator has to act on, in table order.
    pub follow_ups: Vec<FollowUp>,
}

/// Result of the classifier pass.
#[derive(Debug, Clone)]
pub struct CalculationsOutput {
    pub buckets: MethodBuckets,
    /// The rendered skeleton.
    pub source: String,
    /// Set when the skeleton was written to a file.
    pub file: Option<GeneratedFile>,
}

/// Writes generated sources for one configuration and set of tables.
pub struct Generator {
    config: ZmangenConfig,
    tables: ReferenceTables,
}

impl Generator {
    pub fn new(config: ZmangenConfig, tables: ReferenceTables) -> Self {
        Self { config, tables }
    }

    /// Creates a generator over the tables the configuration points at.
    pub fn from_config(config: ZmangenConfig) -> Result<Self> {
        let tables = ReferenceTables::load(&config)?;
        Ok(Self::new(config, tables))
    }

    pub fn config(&self) -> &ZmangenConfig {
        &self.config
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Generates the constants and enums files at their configured paths.
    pub fn generate_all(&self) -> Result<GenerationReport> {
        info!("Starting generation");
        let mut report = GenerationReport {
            constants_processed: self.tables.constants.len(),
            enums_processed: self.tables.enums.len(),
            transliterated_processed: self.tables.transliterated_enums.len(),
            ..GenerationReport::default()
        };

        report
            .files
            .push(self.generate_constants(&self.config.constants_output())?);
        report
            .files
            .push(self.generate_enums(&self.config.enums_output())?);
        report.follow_ups = self.follow_ups();

        info!(
            "Generation complete. Generated {} files",
            report.files.len()
        );
        Ok(report)
    }

    pub fn generate_constants(&self, path: &Path) -> Result<GeneratedFile> {
        info!("Generating constants");
        let content =
            generate_constants_string(&self.tables.constants, &self.emit_options())?;
        write_artifact(path, &content, ArtifactKind::Constants)
    }

    pub fn generate_enums(&self, path: &Path) -> Result<GeneratedFile> {
        info!("Generating enums");
        let content = generate_enums_string(
            &self.tables.enums,
            &self.tables.transliterated_enums,
            &self.emit_options(),
        )?;
        write_artifact(path, &content, ArtifactKind::Enums)
    }

    /// Classifies the AST at `ast_path` and renders the calculations enum,
    /// writing it to `output` when given.
    pub fn generate_calculations(
        &self,
        ast_path: &Path,
        output: Option<&Path>,
    ) -> Result<CalculationsOutput> {
        let unit = CompilationUnit::from_file(ast_path)?;
        let buckets = classify(&unit)?;
        let source = generate_calculations_string(&buckets, &self.config.classify.enum_name);

        let file = match output {
            Some(path) => Some(write_artifact(path, &source, ArtifactKind::Calculations)?),
            None => None,
        };
        Ok(CalculationsOutput {
            buckets,
            source,
            file,
        })
    }

    pub fn follow_ups(&self) -> Vec<FollowUp> {
        self.tables
            .follow_ups()
            .into_iter()
            .map(|(table, notice)| FollowUp {
                table: table.to_string(),
                notice: notice.to_string(),
            })
            .collect()
    }

    fn emit_options(&self) -> EmitOptions {
        EmitOptions::from(&self.config.emit)
    }
}

fn write_artifact(path: &Path, content: &str, kind: ArtifactKind) -> Result<GeneratedFile> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring output directory {:?}", parent);
        fs::create_dir_all(parent).map_err(|e| ZmangenError::write(path, e))?;
    }
    fs::write(path, content).map_err(|e| ZmangenError::write(path, e))?;
    info!("{:?} written to {:?}", kind, path);

    Ok(GeneratedFile {
        path: path.to_path_buf(),
        bytes_written: content.len(),
        kind,
    })
}
