//! Binding generation.
//!
//! This module orchestrates a full generation run:
//! 1. Discover the category's assets (sorted, exclusions removed)
//! 2. Synthesize an identifier and record a binding for each asset
//! 3. Bucket identifiers by group key
//! 4. Merge groups into their ancestors
//! 5. Render the output and write it atomically
//!
//! Every run recomputes everything from the filesystem; running twice over
//! an unchanged tree produces byte-identical output.

mod embed;
mod error;
mod output;

pub use embed::{quote, BlobEmbedder, Embedder};
pub use error::{EmitError, EmitResult};
pub use output::{render, write_atomic};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::asset::{group_key, synthesize, AssetPath, Identifier};
use crate::category::AssetCategory;
use crate::discovery::discover;
use crate::group::{GroupMap, MergedGroupMap};

/// One generated binding: identifier, asset path and content reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRecord {
    /// Synthesized identifier.
    pub identifier: Identifier,

    /// The asset the binding points at.
    pub path: AssetPath,

    /// Embedded-content reference returned by the [`Embedder`].
    pub content: String,
}

impl BindingRecord {
    /// Render the binding declaration line.
    pub fn line(&self, category: &AssetCategory) -> String {
        format!(
            "let {} : string * string = {}, {}",
            category.binding_name(&self.identifier),
            quote(self.path.display_path()),
            self.content
        )
    }
}

/// Accumulated state of one generation run.
///
/// Owns the binding records and the direct group map; discarded once the
/// output has been written.
#[derive(Debug, Default)]
pub struct EmitContext {
    records: Vec<BindingRecord>,
    groups: GroupMap,
    owners: HashMap<Identifier, String>,
}

impl EmitContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a binding and add it to its group.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::DuplicateIdentifier`] if another asset already
    /// produced the same identifier.
    pub fn add(&mut self, record: BindingRecord) -> EmitResult<()> {
        if let Some(first) = self.owners.get(&record.identifier) {
            return Err(EmitError::DuplicateIdentifier {
                identifier: record.identifier.clone(),
                first: first.clone(),
                second: record.path.display_path().to_string(),
            });
        }
        self.owners.insert(
            record.identifier.clone(),
            record.path.display_path().to_string(),
        );

        self.groups
            .insert(group_key(&record.path), record.identifier.clone());
        self.records.push(record);
        Ok(())
    }

    /// Recorded bindings in discovery order.
    pub fn records(&self) -> &[BindingRecord] {
        &self.records
    }

    /// Direct group membership.
    pub fn groups(&self) -> &GroupMap {
        &self.groups
    }

    /// Merge the groups into their ancestors.
    pub fn merge(&self) -> MergedGroupMap {
        self.groups.merge()
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    /// Path of the written file.
    pub output: PathBuf,

    /// Number of bindings written.
    pub bindings: usize,

    /// Number of group lists written.
    pub groups: usize,
}

/// Generates the bindings file for one category.
#[derive(Debug)]
pub struct BindingEmitter<'a, E = BlobEmbedder> {
    category: &'a AssetCategory,
    embedder: E,
}

impl<'a> BindingEmitter<'a, BlobEmbedder> {
    /// Create an emitter using `[%blob ...]` content references.
    pub fn new(category: &'a AssetCategory) -> Self {
        Self::with_embedder(category, BlobEmbedder)
    }
}

impl<'a, E: Embedder> BindingEmitter<'a, E> {
    /// Create an emitter with a custom embedder.
    pub fn with_embedder(category: &'a AssetCategory, embedder: E) -> Self {
        Self { category, embedder }
    }

    /// The category being generated.
    pub fn category(&self) -> &AssetCategory {
        self.category
    }

    /// Discover assets and build the run context.
    pub fn collect(&self) -> EmitResult<EmitContext> {
        let mut context = EmitContext::new();

        for path in discover(self.category)? {
            let identifier = synthesize(&path, &self.category.suffix);
            let content = self.embedder.embed(path.display_path());
            debug!(identifier = %identifier, path = path.display_path(), "Binding");

            context.add(BindingRecord {
                identifier,
                path,
                content,
            })?;
        }

        Ok(context)
    }

    /// Discover, merge and render the output text without writing it.
    pub fn generate(&self) -> EmitResult<String> {
        let context = self.collect()?;
        let merged = context.merge();
        Ok(render(self.category, context.records(), &merged))
    }

    /// Generate the bindings file and write it to `output`.
    ///
    /// The file is replaced atomically; on failure any previous output is
    /// left untouched.
    pub fn emit(&self, output: &Path) -> EmitResult<EmitSummary> {
        let context = self.collect()?;
        let merged = context.merge();
        let text = render(self.category, context.records(), &merged);

        write_atomic(output, &text)?;

        let groups = if self.category.emit_groups {
            merged.emitted().count()
        } else {
            0
        };
        let summary = EmitSummary {
            output: output.to_path_buf(),
            bindings: context.records().len(),
            groups,
        };

        info!(
            category = %self.category.name,
            output = %output.display(),
            bindings = summary.bindings,
            groups = summary.groups,
            "Bindings written"
        );

        Ok(summary)
    }
}
