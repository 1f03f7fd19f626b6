//! Annotating one entity source file.
//!
//! [`EntityAnnotator::annotate`] ties the pipeline together: compute hints
//! for the schema, turn every hint string into a [`PropertyAnnotation`], merge
//! them into the class docblock and write the file back. All annotations are
//! parsed before anything is written, so a bad hint leaves the file as it was.

use crate::annotation::{merge_annotations, PropertyAnnotation};
use crate::config::HintContext;
use crate::error::{AnnotatorError, Result};
use crate::hints::{EntityHints, SchemaAnnotationBuilder};
use crate::oracle::ClassExistence;
use crate::schema::TableSchema;
use std::fs;
use std::path::Path;

/// File stem of the framework's base entity class, which is never annotated.
pub const BASE_ENTITY_SENTINEL: &str = "Entity";

/// What [`EntityAnnotator::annotate`] did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateOutcome {
    /// The file is the base entity class
    Skipped,
    /// Every annotation was already present
    Unchanged,
    /// Annotations were added or rewritten (or would be, in dry-run mode)
    Updated { added: usize, updated: usize },
}

pub struct EntityAnnotator<'a> {
    ctx: &'a HintContext,
    oracle: &'a dyn ClassExistence,
    schema: &'a TableSchema,
    dry_run: bool,
}

impl<'a> EntityAnnotator<'a> {
    pub fn new(
        ctx: &'a HintContext,
        oracle: &'a dyn ClassExistence,
        schema: &'a TableSchema,
    ) -> Self {
        EntityAnnotator {
            ctx,
            oracle,
            schema,
            dry_run: false,
        }
    }

    /// Compute the outcome without writing the file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Hints for the schema, without touching any file.
    pub fn hints(&self) -> EntityHints {
        SchemaAnnotationBuilder::new(self.ctx, self.oracle).build(self.schema)
    }

    /// Parse every hint into an annotation, failing on the first bad one.
    pub fn annotations(&self) -> Result<Vec<PropertyAnnotation>> {
        self.hints()
            .annotation_strings()
            .iter()
            .map(|s| PropertyAnnotation::parse(s))
            .collect()
    }

    /// Annotate the entity class in `path`.
    ///
    /// # Errors
    ///
    /// I/O failures, a hint that does not form a valid annotation, or a file
    /// without a class declaration. The file is not modified in any of these
    /// cases.
    pub fn annotate(&self, path: &Path) -> Result<AnnotateOutcome> {
        if path.file_stem().is_some_and(|stem| stem == BASE_ENTITY_SENTINEL) {
            tracing::debug!(path = %path.display(), "skipping base entity class");
            return Ok(AnnotateOutcome::Skipped);
        }

        let content = fs::read_to_string(path).map_err(|source| AnnotatorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let annotations = self.annotations()?;
        let merged = merge_annotations(&content, &annotations, path)?;

        if !merged.is_changed() {
            tracing::info!(path = %path.display(), "annotations up to date");
            return Ok(AnnotateOutcome::Unchanged);
        }

        if !self.dry_run {
            fs::write(path, &merged.content).map_err(|source| AnnotatorError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        tracing::info!(
            path = %path.display(),
            added = merged.added,
            updated = merged.updated,
            dry_run = self.dry_run,
            "annotated entity"
        );
        Ok(AnnotateOutcome::Updated {
            added: merged.added,
            updated: merged.updated,
        })
    }
}
