//! Error types for the annotation pipeline.
//!
//! Per-entry problems (an unmapped column type, one association that cannot
//! be resolved) never surface here as a top-level failure: unmapped types are
//! silently omitted and [`AssociationError`]s are logged and the association
//! dropped. [`AnnotatorError`] is reserved for failures that abort annotating
//! a whole file, which is then left untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Failure that aborts annotating one file.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// A computed hint could not be turned into a structured annotation.
    ///
    /// Usually a configuration problem, e.g. a `type_map` value containing
    /// whitespace.
    #[error("Cannot factorize annotation `{0}`")]
    AnnotationParse(String),

    /// The target file has no class declaration to annotate.
    #[error("no class declaration found in {}", path.display())]
    ClassNotFound {
        /// File that was searched
        path: PathBuf,
    },

    /// Reading or writing the target file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The docblock template failed to render.
    #[error("failed to render docblock: {0}")]
    Render(#[from] askama::Error),
}

/// Why the target entity class of one association could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssociationError {
    #[error("association `{property}` has an empty target alias")]
    EmptyAlias { property: String },

    #[error("association `{property}` target alias `{alias}` does not form a class name")]
    InvalidAlias { property: String, alias: String },

    #[error("association `{property}` resolves to an empty namespace")]
    EmptyNamespace { property: String },
}

pub type Result<T> = std::result::Result<T, AnnotatorError>;
