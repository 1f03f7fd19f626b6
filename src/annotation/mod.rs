//! # Annotation Module
//!
//! Turns hint strings into structured `@property` annotations and merges them
//! into the docblock directly above a class declaration.
//!
//! ```rust,ignore
//! use entity_annotator::annotation::{merge_annotations, PropertyAnnotation};
//!
//! let annotations = vec![PropertyAnnotation::parse("@property int $id")?];
//! let merged = merge_annotations(source, &annotations, path)?;
//! if merged.is_changed() {
//!     std::fs::write(path, &merged.content)?;
//! }
//! ```

mod docblock;
mod property;
mod writer;

pub use docblock::*;
pub use property::*;
pub use writer::*;
