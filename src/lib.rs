//! # entity-annotator
//!
//! Derives `@property` type-hint annotations for ORM entity classes from the
//! schema of their table, and merges them into the class docblock.
//!
//! ## Overview
//!
//! Given the columns of a table (database type and nullability) and the
//! associations declared on it, the annotator computes one hint per property:
//!
//! - columns map to PHP types, either through the library-default column
//!   mapping or through a configurable type map that widens it
//!   (`json` → `array`, `mediumtext` → `string`)
//! - nullable columns get `|null` unless the hint type opts out
//! - associations map to their target entity class; a target without a
//!   concrete class falls back to the conventional `\App\Model\Entity\<Name>`
//!   when that class exists
//!
//! ## Architecture
//!
//! - **[`schema`]** - Table schema input model and YAML/JSON loading
//! - **[`config`]** - `entity-annotator.toml` and the compiled [`HintContext`]
//! - **[`oracle`]** - Class existence checks for association targets
//! - **[`hints`]** - [`TypeHintResolver`] and [`SchemaAnnotationBuilder`]
//! - **[`annotation`]** - `@property` parsing and docblock merging
//! - **[`annotator`]** - [`EntityAnnotator`], one file end to end
//! - **[`cli`]** - `entity-annotator` command line
//! - **[`logging`]** - tracing subscriber setup
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(entity-annotator)
//!     participant Schema as schema::load_schema
//!     participant Builder as SchemaAnnotationBuilder
//!     participant Oracle as ClassExistence
//!     participant Writer as annotation::merge_annotations
//!     participant FS as File System
//!
//!     CLI->>Schema: load_schema("articles.yaml")
//!     Schema-->>CLI: TableSchema
//!     CLI->>Builder: build(&schema)
//!     Builder->>Builder: hydrate (columns + associations)
//!     Builder->>Oracle: class_exists("\App\Model\Entity\Tag")
//!     Oracle-->>Builder: bool
//!     Builder-->>CLI: EntityHints
//!     CLI->>Writer: merge_annotations(source, annotations)
//!     Writer-->>CLI: MergeResult
//!     CLI->>FS: write file (if changed)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use entity_annotator::{EntityAnnotator, HintContext, KnownClasses};
//! use entity_annotator::schema::load_schema;
//!
//! let schema = load_schema("schema/articles.yaml".as_ref())?;
//! let ctx = HintContext::default();
//! let oracle = KnownClasses::new(["\\App\\Model\\Entity\\Tag"]);
//! let outcome = EntityAnnotator::new(&ctx, &oracle, &schema)
//!     .annotate("src/Model/Entity/Article.php".as_ref())?;
//! ```

pub mod annotation;
pub mod annotator;
pub mod cli;
pub mod config;
pub mod error;
pub mod hints;
pub mod logging;
pub mod oracle;
pub mod schema;

pub use annotator::{AnnotateOutcome, EntityAnnotator};
pub use config::{AnnotatorConfig, HintContext};
pub use error::{AnnotatorError, AssociationError};
pub use hints::{EntityHints, SchemaAnnotationBuilder, TypeHint, TypeHintResolver};
pub use oracle::{ClassExistence, KnownClasses, SourceTreeOracle};
pub use schema::{AssociationMeta, ColumnMeta, TableSchema};
