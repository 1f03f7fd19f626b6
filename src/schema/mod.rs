//! # Schema Module
//!
//! Input data model for one entity: the table's columns and the associations
//! declared on its table class, as produced by schema introspection.
//!
//! The annotator does not introspect databases itself. A schema description
//! is supplied as YAML or JSON:
//!
//! ```yaml
//! table: articles
//! columns:
//!   id: { type: integer }
//!   title: { type: string }
//!   body: { type: mediumtext, null: true }
//! associations:
//!   - property: author
//!     alias: Authors
//!     entity_class: App\Model\Entity\Author
//!   - property: tags
//!     alias: Tags
//!     kind: many_to_many
//! ```
//!
//! Column order is preserved and determines annotation order.

mod load;
mod types;

pub use load::*;
pub use types::*;
