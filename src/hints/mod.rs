//! # Hints Module
//!
//! Derives `@property` type hints for an entity class from its table schema.
//!
//! ## Flow
//!
//! ```text
//! TableSchema ─ hydrate ─► UnifiedSchema ─┬─ columns ──────► property hints
//!                                         └─ associations ─► association hints
//! ```
//!
//! 1. **Hydrate** - columns are copied into a [`UnifiedSchema`], then each
//!    association is resolved to a target entity class and added under its
//!    property name. Associations that fail to resolve are logged and dropped.
//! 2. **Column hints** - two computations run over every column: the
//!    library-default mapping ([`library_hint_type`]) and the configurable
//!    [`TypeMap`](crate::config::TypeMap). The configurable one wins; columns
//!    neither knows are left unannotated.
//! 3. **Association hints** - the resolved target class, `Class[]` for
//!    has-many and belongs-to-many associations.
//!
//! ## Nullability
//!
//! A nullable column renders as `type|null` unless the nullable map opts that
//! hint type out (`array = false`).

mod association;
mod builder;
mod inflector;
mod resolver;
#[cfg(test)]
mod tests;

pub use association::*;
pub use builder::*;
pub use inflector::{camelize, entity_name, is_class_name, singularize};
pub use resolver::*;
