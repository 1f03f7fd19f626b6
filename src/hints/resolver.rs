use crate::config::{NullableMap, TypeMap};
use std::fmt;

/// A property type hint: a base type plus whether `null` is also allowed.
///
/// Kept structured until it is rendered into an annotation, where it becomes
/// `base` or `base|null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeHint {
    pub base: String,
    pub nullable: bool,
}

impl TypeHint {
    pub fn new(base: impl Into<String>) -> Self {
        TypeHint {
            base: base.into(),
            nullable: false,
        }
    }

    pub fn nullable(base: impl Into<String>) -> Self {
        TypeHint {
            base: base.into(),
            nullable: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}|null", self.base)
        } else {
            f.write_str(&self.base)
        }
    }
}

/// The code-generation library's own column type mapping.
///
/// These are the "base" hints; [`TypeMap`] entries override them.
pub fn library_hint_type(db_type: &str) -> Option<&'static str> {
    match db_type {
        "char" | "string" | "text" | "uuid" => Some("string"),
        "integer" | "biginteger" | "smallinteger" | "tinyinteger" => Some("int"),
        "float" | "decimal" => Some("float"),
        "boolean" => Some("bool"),
        "binary" => Some("string|resource"),
        "date" => Some("\\Cake\\I18n\\FrozenDate"),
        "datetime" | "time" | "timestamp" => Some("\\Cake\\I18n\\FrozenTime"),
        _ => None,
    }
}

/// Maps a column's storage type to a hint, decorated for nullability.
#[derive(Debug, Clone, Copy)]
pub struct TypeHintResolver<'a> {
    type_map: &'a TypeMap,
    nullable_map: &'a NullableMap,
}

impl<'a> TypeHintResolver<'a> {
    pub fn new(type_map: &'a TypeMap, nullable_map: &'a NullableMap) -> Self {
        TypeHintResolver {
            type_map,
            nullable_map,
        }
    }

    /// Look up `db_type` in the type map. `None` means the type is unsupported
    /// and the column gets no annotation.
    pub fn resolve_base_type(&self, db_type: &str) -> Option<&'a str> {
        self.type_map.get(db_type)
    }

    /// Attach nullability to a hint type.
    ///
    /// Absent hints stay absent and empty hints stay empty. A nullable column
    /// gets `|null` unless the nullable map opts the hint type out.
    pub fn apply_nullable(&self, hint_type: Option<&str>, is_nullable: bool) -> Option<TypeHint> {
        let base = hint_type?;
        if base.is_empty() || !is_nullable || self.nullable_map.opts_out(base) {
            return Some(TypeHint::new(base));
        }
        Some(TypeHint::nullable(base))
    }

    /// Hint from the configurable type map.
    pub fn extended_hint(&self, db_type: &str, is_nullable: bool) -> Option<TypeHint> {
        self.apply_nullable(self.resolve_base_type(db_type), is_nullable)
    }

    /// Hint from the library-default mapping.
    pub fn base_hint(&self, db_type: &str, is_nullable: bool) -> Option<TypeHint> {
        self.apply_nullable(library_hint_type(db_type), is_nullable)
    }
}
