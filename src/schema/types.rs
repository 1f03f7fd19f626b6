use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata of one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Storage-level type name (e.g. `integer`, `mediumtext`, `json`)
    #[serde(rename = "type")]
    pub db_type: String,
    /// Whether the column accepts `NULL`
    #[serde(rename = "null", default)]
    pub nullable: bool,
}

impl ColumnMeta {
    pub fn new(db_type: impl Into<String>, nullable: bool) -> Self {
        ColumnMeta {
            db_type: db_type.into(),
            nullable,
        }
    }
}

/// Cardinality of an association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// belongsTo
    #[default]
    ManyToOne,
    /// hasOne
    OneToOne,
    /// hasMany
    OneToMany,
    /// belongsToMany
    ManyToMany,
}

impl AssociationKind {
    /// Whether the association property holds a list of entities.
    pub fn is_collection(self) -> bool {
        matches!(self, AssociationKind::OneToMany | AssociationKind::ManyToMany)
    }
}

/// An association declared on the entity's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationMeta {
    /// Entity property holding the associated data (e.g. `author`)
    pub property: String,
    /// Target table alias (e.g. `Authors`)
    pub alias: String,
    /// Target registry alias, `Plugin.Alias` for plugin tables. Defaults to `alias`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_alias: Option<String>,
    /// Entity class of the target table; `None` means the generic entity class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_class: Option<String>,
    #[serde(default)]
    pub kind: AssociationKind,
}

impl AssociationMeta {
    pub fn new(property: impl Into<String>, alias: impl Into<String>) -> Self {
        AssociationMeta {
            property: property.into(),
            alias: alias.into(),
            registry_alias: None,
            entity_class: None,
            kind: AssociationKind::default(),
        }
    }

    pub fn with_entity_class(mut self, class: impl Into<String>) -> Self {
        self.entity_class = Some(class.into());
        self
    }

    pub fn with_registry_alias(mut self, registry_alias: impl Into<String>) -> Self {
        self.registry_alias = Some(registry_alias.into());
        self
    }

    pub fn with_kind(mut self, kind: AssociationKind) -> Self {
        self.kind = kind;
        self
    }

    /// The registry alias, falling back to the plain alias.
    pub fn registry_alias(&self) -> &str {
        self.registry_alias.as_deref().unwrap_or(&self.alias)
    }
}

/// Columns and associations of one entity's table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default)]
    pub columns: IndexMap<String, ColumnMeta>,
    #[serde(default)]
    pub associations: Vec<AssociationMeta>,
}

impl TableSchema {
    pub fn with_column(mut self, name: impl Into<String>, column: ColumnMeta) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    pub fn with_association(mut self, association: AssociationMeta) -> Self {
        self.associations.push(association);
        self
    }
}
