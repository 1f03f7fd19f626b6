use super::association::resolve_target_entity;
use super::resolver::{TypeHint, TypeHintResolver};
use crate::config::HintContext;
use crate::error::AssociationError;
use crate::oracle::ClassExistence;
use crate::schema::{AssociationMeta, ColumnMeta, TableSchema};
use indexmap::IndexMap;

/// Ordered property name → hint map.
pub type PropertyHintMap = IndexMap<String, TypeHint>;

/// An association whose target entity class has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssociation {
    /// Fully-qualified target entity class
    pub target_entity_class: String,
    pub association: AssociationMeta,
}

impl ResolvedAssociation {
    /// Hint for the association property; collections get the `[]` form.
    pub fn hint(&self) -> TypeHint {
        if self.association.kind.is_collection() {
            TypeHint::new(format!("{}[]", self.target_entity_class))
        } else {
            TypeHint::new(self.target_entity_class.clone())
        }
    }
}

/// One entry of the unified schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEntry {
    Column(ColumnMeta),
    Association(ResolvedAssociation),
}

/// Columns and resolved associations keyed by property, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedSchema {
    pub entries: IndexMap<String, SchemaEntry>,
}

impl UnifiedSchema {
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnMeta)> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            SchemaEntry::Column(column) => Some((name.as_str(), column)),
            SchemaEntry::Association(_) => None,
        })
    }

    pub fn associations(&self) -> impl Iterator<Item = (&str, &ResolvedAssociation)> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            SchemaEntry::Association(assoc) => Some((name.as_str(), assoc)),
            SchemaEntry::Column(_) => None,
        })
    }
}

/// Result of [`SchemaAnnotationBuilder::hydrate`].
#[derive(Debug, Clone, Default)]
pub struct Hydrated {
    pub schema: UnifiedSchema,
    /// Associations dropped because their target could not be resolved
    pub skipped: Vec<AssociationError>,
}

/// Column and association hints for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityHints {
    pub properties: PropertyHintMap,
    pub associations: PropertyHintMap,
}

impl EntityHints {
    /// `@property` annotation strings: column hints, then association hints.
    pub fn annotation_strings(&self) -> Vec<String> {
        self.properties
            .iter()
            .chain(self.associations.iter())
            .map(|(name, hint)| format!("@property {hint} ${name}"))
            .collect()
    }
}

/// Derives property type hints from a table schema.
pub struct SchemaAnnotationBuilder<'a> {
    ctx: &'a HintContext,
    oracle: &'a dyn ClassExistence,
}

impl<'a> SchemaAnnotationBuilder<'a> {
    pub fn new(ctx: &'a HintContext, oracle: &'a dyn ClassExistence) -> Self {
        SchemaAnnotationBuilder { ctx, oracle }
    }

    fn resolver(&self) -> TypeHintResolver<'a> {
        TypeHintResolver::new(&self.ctx.type_map, &self.ctx.nullable_map)
    }

    /// Resolve each association's target class, one result per association.
    pub fn resolve_associations(
        &self,
        associations: &[AssociationMeta],
    ) -> Vec<Result<ResolvedAssociation, AssociationError>> {
        associations
            .iter()
            .map(|association| {
                resolve_target_entity(association, self.ctx, self.oracle).map(|class| {
                    ResolvedAssociation {
                        target_entity_class: class,
                        association: association.clone(),
                    }
                })
            })
            .collect()
    }

    /// Merge columns and resolved associations into one schema.
    ///
    /// An association whose target cannot be resolved is logged and left out;
    /// the rest of the schema is still built. An association sharing a
    /// property name with a column replaces that column entry in place.
    pub fn hydrate(&self, schema: &TableSchema) -> Hydrated {
        let mut entries: IndexMap<String, SchemaEntry> = schema
            .columns
            .iter()
            .map(|(name, column)| (name.clone(), SchemaEntry::Column(column.clone())))
            .collect();
        let mut skipped = Vec::new();

        for result in self.resolve_associations(&schema.associations) {
            match result {
                Ok(resolved) => {
                    let property = resolved.association.property.clone();
                    if let Some(SchemaEntry::Column(_)) = entries.get(&property) {
                        tracing::debug!(%property, "association replaces column entry");
                    }
                    entries.insert(property, SchemaEntry::Association(resolved));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping association");
                    skipped.push(err);
                }
            }
        }

        Hydrated {
            schema: UnifiedSchema { entries },
            skipped,
        }
    }

    /// Hints from the library-default column mapping. Unsupported types map
    /// to `None`.
    pub fn base_property_hints(&self, schema: &UnifiedSchema) -> IndexMap<String, Option<TypeHint>> {
        let resolver = self.resolver();
        schema
            .columns()
            .map(|(name, column)| {
                (
                    name.to_string(),
                    resolver.base_hint(&column.db_type, column.nullable),
                )
            })
            .collect()
    }

    /// Hints from the configurable type map; unmapped columns are left out.
    ///
    /// A column mapped to an empty type keeps its empty hint, which still
    /// overrides the base hint and is dropped afterwards.
    pub fn extended_property_hints(&self, schema: &UnifiedSchema) -> PropertyHintMap {
        let resolver = self.resolver();
        schema
            .columns()
            .filter_map(|(name, column)| {
                resolver
                    .extended_hint(&column.db_type, column.nullable)
                    .map(|hint| (name.to_string(), hint))
            })
            .collect()
    }

    /// Final column hints: extended hints override base hints, entries without
    /// a hint are dropped. Order follows the schema's column order.
    pub fn build_property_hints(&self, schema: &UnifiedSchema) -> PropertyHintMap {
        let mut extended = self.extended_property_hints(schema);
        self.base_property_hints(schema)
            .into_iter()
            .filter_map(|(name, base)| {
                let hint = extended.shift_remove(&name).or(base)?;
                if hint.is_empty() {
                    return None;
                }
                Some((name, hint))
            })
            .collect()
    }

    /// Association property hints, always present for every resolved association.
    pub fn build_association_hints(&self, schema: &UnifiedSchema) -> PropertyHintMap {
        schema
            .associations()
            .map(|(name, assoc)| (name.to_string(), assoc.hint()))
            .collect()
    }

    /// Hydrate and compute both hint maps.
    pub fn build(&self, schema: &TableSchema) -> EntityHints {
        let hydrated = self.hydrate(schema);
        EntityHints {
            properties: self.build_property_hints(&hydrated.schema),
            associations: self.build_association_hints(&hydrated.schema),
        }
    }
}
