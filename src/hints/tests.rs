#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::{AnnotatorConfig, HintContext};
use crate::error::AssociationError;
use crate::oracle::KnownClasses;
use crate::schema::{AssociationKind, AssociationMeta, ColumnMeta, TableSchema};

fn hints_as_strings(map: &PropertyHintMap) -> Vec<(String, String)> {
    map.iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn article_schema() -> TableSchema {
    TableSchema::default()
        .with_column("title", ColumnMeta::new("string", false))
        .with_column("body", ColumnMeta::new("mediumtext", true))
        .with_column("data", ColumnMeta::new("json", false))
}

#[test]
fn test_end_to_end_default_type_map() {
    let ctx = HintContext::default();
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let hints = builder.build(&article_schema());
    assert_eq!(
        hints_as_strings(&hints.properties),
        pairs(&[("title", "string"), ("body", "string|null"), ("data", "array")])
    );
    assert!(hints.associations.is_empty());
}

#[test]
fn test_nullable_opt_out() {
    let mut config = AnnotatorConfig::default();
    config.nullable_map.insert("array".to_string(), false);
    let ctx = HintContext::from_config(&config);
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let schema = TableSchema::default().with_column("payload", ColumnMeta::new("json", true));
    let hints = builder.build(&schema);
    assert_eq!(hints_as_strings(&hints.properties), pairs(&[("payload", "array")]));
}

#[test]
fn test_unsupported_types_are_omitted() {
    let ctx = HintContext::default();
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let schema = TableSchema::default()
        .with_column("id", ColumnMeta::new("integer", false))
        .with_column("shape", ColumnMeta::new("geometry", true))
        .with_column("created", ColumnMeta::new("datetime", true));
    let hints = builder.build(&schema);
    assert_eq!(
        hints_as_strings(&hints.properties),
        pairs(&[("id", "int"), ("created", "\\Cake\\I18n\\FrozenTime|null")])
    );
}

#[test]
fn test_extended_hints_override_base_hints() {
    let mut config = AnnotatorConfig::default();
    config
        .type_map
        .insert("string".to_string(), "non-empty-string".to_string());
    let ctx = HintContext::from_config(&config);
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let unified = builder.hydrate(&article_schema()).schema;
    let base = builder.base_property_hints(&unified);
    assert_eq!(base["title"].as_ref().map(ToString::to_string).as_deref(), Some("string"));
    assert_eq!(base["data"], None);

    let extended = builder.extended_property_hints(&unified);
    assert!(!extended.contains_key("missing"));
    assert_eq!(extended["title"].to_string(), "non-empty-string");

    let merged = builder.build_property_hints(&unified);
    assert_eq!(
        hints_as_strings(&merged),
        pairs(&[
            ("title", "non-empty-string"),
            ("body", "string|null"),
            ("data", "array"),
        ])
    );
}

#[test]
fn test_empty_type_map_value_is_dropped() {
    let mut config = AnnotatorConfig::default();
    config.type_map.insert("json".to_string(), String::new());
    let ctx = HintContext::from_config(&config);
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let hints = builder.build(&article_schema());
    assert!(!hints.properties.contains_key("data"));
    assert!(hints.properties.contains_key("title"));
}

#[test]
fn test_empty_type_map_value_suppresses_base_hint() {
    let mut config = AnnotatorConfig::default();
    config.type_map.insert("string".to_string(), String::new());
    let ctx = HintContext::from_config(&config);
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let unified = builder.hydrate(&article_schema()).schema;
    assert!(builder.extended_property_hints(&unified)["title"].is_empty());

    let hints = builder.build(&article_schema());
    assert_eq!(
        hints_as_strings(&hints.properties),
        pairs(&[("body", "string|null"), ("data", "array")])
    );
}

#[test]
fn test_build_is_idempotent() {
    let ctx = HintContext::default();
    let oracle = KnownClasses::new(["\\App\\Model\\Entity\\Tag"]);
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);
    let schema = article_schema()
        .with_association(AssociationMeta::new("tags", "Tags").with_kind(AssociationKind::ManyToMany));

    let first = builder.build(&schema);
    let second = builder.build(&schema);
    assert_eq!(first, second);
    assert_eq!(first.annotation_strings(), second.annotation_strings());
}

#[test]
fn test_association_hints() {
    let ctx = HintContext::default();
    let oracle = KnownClasses::new(["\\App\\Model\\Entity\\Article", "\\App\\Model\\Entity\\Tag"]);
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let schema = TableSchema::default()
        .with_column("id", ColumnMeta::new("integer", false))
        .with_association(AssociationMeta::new("article", "Articles"))
        .with_association(
            AssociationMeta::new("tags", "Tags").with_kind(AssociationKind::ManyToMany),
        )
        .with_association(
            AssociationMeta::new("comments", "Comments").with_kind(AssociationKind::OneToMany),
        )
        .with_association(
            AssociationMeta::new("author", "Users").with_entity_class("App\\Model\\Entity\\User"),
        );

    let hints = builder.build(&schema);
    assert_eq!(
        hints_as_strings(&hints.associations),
        pairs(&[
            ("article", "\\App\\Model\\Entity\\Article"),
            ("tags", "\\App\\Model\\Entity\\Tag[]"),
            ("comments", "\\Cake\\ORM\\Entity[]"),
            ("author", "\\App\\Model\\Entity\\User"),
        ])
    );
    assert_eq!(
        hints.annotation_strings(),
        vec![
            "@property int $id",
            "@property \\App\\Model\\Entity\\Article $article",
            "@property \\App\\Model\\Entity\\Tag[] $tags",
            "@property \\Cake\\ORM\\Entity[] $comments",
            "@property \\App\\Model\\Entity\\User $author",
        ]
    );
}

#[test]
fn test_failed_association_is_skipped() {
    let ctx = HintContext::default();
    let oracle = KnownClasses::new(["\\App\\Model\\Entity\\Tag"]);
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let schema = TableSchema::default()
        .with_association(AssociationMeta::new("broken", ""))
        .with_association(AssociationMeta::new("tag", "Tags"));

    let hydrated = builder.hydrate(&schema);
    assert_eq!(
        hydrated.skipped,
        vec![AssociationError::EmptyAlias {
            property: "broken".to_string()
        }]
    );
    let names: Vec<&str> = hydrated.schema.entries.keys().map(String::as_str).collect();
    assert_eq!(names, ["tag"]);
}

#[test]
fn test_association_replaces_column_with_same_property() {
    let ctx = HintContext::default();
    let oracle = KnownClasses::default();
    let builder = SchemaAnnotationBuilder::new(&ctx, &oracle);

    let schema = TableSchema::default()
        .with_column("id", ColumnMeta::new("integer", false))
        .with_column("author", ColumnMeta::new("string", true))
        .with_column("title", ColumnMeta::new("string", false))
        .with_association(
            AssociationMeta::new("author", "Authors").with_entity_class("\\App\\Model\\Entity\\Author"),
        );

    let unified = builder.hydrate(&schema).schema;
    let names: Vec<&str> = unified.entries.keys().map(String::as_str).collect();
    assert_eq!(names, ["id", "author", "title"]);
    assert!(matches!(unified.entries["author"], SchemaEntry::Association(_)));

    let hints = builder.build(&schema);
    assert_eq!(
        hints.annotation_strings(),
        vec![
            "@property int $id",
            "@property string $title",
            "@property \\App\\Model\\Entity\\Author $author",
        ]
    );
}
