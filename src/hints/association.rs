//! Association target class resolution.
//!
//! A table without a concrete entity class uses the generic entity class. For
//! those targets a concrete class is guessed from the table alias
//! (`Articles` → `\App\Model\Entity\Article`) and used only if it exists.

use super::inflector::{entity_name, is_class_name};
use crate::config::{normalize_class_name, HintContext};
use crate::error::AssociationError;
use crate::oracle::ClassExistence;
use crate::schema::AssociationMeta;

/// Split `Plugin.Alias` into its plugin and alias parts.
///
/// ```rust,ignore
/// assert_eq!(plugin_split("Blog.Posts"), (Some("Blog"), "Posts"));
/// assert_eq!(plugin_split("Posts"), (None, "Posts"));
/// ```
pub fn plugin_split(name: &str) -> (Option<&str>, &str) {
    match name.split_once('.') {
        Some((plugin, alias)) => (Some(plugin), alias),
        None => (None, name),
    }
}

/// Namespace that owns the association target: its plugin, else the app.
fn target_namespace(
    association: &AssociationMeta,
    ctx: &HintContext,
) -> Result<String, AssociationError> {
    let (plugin, _) = plugin_split(association.registry_alias());
    let namespace = plugin
        .unwrap_or(&ctx.app_namespace)
        .trim_matches(|c| c == '\\' || c == '/')
        .replace('/', "\\");
    if namespace.is_empty() {
        return Err(AssociationError::EmptyNamespace {
            property: association.property.clone(),
        });
    }
    Ok(namespace)
}

/// Resolve the fully-qualified target entity class of one association.
///
/// A declared concrete class is returned as is (with a leading `\`). For the
/// generic entity class the conventional class in the owning namespace is
/// tried and kept if `oracle` reports it exists, otherwise the generic class
/// is returned.
///
/// # Errors
///
/// Fails when the fallback class name cannot be derived: empty alias, an
/// alias that is not a valid class name, or an empty namespace.
pub fn resolve_target_entity(
    association: &AssociationMeta,
    ctx: &HintContext,
    oracle: &dyn ClassExistence,
) -> Result<String, AssociationError> {
    let declared = association
        .entity_class
        .as_deref()
        .map(normalize_class_name)
        .unwrap_or_else(|| ctx.generic_entity_class.clone());
    if declared != ctx.generic_entity_class {
        return Ok(declared);
    }

    if association.alias.trim().is_empty() {
        return Err(AssociationError::EmptyAlias {
            property: association.property.clone(),
        });
    }
    let namespace = target_namespace(association, ctx)?;
    let entity = entity_name(&association.alias);
    if !is_class_name(&entity) {
        return Err(AssociationError::InvalidAlias {
            property: association.property.clone(),
            alias: association.alias.clone(),
        });
    }

    let candidate = format!("\\{namespace}\\Model\\Entity\\{entity}");
    if oracle.class_exists(&candidate) {
        tracing::debug!(property = %association.property, class = %candidate, "resolved generic association target");
        Ok(candidate)
    } else {
        tracing::debug!(property = %association.property, class = %candidate, "fallback class missing, keeping generic entity");
        Ok(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnnotatorConfig;
    use crate::oracle::KnownClasses;

    fn never(_: &str) -> bool {
        false
    }

    #[test]
    fn test_plugin_split() {
        assert_eq!(plugin_split("Blog.Posts"), (Some("Blog"), "Posts"));
        assert_eq!(plugin_split("Acme/Blog.Posts"), (Some("Acme/Blog"), "Posts"));
        assert_eq!(plugin_split("Posts"), (None, "Posts"));
    }

    #[test]
    fn test_declared_class_is_kept() {
        let ctx = HintContext::default();
        let assoc = AssociationMeta::new("author", "Authors")
            .with_entity_class("App\\Model\\Entity\\Author");
        assert_eq!(
            resolve_target_entity(&assoc, &ctx, &never),
            Ok("\\App\\Model\\Entity\\Author".to_string())
        );
    }

    #[test]
    fn test_generic_target_resolves_to_existing_class() {
        let ctx = HintContext::default();
        let oracle = KnownClasses::new(["\\App\\Model\\Entity\\Article"]);
        let assoc = AssociationMeta::new("articles", "articles");
        assert_eq!(
            resolve_target_entity(&assoc, &ctx, &oracle),
            Ok("\\App\\Model\\Entity\\Article".to_string())
        );

        let explicit_generic =
            AssociationMeta::new("articles", "articles").with_entity_class("Cake\\ORM\\Entity");
        assert_eq!(
            resolve_target_entity(&explicit_generic, &ctx, &oracle),
            Ok("\\App\\Model\\Entity\\Article".to_string())
        );
    }

    #[test]
    fn test_generic_target_falls_back_when_missing() {
        let ctx = HintContext::default();
        let assoc = AssociationMeta::new("articles", "articles");
        assert_eq!(
            resolve_target_entity(&assoc, &ctx, &never),
            Ok("\\Cake\\ORM\\Entity".to_string())
        );
    }

    #[test]
    fn test_plugin_namespace() {
        let ctx = HintContext::default();
        let oracle = KnownClasses::new(["\\Acme\\Blog\\Model\\Entity\\Post"]);
        let assoc = AssociationMeta::new("posts", "Posts").with_registry_alias("Acme/Blog.Posts");
        assert_eq!(
            resolve_target_entity(&assoc, &ctx, &oracle),
            Ok("\\Acme\\Blog\\Model\\Entity\\Post".to_string())
        );
    }

    #[test]
    fn test_app_namespace_is_normalized() {
        let ctx = HintContext::from_config(&AnnotatorConfig {
            app_namespace: "\\Shop/Core\\".to_string(),
            ..AnnotatorConfig::default()
        });
        let seen = std::cell::RefCell::new(Vec::new());
        let oracle = |name: &str| {
            seen.borrow_mut().push(name.to_string());
            true
        };
        let assoc = AssociationMeta::new("line_items", "line_items");
        assert_eq!(
            resolve_target_entity(&assoc, &ctx, &oracle),
            Ok("\\Shop\\Core\\Model\\Entity\\LineItem".to_string())
        );
        assert_eq!(seen.borrow().as_slice(), ["\\Shop\\Core\\Model\\Entity\\LineItem"]);
    }

    #[test]
    fn test_resolution_errors() {
        let ctx = HintContext::default();
        let empty = AssociationMeta::new("thing", " ");
        assert_eq!(
            resolve_target_entity(&empty, &ctx, &never),
            Err(AssociationError::EmptyAlias {
                property: "thing".to_string()
            })
        );

        let invalid = AssociationMeta::new("thing", "9lives");
        assert!(matches!(
            resolve_target_entity(&invalid, &ctx, &never),
            Err(AssociationError::InvalidAlias { .. })
        ));

        let no_namespace = AssociationMeta::new("thing", "Things").with_registry_alias("/.Things");
        assert!(matches!(
            resolve_target_entity(&no_namespace, &ctx, &never),
            Err(AssociationError::EmptyNamespace { .. })
        ));
    }
}
