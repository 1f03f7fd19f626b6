//! Annotator configuration
//!
//! Loaded from an `entity-annotator.toml` file that sits alongside the schema
//! description (or in the application root):
//!
//! ```toml
//! app_namespace = "App"
//!
//! [type_map]
//! uuid = "string"
//!
//! [nullable_map]
//! array = false
//! ```
//!
//! The file is read once and compiled into a [`HintContext`], which is then
//! passed by reference to everything that needs the type maps.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name looked up next to the schema and in the application root.
pub const CONFIG_FILE_NAME: &str = "entity-annotator.toml";

/// Entity class used by tables that have no concrete entity class.
pub const GENERIC_ENTITY_CLASS: &str = "\\Cake\\ORM\\Entity";

/// Builtin column type mappings, overridable through `type_map`.
pub const TYPE_MAP_DEFAULTS: [(&str, &str); 4] = [
    ("mediumtext", "string"),
    ("longtext", "string"),
    ("array", "array"),
    ("json", "array"),
];

fn default_app_namespace() -> String {
    "App".to_string()
}

fn default_generic_entity_class() -> String {
    GENERIC_ENTITY_CLASS.to_string()
}

/// Raw configuration as read from `entity-annotator.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Root namespace of the application
    #[serde(default = "default_app_namespace")]
    pub app_namespace: String,

    /// Generic entity class name
    #[serde(default = "default_generic_entity_class")]
    pub generic_entity_class: String,

    /// Column type → hint type overrides, merged over the builtin defaults
    #[serde(default)]
    pub type_map: HashMap<String, String>,

    /// Hint type → `false` to never append `|null`
    #[serde(default)]
    pub nullable_map: HashMap<String, bool>,

    /// Classes known to exist without a source file under the app root
    #[serde(default)]
    pub known_classes: Vec<String>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        AnnotatorConfig {
            app_namespace: default_app_namespace(),
            generic_entity_class: default_generic_entity_class(),
            type_map: HashMap::new(),
            nullable_map: HashMap::new(),
            known_classes: Vec::new(),
        }
    }
}

/// Load the configuration from a TOML file
///
/// # Returns
///
/// Returns `Ok(Some(config))` if the file exists and parses successfully,
/// `Ok(None)` if it doesn't exist (not an error),
/// `Err` if it exists but fails to parse.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<AnnotatorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!("Failed to read annotator config: {}", config_path.display())
    })?;

    let config: AnnotatorConfig = toml::from_str(&contents).with_context(|| {
        format!("Failed to parse annotator config: {}", config_path.display())
    })?;

    Ok(Some(config))
}

/// Resolve the configuration file path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. `entity-annotator.toml` next to the schema file
/// 3. `entity-annotator.toml` in the application root
/// 4. None (defaults)
pub fn resolve_config_path(
    explicit_path: Option<&Path>,
    schema_path: &Path,
    app_root: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    let beside_schema = schema_path.parent().map(|dir| dir.join(CONFIG_FILE_NAME));
    let in_root = Some(app_root.join(CONFIG_FILE_NAME));
    beside_schema.into_iter().chain(in_root).find(|p| p.exists())
}

/// Resolve and load the configuration, falling back to defaults.
///
/// An explicit path that does not exist is an error; auto-detected paths are
/// only used when present.
pub fn load_resolved_config(
    explicit_path: Option<&Path>,
    schema_path: &Path,
    app_root: &Path,
) -> anyhow::Result<AnnotatorConfig> {
    match resolve_config_path(explicit_path, schema_path, app_root) {
        Some(path) => match load_config(&path)? {
            Some(config) => {
                tracing::debug!(path = %path.display(), "loaded annotator config");
                Ok(config)
            }
            None => anyhow::bail!("Annotator config not found: {}", path.display()),
        },
        None => Ok(AnnotatorConfig::default()),
    }
}

/// Column type → hint type mapping: user overrides over builtin defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap(HashMap<String, String>);

impl TypeMap {
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut map: HashMap<String, String> = TYPE_MAP_DEFAULTS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        map.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        TypeMap(map)
    }

    pub fn get(&self, db_type: &str) -> Option<&str> {
        self.0.get(db_type).map(String::as_str)
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        TypeMap::with_overrides(&HashMap::new())
    }
}

/// Hint type → whether a nullable column may decorate it with `|null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullableMap(HashMap<String, bool>);

impl NullableMap {
    pub fn new(entries: HashMap<String, bool>) -> Self {
        NullableMap(entries)
    }

    /// `true` only when the hint type has an explicit `false` entry.
    pub fn opts_out(&self, hint_type: &str) -> bool {
        self.0.get(hint_type) == Some(&false)
    }
}

/// Compiled configuration shared by the resolver and the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintContext {
    pub type_map: TypeMap,
    pub nullable_map: NullableMap,
    pub app_namespace: String,
    /// Generic entity class, normalised to a leading `\`
    pub generic_entity_class: String,
}

impl HintContext {
    pub fn from_config(config: &AnnotatorConfig) -> Self {
        HintContext {
            type_map: TypeMap::with_overrides(&config.type_map),
            nullable_map: NullableMap::new(config.nullable_map.clone()),
            app_namespace: config.app_namespace.clone(),
            generic_entity_class: normalize_class_name(&config.generic_entity_class),
        }
    }
}

impl Default for HintContext {
    fn default() -> Self {
        HintContext::from_config(&AnnotatorConfig::default())
    }
}

/// Fully qualify a class name with exactly one leading `\`.
pub fn normalize_class_name(name: &str) -> String {
    format!("\\{}", name.trim_start_matches('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_type_map_user_overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert("json".to_string(), "mixed".to_string());
        overrides.insert("uuid".to_string(), "string".to_string());
        let map = TypeMap::with_overrides(&overrides);
        assert_eq!(map.get("json"), Some("mixed"));
        assert_eq!(map.get("uuid"), Some("string"));
        assert_eq!(map.get("longtext"), Some("string"));
        assert_eq!(map.get("integer"), None);
    }

    #[test]
    fn test_nullable_map_only_false_opts_out() {
        let mut entries = HashMap::new();
        entries.insert("array".to_string(), false);
        entries.insert("string".to_string(), true);
        let map = NullableMap::new(entries);
        assert!(map.opts_out("array"));
        assert!(!map.opts_out("string"));
        assert!(!map.opts_out("int"));
    }

    #[test]
    fn test_parse_config_defaults() {
        let config: AnnotatorConfig = toml::from_str("[type_map]\nuuid = \"string\"\n").unwrap();
        assert_eq!(config.app_namespace, "App");
        assert_eq!(config.generic_entity_class, GENERIC_ENTITY_CLASS);
        assert_eq!(config.type_map.get("uuid").map(String::as_str), Some("string"));
    }

    #[test]
    fn test_context_normalizes_generic_class() {
        let config = AnnotatorConfig {
            generic_entity_class: "Cake\\ORM\\Entity".to_string(),
            ..AnnotatorConfig::default()
        };
        let ctx = HintContext::from_config(&config);
        assert_eq!(ctx.generic_entity_class, "\\Cake\\ORM\\Entity");
    }

    #[test]
    fn test_resolve_config_path_priority() {
        let dir = tempfile::tempdir().unwrap();
        let schema_dir = dir.path().join("schema");
        fs::create_dir_all(&schema_dir).unwrap();
        let schema = schema_dir.join("articles.yaml");

        assert_eq!(resolve_config_path(None, &schema, dir.path()), None);

        let root_cfg = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&root_cfg, "").unwrap();
        assert_eq!(resolve_config_path(None, &schema, dir.path()), Some(root_cfg));

        let beside = schema_dir.join(CONFIG_FILE_NAME);
        fs::write(&beside, "").unwrap();
        assert_eq!(
            resolve_config_path(None, &schema, dir.path()),
            Some(beside.clone())
        );

        let explicit = dir.path().join("custom.toml");
        assert_eq!(
            resolve_config_path(Some(&explicit), &schema, dir.path()),
            Some(explicit)
        );
    }

    #[test]
    fn test_load_resolved_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("articles.yaml");

        let missing = dir.path().join("missing.toml");
        assert!(load_resolved_config(Some(&missing), &schema, dir.path()).is_err());

        let bad = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&bad, "app_namespace = [").unwrap();
        assert!(load_resolved_config(None, &schema, dir.path()).is_err());

        fs::write(&bad, "app_namespace = \"Shop\"\n").unwrap();
        let config = load_resolved_config(None, &schema, dir.path()).unwrap();
        assert_eq!(config.app_namespace, "Shop");
    }
}
