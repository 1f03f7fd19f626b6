//! Class existence checks used when resolving association targets.
//!
//! Resolution only needs a yes/no answer for a fully-qualified class name, so
//! the capability is a trait: tests use closures or [`KnownClasses`], the CLI
//! uses [`SourceTreeOracle`] which looks for the class file on disk.

use crate::config::normalize_class_name;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers whether a fully-qualified class exists.
pub trait ClassExistence {
    fn class_exists(&self, fqcn: &str) -> bool;
}

impl<F> ClassExistence for F
where
    F: Fn(&str) -> bool,
{
    fn class_exists(&self, fqcn: &str) -> bool {
        self(fqcn)
    }
}

/// A fixed set of class names, compared with a normalised leading `\`.
#[derive(Debug, Clone, Default)]
pub struct KnownClasses(HashSet<String>);

impl KnownClasses {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KnownClasses(
            classes
                .into_iter()
                .map(|c| normalize_class_name(c.as_ref()))
                .collect(),
        )
    }
}

impl ClassExistence for KnownClasses {
    fn class_exists(&self, fqcn: &str) -> bool {
        self.0.contains(&normalize_class_name(fqcn))
    }
}

/// Looks up class files in an application source tree (PSR-4 layout).
///
/// `\App\Model\Entity\Article` maps to `<root>/src/Model/Entity/Article.php`
/// when `App` is the application namespace. Any other namespace is treated
/// as a plugin: `\Blog\Model\Entity\Post` maps to
/// `<root>/plugins/Blog/src/Model/Entity/Post.php`, and two-segment vendor
/// namespaces to `<root>/plugins/Vendor/Blog/src/...`.
#[derive(Debug, Clone)]
pub struct SourceTreeOracle {
    app_root: PathBuf,
    app_namespace: String,
    known: KnownClasses,
}

impl SourceTreeOracle {
    pub fn new(app_root: impl Into<PathBuf>, app_namespace: &str, known: KnownClasses) -> Self {
        SourceTreeOracle {
            app_root: app_root.into(),
            app_namespace: app_namespace.trim_matches('\\').to_string(),
            known,
        }
    }

    /// Candidate source files for a class, most specific first.
    pub fn candidate_paths(&self, fqcn: &str) -> Vec<PathBuf> {
        let segments: Vec<&str> = fqcn
            .trim_start_matches('\\')
            .split('\\')
            .filter(|s| !s.is_empty())
            .collect();
        if segments.len() < 2 {
            return Vec::new();
        }

        let app_segments: Vec<&str> = self.app_namespace.split('\\').collect();
        if segments.starts_with(&app_segments) && segments.len() > app_segments.len() {
            return vec![source_file(
                &self.app_root.join("src"),
                &segments[app_segments.len()..],
            )];
        }

        let plugins = self.app_root.join("plugins");
        (1..=2)
            .filter(|n| segments.len() > *n)
            .map(|n| {
                let plugin_dir = segments[..n]
                    .iter()
                    .fold(plugins.clone(), |dir, s| dir.join(s));
                source_file(&plugin_dir.join("src"), &segments[n..])
            })
            .collect()
    }
}

fn source_file(src_dir: &Path, relative: &[&str]) -> PathBuf {
    let mut path = relative.iter().fold(src_dir.to_path_buf(), |p, s| p.join(s));
    path.set_extension("php");
    path
}

impl ClassExistence for SourceTreeOracle {
    fn class_exists(&self, fqcn: &str) -> bool {
        if self.known.class_exists(fqcn) {
            return true;
        }
        self.candidate_paths(fqcn).iter().any(|p| p.is_file())
    }
}
