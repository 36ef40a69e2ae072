//! Module registry.
//!
//! The registry is the closed set of known learning modules: an
//! insertion-ordered mapping from slug to (manifest, loader). It is built
//! once at process start through [`ModuleRegistryBuilder`], which enforces
//! slug uniqueness, and is immutable for the process lifetime — no dynamic
//! registration, no removal, no locking needed.

use crate::error::{AcademyError, Result};
use crate::loader::ModuleLoader;
use crate::manifest::ModuleManifest;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// A registered module: its manifest plus the deferred loader.
pub struct RegistryEntry {
    manifest: ModuleManifest,
    loader: Arc<dyn ModuleLoader>,
}

impl RegistryEntry {
    pub fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    pub fn loader(&self) -> &Arc<dyn ModuleLoader> {
        &self.loader
    }

    pub fn slug(&self) -> &str {
        self.manifest.slug.as_str()
    }
}

/// Insertion-ordered, immutable mapping from slug to registry entry.
pub struct ModuleRegistry {
    entries: Vec<Arc<RegistryEntry>>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("slugs", &self.entries.iter().map(|e| e.slug()).collect::<Vec<_>>())
            .finish()
    }
}

impl ModuleRegistry {
    pub fn builder() -> ModuleRegistryBuilder {
        ModuleRegistryBuilder::new()
    }

    /// Look up a module by slug.
    ///
    /// Pure O(1) map lookup with no side effects. Returns `None` for any
    /// string not in the registered set, including ones that do not satisfy
    /// the slug grammar; it never errors.
    pub fn lookup(&self, slug: &str) -> Option<&Arc<RegistryEntry>> {
        self.index.get(slug).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RegistryEntry>> {
        self.entries.iter()
    }

    /// Iterate manifests in registration order (catalog rendering).
    pub fn manifests(&self) -> impl Iterator<Item = &ModuleManifest> {
        self.entries.iter().map(|e| e.manifest())
    }

    /// Manifests sorted by navigation priority, registration order breaking
    /// ties.
    pub fn manifests_by_priority(&self) -> Vec<&ModuleManifest> {
        let mut manifests: Vec<_> = self.manifests().collect();
        manifests.sort_by_key(|m| m.nav_priority);
        manifests
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder collecting registrations before the uniqueness check.
///
/// Duplicate slugs are a programmer error, caught here at construction time
/// rather than at request time.
#[derive(Default)]
pub struct ModuleRegistryBuilder {
    entries: Vec<Arc<RegistryEntry>>,
}

impl ModuleRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a module. Order of registration is the catalog order.
    pub fn register(mut self, manifest: ModuleManifest, loader: Arc<dyn ModuleLoader>) -> Self {
        self.entries.push(Arc::new(RegistryEntry { manifest, loader }));
        self
    }

    /// Validate and freeze the registry.
    ///
    /// Fails with [`AcademyError::DuplicateSlug`] if two registrations share
    /// a slug.
    pub fn build(self) -> Result<ModuleRegistry> {
        let mut index = HashMap::with_capacity(self.entries.len());

        for (i, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.slug().to_string(), i).is_some() {
                return Err(AcademyError::DuplicateSlug {
                    slug: entry.slug().to_string(),
                });
            }
        }

        info!("Registered {} learning modules", self.entries.len());

        Ok(ModuleRegistry {
            entries: self.entries,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{EntryPoint, ModuleView};
    use crate::slug::Slug;
    use async_trait::async_trait;

    struct TextView(&'static str);

    impl ModuleView for TextView {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    struct TextLoader(&'static str);

    #[async_trait]
    impl ModuleLoader for TextLoader {
        async fn load(&self) -> Result<EntryPoint> {
            Ok(Arc::new(TextView(self.0)))
        }
    }

    fn manifest(slug: &str) -> ModuleManifest {
        ModuleManifest::new(Slug::parse(slug).unwrap(), slug.to_string(), "")
    }

    fn registry_with(slugs: &[&'static str]) -> Result<ModuleRegistry> {
        let mut builder = ModuleRegistry::builder();
        for slug in slugs {
            builder = builder.register(manifest(slug), Arc::new(TextLoader(slug)));
        }
        builder.build()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let registry = registry_with(&["math-basics", "abcs"]).unwrap();

        assert!(registry.lookup("math-basics").is_some());
        assert!(registry.lookup("abcs").is_some());
        assert!(registry.contains("abcs"));
        assert!(registry.lookup("does-not-exist").is_none());
        assert!(!registry.contains("does-not-exist"));
        assert!(registry.lookup("").is_none());
        assert!(registry.lookup("Not A Slug!").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = registry_with(&["math-basics", "abcs", "math-basics"]).unwrap_err();
        match err {
            AcademyError::DuplicateSlug { slug } => assert_eq!(slug, "math-basics"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = registry_with(&["shapes", "abcs", "math-basics"]).unwrap();
        let order: Vec<_> = registry.manifests().map(|m| m.slug.as_str().to_string()).collect();
        assert_eq!(order, vec!["shapes", "abcs", "math-basics"]);
    }

    #[test]
    fn test_manifests_by_priority() {
        let registry = ModuleRegistry::builder()
            .register(manifest("zeta").with_priority(20), Arc::new(TextLoader("z")))
            .register(manifest("alpha").with_priority(10), Arc::new(TextLoader("a")))
            .register(manifest("mid"), Arc::new(TextLoader("m")))
            .build()
            .unwrap();

        let order: Vec<_> = registry
            .manifests_by_priority()
            .iter()
            .map(|m| m.slug.as_str().to_string())
            .collect();
        assert_eq!(order, vec!["alpha", "zeta", "mid"]);
    }

    #[tokio::test]
    async fn test_registered_loaders_resolve() {
        let registry = registry_with(&["shapes"]).unwrap();
        let entry = registry.lookup("shapes").unwrap();
        let view = entry.loader().load().await.unwrap();
        assert_eq!(view.render(), "shapes");
    }
}
