//! Page resolution.
//!
//! Translates a request's slug into a rendered page, a NotFound outcome, or
//! a LoadFailed outcome. Each resolution is a one-shot with no shared
//! mutable state: `lookup → (NotFound | load → render)`. The loader await is
//! the only suspension point; no timeout or cancellation is imposed.

use crate::registry::ModuleRegistry;
use crate::shell::{ProjectShell, RenderContext};
use std::sync::Arc;
use tracing::{debug, warn};

/// A successfully rendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub html: String,
}

/// Terminal outcome of resolving one request.
pub enum Resolution {
    /// The module resolved and rendered inside the shell.
    Rendered(RenderedPage),
    /// The slug is not in the registry. The loader was never invoked.
    NotFound,
    /// The slug is registered but its loader failed to resolve.
    LoadFailed { slug: String, message: String },
}

impl Resolution {
    /// HTTP status code for this outcome.
    pub fn http_status(&self) -> u16 {
        match self {
            Resolution::Rendered(_) => 200,
            Resolution::NotFound => 404,
            Resolution::LoadFailed { .. } => 502,
        }
    }
}

/// Resolves slugs against the registry and renders hits inside the shell.
///
/// Holds the immutable registry by reference; concurrent resolutions share
/// nothing else.
pub struct PageResolver {
    registry: Arc<ModuleRegistry>,
    shell: ProjectShell,
}

impl PageResolver {
    pub fn new(registry: Arc<ModuleRegistry>, shell: ProjectShell) -> Self {
        Self { registry, shell }
    }

    pub fn registry(&self) -> &Arc<ModuleRegistry> {
        &self.registry
    }

    pub fn shell(&self) -> &ProjectShell {
        &self.shell
    }

    /// Resolve a slug under the given locale.
    ///
    /// Never errors: unknown slugs map to [`Resolution::NotFound`] without
    /// invoking any loader, and loader failures are caught and mapped to
    /// [`Resolution::LoadFailed`] rather than propagated.
    pub async fn resolve(&self, slug: &str, locale: &str) -> Resolution {
        let Some(entry) = self.registry.lookup(slug) else {
            debug!("No module registered for slug '{slug}'");
            return Resolution::NotFound;
        };

        let manifest = entry.manifest();
        let ctx = RenderContext {
            locale: locale.to_string(),
            project_slug: manifest.slug.clone(),
        };

        let view = match entry.loader().load().await {
            Ok(view) => view,
            Err(err) => {
                warn!("Module '{slug}' failed to load: {err}");
                return Resolution::LoadFailed {
                    slug: slug.to_string(),
                    message: err.to_string(),
                };
            }
        };

        let body = view.render();
        Resolution::Rendered(RenderedPage {
            title: manifest.title.clone(),
            html: self.shell.render(&ctx, &manifest.title, &body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::error::{AcademyError, Result};
    use crate::loader::{EntryPoint, ModuleLoader, ModuleView};
    use crate::manifest::ModuleManifest;
    use crate::slug::Slug;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TextView(&'static str);

    impl ModuleView for TextView {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl ModuleLoader for CountingLoader {
        async fn load(&self) -> Result<EntryPoint> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AcademyError::load_failed("broken", "dataset unavailable"))
            } else {
                Ok(Arc::new(TextView("<p>module body</p>")))
            }
        }
    }

    fn resolver_with(
        slug: &str,
        fail: bool,
    ) -> (PageResolver, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let manifest = ModuleManifest::new(Slug::parse(slug).unwrap(), "Test Module", "");
        let registry = ModuleRegistry::builder()
            .register(
                manifest,
                Arc::new(CountingLoader {
                    calls: calls.clone(),
                    fail,
                }),
            )
            .build()
            .unwrap();
        let resolver = PageResolver::new(
            Arc::new(registry),
            ProjectShell::new(SiteConfig::default()),
        );
        (resolver, calls)
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found_and_skips_loader() {
        let (resolver, calls) = resolver_with("math-basics", false);

        let outcome = resolver.resolve("does-not-exist", "en").await;
        assert!(matches!(outcome, Resolution::NotFound));
        assert_eq!(outcome.http_status(), 404);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_hit_renders_inside_shell_with_context() {
        let (resolver, _) = resolver_with("math-basics", false);

        match resolver.resolve("math-basics", "en").await {
            Resolution::Rendered(page) => {
                assert_eq!(page.title, "Test Module");
                assert!(page.html.contains("<p>module body</p>"));
                // Locale and slug pass through unmodified.
                assert!(page.html.contains("data-locale=\"en\""));
                assert!(page.html.contains("data-project=\"math-basics\""));
            }
            _ => panic!("expected Rendered"),
        }
    }

    #[tokio::test]
    async fn test_loader_failure_maps_to_load_failed() {
        let (resolver, calls) = resolver_with("broken", true);

        match resolver.resolve("broken", "en").await {
            Resolution::LoadFailed { slug, message } => {
                assert_eq!(slug, "broken");
                assert!(message.contains("dataset unavailable"));
            }
            _ => panic!("expected LoadFailed"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_repeated_resolution_is_equivalent() {
        let (resolver, _) = resolver_with("math-basics", false);

        let first = resolver.resolve("math-basics", "en").await;
        let second = resolver.resolve("math-basics", "en").await;

        match (first, second) {
            (Resolution::Rendered(a), Resolution::Rendered(b)) => {
                assert_eq!(a.html, b.html);
            }
            _ => panic!("expected two rendered pages"),
        }
    }
}
