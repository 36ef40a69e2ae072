//! Module loading contract.
//!
//! Every learning module plugs into the platform through two seams: a
//! [`ModuleLoader`] that asynchronously resolves the module's entry point
//! (its one chance to fetch, parse, and initialize whatever it owns), and a
//! [`ModuleView`] — the zero-argument renderable entry point itself.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// A module's resolved entry point: a renderable value with no required
/// inputs. Shared and immutable once resolved.
pub type EntryPoint = Arc<dyn ModuleView>;

/// The renderable entry point every Module Unit must expose.
pub trait ModuleView: Send + Sync {
    /// Render the module body as an HTML fragment.
    fn render(&self) -> String;
}

/// Deferred, asynchronous factory resolving a module's entry point.
///
/// Invoking `load` triggers the module's own fetch/parse/initialize
/// sequence. Failures propagate to the caller; this layer does not retry.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn load(&self) -> Result<EntryPoint>;
}

/// Memoizing wrapper around a [`ModuleLoader`].
///
/// The first successful load is cached for the process lifetime and handed
/// to every later caller; concurrent first loads are coalesced. A failed
/// load is not cached, so the next request retries from scratch.
pub struct CachedLoader {
    inner: Arc<dyn ModuleLoader>,
    resolved: OnceCell<EntryPoint>,
}

impl CachedLoader {
    pub fn new(inner: Arc<dyn ModuleLoader>) -> Self {
        Self {
            inner,
            resolved: OnceCell::new(),
        }
    }

    /// Whether the entry point has already been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.initialized()
    }
}

#[async_trait]
impl ModuleLoader for CachedLoader {
    async fn load(&self) -> Result<EntryPoint> {
        self.resolved
            .get_or_try_init(|| self.inner.load())
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AcademyError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TextView(&'static str);

    impl ModuleView for TextView {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    struct CountingLoader {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl ModuleLoader for CountingLoader {
        async fn load(&self) -> Result<EntryPoint> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(AcademyError::load_failed("counting", "first load fails"));
            }
            Ok(Arc::new(TextView("<p>hello</p>")))
        }
    }

    #[tokio::test]
    async fn test_cached_loader_loads_once() {
        let inner = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let cached = CachedLoader::new(inner.clone());

        assert!(!cached.is_resolved());
        let first = cached.load().await.unwrap();
        let second = cached.load().await.unwrap();

        assert_eq!(first.render(), second.render());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
        assert!(cached.is_resolved());
    }

    #[tokio::test]
    async fn test_cached_loader_retries_after_failure() {
        let inner = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        let cached = CachedLoader::new(inner.clone());

        assert!(cached.load().await.is_err());
        assert!(!cached.is_resolved());

        let entry = cached.load().await.unwrap();
        assert_eq!(entry.render(), "<p>hello</p>");
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
