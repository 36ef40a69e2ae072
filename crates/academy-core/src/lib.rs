//! Academy Core - Headless library for the Micro-Academy learning platform.
//!
//! This crate provides the module registry and page resolution mechanism:
//! mapping opaque URL slugs to lazily-loaded learning modules rendered
//! inside a shared page shell. It has no HTTP layer; see the
//! `academy-server` crate for the serving surface and `academy-modules` for
//! the built-in Module Units.
//!
//! # Example
//!
//! ```rust,ignore
//! use academy_core::{ModuleRegistry, PageResolver, ProjectShell, SiteConfig};
//!
//! let registry = std::sync::Arc::new(
//!     ModuleRegistry::builder()
//!         .register(manifest, loader)
//!         .build()?,
//! );
//! let resolver = PageResolver::new(registry, ProjectShell::new(SiteConfig::default()));
//!
//! match resolver.resolve("math-basics", "en").await {
//!     Resolution::Rendered(page) => serve(page.html),
//!     Resolution::NotFound => serve_404(),
//!     Resolution::LoadFailed { .. } => serve_502(),
//! }
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod loader;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod shell;
pub mod slug;

// Re-export commonly used types
pub use config::{AppConfig, SiteConfig};
pub use error::{AcademyError, Result};
pub use loader::{CachedLoader, EntryPoint, ModuleLoader, ModuleView};
pub use manifest::ModuleManifest;
pub use registry::{ModuleRegistry, ModuleRegistryBuilder, RegistryEntry};
pub use resolver::{PageResolver, RenderedPage, Resolution};
pub use shell::{ProjectShell, RenderContext};
pub use slug::Slug;
