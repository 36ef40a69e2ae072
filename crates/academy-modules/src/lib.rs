//! Academy Modules - Built-in learning modules for Micro-Academy.
//!
//! Each submodule is one Module Unit: a manifest plus a loader resolving to
//! a zero-argument renderable entry point. [`builtin_registry`] declares the
//! closed set of known modules; adding a module means adding a submodule and
//! one registration line here (registration order is catalog order, subject
//! to each manifest's navigation priority).

pub mod abcs;
pub mod math_basics;
pub mod onboarding_101;
pub mod security_basics;
pub mod shapes;
pub mod typescript_basics;

use academy_core::{CachedLoader, ModuleLoader, ModuleRegistry, Result};
use std::sync::Arc;

fn cached(loader: impl ModuleLoader + 'static) -> Arc<dyn ModuleLoader> {
    Arc::new(CachedLoader::new(Arc::new(loader)))
}

/// Build the registry of built-in modules.
///
/// Constructed once at process start and shared immutably from then on.
/// Every loader is wrapped in a memoizing cache so repeated resolution of a
/// slug does not redo the module's data work.
pub fn builtin_registry() -> Result<ModuleRegistry> {
    ModuleRegistry::builder()
        .register(
            onboarding_101::manifest()?.with_priority(10),
            cached(onboarding_101::Onboarding101Loader),
        )
        .register(
            security_basics::manifest()?.with_priority(20),
            cached(security_basics::SecurityBasicsLoader),
        )
        .register(
            math_basics::manifest()?.with_priority(30),
            cached(math_basics::MathBasicsLoader),
        )
        .register(abcs::manifest()?.with_priority(40), cached(abcs::AbcsLoader))
        .register(
            shapes::manifest()?.with_priority(50),
            cached(shapes::ShapesLoader),
        )
        .register(
            typescript_basics::manifest()?.with_priority(60),
            cached(typescript_basics::TypescriptBasicsLoader),
        )
        .build()
}
