//! Onboarding primer module. Static placeholder content.

use academy_core::{EntryPoint, ModuleLoader, ModuleManifest, ModuleView, Result, Slug};
use async_trait::async_trait;
use std::sync::Arc;

pub const SLUG: &str = "onboarding-101";

pub fn manifest() -> Result<ModuleManifest> {
    Ok(ModuleManifest::new(
        Slug::parse(SLUG)?,
        "Onboarding 101",
        "Get started with the basics of our platform and workflow.",
    ))
}

pub struct Onboarding101Loader;

#[async_trait]
impl ModuleLoader for Onboarding101Loader {
    async fn load(&self) -> Result<EntryPoint> {
        Ok(Arc::new(Onboarding101View))
    }
}

struct Onboarding101View;

impl ModuleView for Onboarding101View {
    fn render(&self) -> String {
        "<div class=\"card\"><h1>Onboarding 101</h1>\
         <p>Welcome to the onboarding module. Work through each step at your own pace.</p>\
         <ol>\
         <li>Meet the platform and find your way around.</li>\
         <li>Set up your learner profile.</li>\
         <li>Pick your first learning module.</li>\
         </ol></div>"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_renders_steps() {
        let view = Onboarding101Loader.load().await.unwrap();
        let html = view.render();
        assert!(html.contains("Onboarding 101"));
        assert!(html.contains("learner profile"));
    }
}
