//! Security primer module. Static content.

use academy_core::{EntryPoint, ModuleLoader, ModuleManifest, ModuleView, Result, Slug};
use async_trait::async_trait;
use std::sync::Arc;

pub const SLUG: &str = "security-basics";

pub fn manifest() -> Result<ModuleManifest> {
    Ok(ModuleManifest::new(
        Slug::parse(SLUG)?,
        "Security Basics",
        "Learn fundamental security practices and habits.",
    ))
}

pub struct SecurityBasicsLoader;

#[async_trait]
impl ModuleLoader for SecurityBasicsLoader {
    async fn load(&self) -> Result<EntryPoint> {
        Ok(Arc::new(SecurityBasicsView))
    }
}

struct SecurityBasicsView;

impl ModuleView for SecurityBasicsView {
    fn render(&self) -> String {
        "<div class=\"card\"><h1>Security Basics</h1>\
         <p>Welcome to the security basics module.</p>\
         <ul>\
         <li>Use a unique passphrase for every account.</li>\
         <li>Turn on two-factor authentication where offered.</li>\
         <li>Treat unexpected links and attachments with suspicion.</li>\
         </ul></div>"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_renders_content() {
        let view = SecurityBasicsLoader.load().await.unwrap();
        assert!(view.render().contains("Security Basics"));
    }
}
