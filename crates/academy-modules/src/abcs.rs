//! Alphabet flashcards module.
//!
//! Renders one card per letter from the embedded alphabet dataset. In a real
//! deployment this data would come from a CMS; here the loader parses it at
//! resolution time.

use academy_core::html::escape;
use academy_core::{
    AcademyError, EntryPoint, ModuleLoader, ModuleManifest, ModuleView, Result, Slug,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub const SLUG: &str = "abcs";

const ALPHABET_DATA: &str = include_str!("data/alphabet.json");

pub fn manifest() -> Result<ModuleManifest> {
    Ok(
        ModuleManifest::new(
            Slug::parse(SLUG)?,
            "Learn the ABCs",
            "Explore the alphabet, one letter at a time.",
        )
        .with_icon("🔤"),
    )
}

#[derive(Debug, Clone, Deserialize)]
struct AlphabetItem {
    letter: String,
    word: String,
    emoji: String,
}

pub struct AbcsLoader;

#[async_trait]
impl ModuleLoader for AbcsLoader {
    async fn load(&self) -> Result<EntryPoint> {
        let items: Vec<AlphabetItem> =
            serde_json::from_str(ALPHABET_DATA).map_err(|e| AcademyError::load_failed(SLUG, e))?;

        if items.len() != 26 {
            return Err(AcademyError::load_failed(
                SLUG,
                format!("alphabet dataset has {} entries, expected 26", items.len()),
            ));
        }

        debug!("Loaded alphabet dataset with {} letters", items.len());
        Ok(Arc::new(AbcsView { items }))
    }
}

struct AbcsView {
    items: Vec<AlphabetItem>,
}

impl ModuleView for AbcsView {
    fn render(&self) -> String {
        let mut out = String::from(
            "<h1>Learn the ABCs</h1>\n\
             <p class=\"muted\">Pick a letter to learn more about it!</p>\n\
             <ul class=\"cards\">\n",
        );
        for item in &self.items {
            out.push_str(&format!(
                "<li class=\"card\"><h2>{letter}</h2><p>{emoji} {word}</p></li>\n",
                letter = escape(&item.letter),
                emoji = escape(&item.emoji),
                word = escape(&item.word),
            ));
        }
        out.push_str("</ul>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_full_alphabet() {
        let view = AbcsLoader.load().await.unwrap();
        let html = view.render();

        assert!(html.contains("Learn the ABCs"));
        assert!(html.contains("Apple"));
        assert!(html.contains("Zebra"));
        assert_eq!(html.matches("<li class=\"card\">").count(), 26);
    }
}
