//! Module manifest schema.
//!
//! Defines the descriptive metadata each learning module publishes alongside
//! its loader: what the catalog and navigation render without ever loading
//! the module itself.

use crate::slug::Slug;
use serde::{Deserialize, Serialize};

/// Descriptive metadata for a learning module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    /// Unique module identifier (e.g., "math-basics").
    pub slug: Slug,
    /// Display title for catalog and page chrome.
    pub title: String,
    /// Short description shown on the catalog card.
    #[serde(default)]
    pub summary: String,
    /// Optional emoji or icon identifier.
    #[serde(default)]
    pub icon: Option<String>,
    /// Navigation display priority (lower = earlier).
    #[serde(default = "default_priority")]
    pub nav_priority: i32,
}

fn default_priority() -> i32 {
    100
}

impl ModuleManifest {
    /// Create a manifest with the default navigation priority.
    pub fn new(slug: Slug, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            slug,
            title: title.into(),
            summary: summary.into(),
            icon: None,
            nav_priority: default_priority(),
        }
    }

    /// Set the navigation priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.nav_priority = priority;
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The canonical page path for this module under the given locale.
    pub fn page_path(&self, locale: &str) -> String {
        format!("/{}/projects/{}", locale, self.slug)
    }
}
