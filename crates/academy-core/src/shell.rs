//! Shared page shell.
//!
//! `ProjectShell` wraps every resolved module (and the catalog and error
//! pages) in the same page chrome. Locale and slug arrive as read-only
//! context and are stamped into the page unmodified — this is where learner
//! state, analytics, and navigation can grow later.

use crate::config::SiteConfig;
use crate::html::{escape, fill};
use crate::manifest::ModuleManifest;
use crate::slug::Slug;

const SHELL_TEMPLATE: &str = include_str!("assets/shell.html");

/// Read-only per-request context passed through the shell untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub locale: String,
    pub project_slug: Slug,
}

/// Shared presentational wrapper applied to every rendered page.
pub struct ProjectShell {
    site: SiteConfig,
}

impl ProjectShell {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Wrap a resolved module body in the page chrome.
    pub fn render(&self, ctx: &RenderContext, title: &str, body: &str) -> String {
        self.page(&ctx.locale, ctx.project_slug.as_str(), title, body)
    }

    /// The catalog page: one card per registered manifest, in registry order.
    pub fn catalog_page<'a>(
        &self,
        locale: &str,
        manifests: impl Iterator<Item = &'a ModuleManifest>,
    ) -> String {
        let mut body = String::new();
        body.push_str(&format!(
            "<h1>Welcome to {}</h1>\n<p class=\"muted\">Explore our learning modules and enhance your skills</p>\n<ul class=\"cards\">\n",
            escape(&self.site.site_name)
        ));

        for manifest in manifests {
            let icon = manifest
                .icon
                .as_deref()
                .map(|i| format!("{} ", escape(i)))
                .unwrap_or_default();
            body.push_str(&format!(
                "<li class=\"card\"><h2>{icon}{title}</h2><p class=\"muted\">{summary}</p><p><a href=\"/projects/{slug}\">Start Learning</a></p></li>\n",
                title = escape(&manifest.title),
                summary = escape(&manifest.summary),
                slug = escape(manifest.slug.as_str()),
            ));
        }
        body.push_str("</ul>");

        self.page(locale, "", "Learning Modules", &body)
    }

    /// The 404 page for unknown slugs.
    pub fn not_found_page(&self, locale: &str) -> String {
        let body = "<div class=\"card\"><h1>Page not found</h1>\
                    <p class=\"muted\">The module you are looking for does not exist.</p>\
                    <p><a href=\"/\">Back to all modules</a></p></div>";
        self.page(locale, "", "Not Found", body)
    }

    /// The failure page shown when a registered module's loader fails.
    ///
    /// Deliberately generic: the cause is logged server-side, not shown.
    pub fn load_failed_page(&self, locale: &str, slug: &str) -> String {
        let body = format!(
            "<div class=\"card\"><h1>Module failed to load</h1>\
             <p class=\"muted\">The module <strong>{}</strong> could not be loaded. Please try again later.</p>\
             <p><a href=\"/\">Back to all modules</a></p></div>",
            escape(slug)
        );
        self.page(locale, slug, "Module Failed to Load", &body)
    }

    fn page(&self, locale: &str, project_slug: &str, title: &str, body: &str) -> String {
        let locale = escape(locale);
        let project_slug = escape(project_slug);
        let title = escape(title);
        let site_name = escape(&self.site.site_name);

        fill(SHELL_TEMPLATE, &[
            ("locale", locale.as_str()),
            ("projectSlug", project_slug.as_str()),
            ("title", title.as_str()),
            ("siteName", site_name.as_str()),
            ("body", body),
        ])
    }
}
