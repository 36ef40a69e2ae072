//! Shape explorer module.

use academy_core::html::escape;
use academy_core::{
    AcademyError, EntryPoint, ModuleLoader, ModuleManifest, ModuleView, Result, Slug,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub const SLUG: &str = "shapes";

const SHAPES_DATA: &str = include_str!("data/shapes.json");

pub fn manifest() -> Result<ModuleManifest> {
    Ok(
        ModuleManifest::new(
            Slug::parse(SLUG)?,
            "Learn about Shapes",
            "Circles, squares, triangles, and rectangles.",
        )
        .with_icon("🔷"),
    )
}

#[derive(Debug, Clone, Deserialize)]
struct Shape {
    id: String,
    name: String,
    sides: u32,
    description: String,
}

pub struct ShapesLoader;

#[async_trait]
impl ModuleLoader for ShapesLoader {
    async fn load(&self) -> Result<EntryPoint> {
        let shapes: Vec<Shape> =
            serde_json::from_str(SHAPES_DATA).map_err(|e| AcademyError::load_failed(SLUG, e))?;

        if shapes.is_empty() {
            return Err(AcademyError::load_failed(SLUG, "shapes dataset is empty"));
        }

        debug!("Loaded {} shapes", shapes.len());
        Ok(Arc::new(ShapesView { shapes }))
    }
}

struct ShapesView {
    shapes: Vec<Shape>,
}

impl ModuleView for ShapesView {
    fn render(&self) -> String {
        let mut out = String::from("<h1>Learn about Shapes</h1>\n<ul class=\"cards\">\n");
        for shape in &self.shapes {
            let sides = if shape.sides == 0 {
                "It has no sides at all.".to_string()
            } else {
                format!("It has <strong>{}</strong> sides.", shape.sides)
            };
            out.push_str(&format!(
                "<li class=\"card\" id=\"shape-{id}\"><h2>{name}</h2><p>{description}</p><p class=\"muted\">{sides}</p></li>\n",
                id = escape(&shape.id),
                name = escape(&shape.name),
                description = escape(&shape.description),
            ));
        }
        out.push_str("</ul>\n<div class=\"card\"><h2>Quiz yourself</h2><ol>\n");
        for shape in &self.shapes {
            out.push_str(&format!(
                "<li>Can you find the <strong>{}</strong>?</li>\n",
                escape(&shape.name)
            ));
        }
        out.push_str("</ol></div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_all_shapes() {
        let view = ShapesLoader.load().await.unwrap();
        let html = view.render();

        for name in ["Circle", "Square", "Triangle", "Rectangle"] {
            assert!(html.contains(name), "missing {name}");
        }
        assert!(html.contains("no sides at all"));
        assert!(html.contains("Quiz yourself"));
    }
}
