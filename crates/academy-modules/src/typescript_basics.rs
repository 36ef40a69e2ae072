//! TypeScript lessons module.
//!
//! A four-step lesson plan with code samples, a cheat sheet, and a
//! multiple-choice quiz bank, all parsed from the embedded dataset. The
//! loader validates that every quiz answer index points at a real option.

use academy_core::html::escape;
use academy_core::{
    AcademyError, EntryPoint, ModuleLoader, ModuleManifest, ModuleView, Result, Slug,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub const SLUG: &str = "typescript-basics";

const LESSON_DATA: &str = include_str!("data/typescript_basics.json");

pub fn manifest() -> Result<ModuleManifest> {
    Ok(
        ModuleManifest::new(
            Slug::parse(SLUG)?,
            "TypeScript Basics",
            "Adopt a typed mindset with guided lessons and a quiz.",
        )
        .with_icon("🟦"),
    )
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LessonStep {
    title: String,
    focus: String,
    description: String,
    code: String,
    checklist: Vec<String>,
    keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheatSheetEntry {
    label: String,
    example: String,
    tip: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizQuestion {
    id: String,
    category: String,
    prompt: String,
    #[serde(default)]
    snippet: Option<String>,
    options: Vec<String>,
    answer_index: usize,
    explanation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LessonDataset {
    lesson_plan: Vec<LessonStep>,
    cheat_sheet: Vec<CheatSheetEntry>,
    quiz_questions: Vec<QuizQuestion>,
}

pub struct TypescriptBasicsLoader;

#[async_trait]
impl ModuleLoader for TypescriptBasicsLoader {
    async fn load(&self) -> Result<EntryPoint> {
        let dataset: LessonDataset =
            serde_json::from_str(LESSON_DATA).map_err(|e| AcademyError::load_failed(SLUG, e))?;

        for question in &dataset.quiz_questions {
            if question.answer_index >= question.options.len() {
                return Err(AcademyError::load_failed(
                    SLUG,
                    format!("quiz question '{}' has an out-of-range answer", question.id),
                ));
            }
        }

        debug!(
            "Loaded {} lessons and {} quiz questions",
            dataset.lesson_plan.len(),
            dataset.quiz_questions.len()
        );
        Ok(Arc::new(TypescriptBasicsView { dataset }))
    }
}

struct TypescriptBasicsView {
    dataset: LessonDataset,
}

impl ModuleView for TypescriptBasicsView {
    fn render(&self) -> String {
        let mut out = String::from(
            "<h1>TypeScript Basics</h1>\n\
             <p class=\"muted\">Work through the lessons, keep the cheat sheet handy, \
             then try the quiz.</p>\n",
        );

        for (i, step) in self.dataset.lesson_plan.iter().enumerate() {
            out.push_str(&format!(
                "<div class=\"card\"><h2>Step {n}: {title}</h2><p><em>{focus}</em></p>\
                 <p>{description}</p><pre><code>{code}</code></pre><ul>\n",
                n = i + 1,
                title = escape(&step.title),
                focus = escape(&step.focus),
                description = escape(&step.description),
                code = escape(&step.code),
            ));
            for item in &step.checklist {
                out.push_str(&format!("<li>{}</li>\n", escape(item)));
            }
            out.push_str(&format!(
                "</ul><p class=\"muted\">Keywords: {}</p></div>\n",
                escape(&step.keywords.join(", "))
            ));
        }

        out.push_str("<div class=\"card\"><h2>Cheat sheet</h2><ul>\n");
        for entry in &self.dataset.cheat_sheet {
            out.push_str(&format!(
                "<li><strong>{label}</strong>: <code>{example}</code> — {tip}</li>\n",
                label = escape(&entry.label),
                example = escape(&entry.example),
                tip = escape(&entry.tip),
            ));
        }
        out.push_str("</ul></div>\n");

        out.push_str("<div class=\"card\"><h2>Quiz</h2><ol>\n");
        for question in &self.dataset.quiz_questions {
            out.push_str(&format!(
                "<li id=\"quiz-{id}\"><p><strong>{category}</strong>: {prompt}</p>\n",
                id = escape(&question.id),
                category = escape(&question.category),
                prompt = escape(&question.prompt),
            ));
            if let Some(snippet) = &question.snippet {
                out.push_str(&format!("<pre><code>{}</code></pre>\n", escape(snippet)));
            }
            out.push_str("<ul>\n");
            for option in &question.options {
                out.push_str(&format!("<li><code>{}</code></li>\n", escape(option)));
            }
            out.push_str(&format!(
                "</ul><details><summary>Answer</summary><p><code>{answer}</code> — {explanation}</p></details></li>\n",
                answer = escape(&question.options[question.answer_index]),
                explanation = escape(&question.explanation),
            ));
        }
        out.push_str("</ol></div>");
        out
    }
}
