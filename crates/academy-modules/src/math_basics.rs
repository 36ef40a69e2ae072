//! Arithmetic trainer module.
//!
//! Four guided lessons on addition and subtraction with counting visuals,
//! followed by a freshly generated practice set. Addition stays within sums
//! to 20; subtraction never goes negative.

use academy_core::html::escape;
use academy_core::{EntryPoint, ModuleLoader, ModuleManifest, ModuleView, Result, Slug};
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

pub const SLUG: &str = "math-basics";

const PRACTICE_SET_SIZE: usize = 10;

pub fn manifest() -> Result<ModuleManifest> {
    Ok(
        ModuleManifest::new(
            Slug::parse(SLUG)?,
            "Arithmetic Trainer",
            "Master the basics of addition and subtraction.",
        )
        .with_icon("🔢"),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '−',
        }
    }
}

struct Lesson {
    title: &'static str,
    text: &'static str,
    a: u32,
    b: u32,
    op: Operation,
    visual: &'static str,
    explanation: &'static str,
}

const LESSONS: [Lesson; 4] = [
    Lesson {
        title: "Let's Add!",
        text: "Addition is bringing numbers together.",
        a: 2,
        b: 3,
        op: Operation::Addition,
        visual: "🍎",
        explanation: "2 apples plus 3 apples equals 5 apples.",
    },
    Lesson {
        title: "Adding Bigger Numbers",
        text: "It works the same way for bigger groups.",
        a: 5,
        b: 4,
        op: Operation::Addition,
        visual: "⭐",
        explanation: "5 stars and 4 stars make 9 stars.",
    },
    Lesson {
        title: "Let's Subtract!",
        text: "Subtraction is taking numbers away.",
        a: 5,
        b: 2,
        op: Operation::Subtraction,
        visual: "🍪",
        explanation: "If you have 5 cookies and eat 2, you have 3 left.",
    },
    Lesson {
        title: "Zero",
        text: "If you take away everything, you have zero.",
        a: 3,
        b: 3,
        op: Operation::Subtraction,
        visual: "🎈",
        explanation: "3 balloons minus 3 balloons is 0 balloons.",
    },
];

#[derive(Debug, Clone, Copy)]
struct Question {
    a: u32,
    b: u32,
    op: Operation,
    answer: u32,
}

fn generate_practice_set(count: usize) -> Vec<Question> {
    let mut rng = rand::rng();
    let mut questions = Vec::with_capacity(count);

    for _ in 0..count {
        let question = if rng.random_bool(0.5) {
            // Sum stays within 0..=20
            let a = rng.random_range(0..=10);
            let b = rng.random_range(0..=10);
            Question {
                a,
                b,
                op: Operation::Addition,
                answer: a + b,
            }
        } else {
            // Difference never goes negative
            let a = rng.random_range(0..=20);
            let b = rng.random_range(0..=a);
            Question {
                a,
                b,
                op: Operation::Subtraction,
                answer: a - b,
            }
        };
        questions.push(question);
    }

    questions
}

pub struct MathBasicsLoader;

#[async_trait]
impl ModuleLoader for MathBasicsLoader {
    async fn load(&self) -> Result<EntryPoint> {
        let questions = generate_practice_set(PRACTICE_SET_SIZE);
        debug!("Generated {} practice questions", questions.len());
        Ok(Arc::new(MathBasicsView { questions }))
    }
}

struct MathBasicsView {
    questions: Vec<Question>,
}

impl ModuleView for MathBasicsView {
    fn render(&self) -> String {
        let mut out = String::from(
            "<h1>Arithmetic Trainer</h1>\n\
             <p class=\"muted\">Master the basics of addition and subtraction! \
             We'll start with some quick lessons, then test your skills.</p>\n",
        );

        for lesson in &LESSONS {
            let visuals = format!(
                "{} {} {}",
                lesson.visual.repeat(lesson.a as usize),
                lesson.op.symbol(),
                lesson.visual.repeat(lesson.b as usize),
            );
            out.push_str(&format!(
                "<div class=\"card\"><h2>{title}</h2><p>{text}</p>\
                 <p>{a} {op} {b}</p><p>{visuals}</p><p class=\"muted\">{explanation}</p></div>\n",
                title = escape(lesson.title),
                text = escape(lesson.text),
                a = lesson.a,
                op = lesson.op.symbol(),
                b = lesson.b,
                explanation = escape(lesson.explanation),
            ));
        }

        out.push_str("<div class=\"card\"><h2>Practice</h2><ol>\n");
        for question in &self.questions {
            out.push_str(&format!(
                "<li>{} {} {} = ? <details><summary>Answer</summary>{}</details></li>\n",
                question.a,
                question.op.symbol(),
                question.b,
                question.answer,
            ));
        }
        out.push_str("</ol></div>");
        out
    }
}
