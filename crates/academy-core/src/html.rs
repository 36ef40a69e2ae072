//! Minimal HTML assembly helpers.
//!
//! Pages are built from embedded skeletons with `{{placeholder}}`
//! substitution; every dynamic value goes through [`escape`] first.

/// Escape a string for safe interpolation into HTML text or attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace `{{key}}` placeholders in a template.
///
/// Values are substituted verbatim; callers escape anything dynamic before
/// passing it in (body fragments are already-rendered HTML).
pub fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_fill() {
        let out = fill("<h1>{{title}}</h1><p>{{title}} / {{body}}</p>", &[
            ("title", "Shapes"),
            ("body", "four sides"),
        ]);
        assert_eq!(out, "<h1>Shapes</h1><p>Shapes / four sides</p>");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{{missing}}", &[]), "{{missing}}");
    }
}
