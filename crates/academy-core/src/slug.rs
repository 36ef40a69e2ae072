//! Slug identifiers for learning modules.
//!
//! A slug is the stable, URL-safe key a module is registered and routed
//! under. The grammar matches a URL path segment: lowercase ASCII letters,
//! digits, and interior hyphens.

use crate::error::{AcademyError, Result};
use serde::{Deserialize, Serialize};

/// Maximum slug length in bytes.
pub const MAX_SLUG_LEN: usize = 64;

/// A validated, URL-safe module identifier.
///
/// Slugs are validated at construction; a `Slug` value always satisfies the
/// routing segment grammar. Once published, a slug is stable: it doubles as
/// the routing key and the module's package name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug.
    ///
    /// The grammar: non-empty, at most [`MAX_SLUG_LEN`] bytes, lowercase
    /// ASCII alphanumerics and single interior hyphens, starting and ending
    /// with an alphanumeric.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();

        let invalid = |reason: &str| AcademyError::InvalidSlug {
            slug: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if raw.len() > MAX_SLUG_LEN {
            return Err(invalid("exceeds maximum length"));
        }
        if !raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(invalid(
                "may only contain lowercase letters, digits, and hyphens",
            ));
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(invalid("must start and end with a letter or digit"));
        }
        if raw.contains("--") {
            return Err(invalid("must not contain consecutive hyphens"));
        }

        Ok(Slug(raw.to_string()))
    }

    /// Check whether a string satisfies the slug grammar.
    pub fn is_valid(raw: &str) -> bool {
        Slug::parse(raw).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = AcademyError;

    fn try_from(value: String) -> Result<Self> {
        Slug::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for raw in [
            "math-basics",
            "abcs",
            "onboarding-101",
            "shapes",
            "a",
            "x2",
            "typescript-basics",
        ] {
            let slug = Slug::parse(raw).expect("should parse");
            assert_eq!(slug.as_str(), raw);
        }
    }

    #[test]
    fn test_invalid_slugs() {
        for raw in [
            "",
            "-math",
            "math-",
            "math--basics",
            "Math-Basics",
            "math basics",
            "math/basics",
            "math_basics",
            "möth",
        ] {
            assert!(Slug::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Slug::is_valid("onboarding-101"));
        assert!(!Slug::is_valid("projects/abcs"));
    }

    #[test]
    fn test_length_limit() {
        let long = "a".repeat(MAX_SLUG_LEN);
        assert!(Slug::parse(&long).is_ok());
        let too_long = "a".repeat(MAX_SLUG_LEN + 1);
        assert!(Slug::parse(&too_long).is_err());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let slug: Slug = serde_json::from_str("\"math-basics\"").unwrap();
        assert_eq!(slug, "math-basics");
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"math-basics\"");

        let bad: std::result::Result<Slug, _> = serde_json::from_str("\"Not A Slug\"");
        assert!(bad.is_err());
    }
}
