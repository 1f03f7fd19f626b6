use crate::error::AnnotatorError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

#[allow(clippy::expect_used)]
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@(property(?:-read|-write)?)\s+([^\s$]+)\s+\$([A-Za-z_][A-Za-z0-9_]*)(?:\s+(.*?))?\s*$")
        .expect("valid property annotation regex")
});

/// A `@property <Type> $<name>` docblock annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAnnotation {
    /// `property`, `property-read` or `property-write`
    pub tag: String,
    pub type_hint: String,
    pub variable: String,
    pub description: Option<String>,
}

impl PropertyAnnotation {
    pub fn new(type_hint: impl Into<String>, variable: impl Into<String>) -> Self {
        PropertyAnnotation {
            tag: "property".to_string(),
            type_hint: type_hint.into(),
            variable: variable.into(),
            description: None,
        }
    }

    /// Parse an annotation line.
    ///
    /// # Errors
    ///
    /// [`AnnotatorError::AnnotationParse`] naming the input if it is not a
    /// well-formed property annotation.
    pub fn parse(input: &str) -> Result<Self, AnnotatorError> {
        Self::try_parse(input).ok_or_else(|| AnnotatorError::AnnotationParse(input.to_string()))
    }

    /// Like [`PropertyAnnotation::parse`], `None` for anything else.
    pub fn try_parse(input: &str) -> Option<Self> {
        let caps = PROPERTY_RE.captures(input.trim())?;
        Some(PropertyAnnotation {
            tag: caps[1].to_string(),
            type_hint: caps[2].to_string(),
            variable: caps[3].to_string(),
            description: caps
                .get(4)
                .map(|m| m.as_str().to_string())
                .filter(|d| !d.is_empty()),
        })
    }

    /// Same property, regardless of type.
    pub fn matches(&self, other: &PropertyAnnotation) -> bool {
        self.variable == other.variable
    }
}

impl fmt::Display for PropertyAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} {} ${}", self.tag, self.type_hint, self.variable)?;
        if let Some(description) = &self.description {
            write!(f, " {description}")?;
        }
        Ok(())
    }
}
