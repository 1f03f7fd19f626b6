use super::docblock::DocBlock;
use super::property::PropertyAnnotation;
use crate::error::AnnotatorError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

#[allow(clippy::expect_used)]
static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)(?:(?:abstract|final|readonly)\s+)*class\s+[A-Za-z_][A-Za-z0-9_]*")
        .expect("valid class declaration regex")
});

/// Outcome of merging annotations into a source file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub content: String,
    /// Annotations for properties that had none
    pub added: usize,
    /// Existing annotations whose type was replaced
    pub updated: usize,
}

impl MergeResult {
    pub fn is_changed(&self) -> bool {
        self.added > 0 || self.updated > 0
    }
}

/// Existing docblock directly above the class declaration.
struct DocBlockSpan {
    /// Byte range of the comment including its indentation
    start: usize,
    end: usize,
    indent: String,
}

fn find_docblock(before_class: &str) -> Option<DocBlockSpan> {
    let trimmed = before_class.trim_end();
    let body = trimmed.strip_suffix("*/")?;
    // the comment closed by the final `*/` opens at the first `/*` after the
    // previous comment's close
    let search_from = body.rfind("*/").map_or(0, |i| i + 2);
    let open = search_from + body[search_from..].find("/*")?;
    if !trimmed[open..].starts_with("/**") {
        return None;
    }
    let line_start = trimmed[..open].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &trimmed[line_start..open];
    let (start, indent) = if prefix.chars().all(|c| c == ' ' || c == '\t') {
        (line_start, prefix.to_string())
    } else {
        (open, String::new())
    };
    Some(DocBlockSpan {
        start,
        end: trimmed.len(),
        indent,
    })
}

/// Start of the `#[...]` attribute lines directly above `class_start`.
///
/// Only single-line attributes are recognised.
fn attributes_start(content: &str, class_start: usize) -> usize {
    let mut start = class_start;
    while start > 0 {
        let line_start = content[..start - 1].rfind('\n').map_or(0, |i| i + 1);
        if !content[line_start..start].trim_start().starts_with("#[") {
            break;
        }
        start = line_start;
    }
    start
}

/// Merge `annotations` into `block`, returning `(added, updated)`.
fn merge_into(block: &mut DocBlock, annotations: &[PropertyAnnotation]) -> (usize, usize) {
    let mut updated = 0;
    let mut additions = Vec::new();

    for annotation in annotations {
        let existing = block.lines.iter().enumerate().find_map(|(i, line)| {
            PropertyAnnotation::try_parse(line)
                .filter(|parsed| parsed.matches(annotation))
                .map(|parsed| (i, parsed))
        });
        match existing {
            Some((_, parsed)) if parsed.type_hint == annotation.type_hint => {}
            Some((i, parsed)) => {
                tracing::debug!(
                    variable = %annotation.variable,
                    from = %parsed.type_hint,
                    to = %annotation.type_hint,
                    "updating annotation"
                );
                let replacement = PropertyAnnotation {
                    type_hint: annotation.type_hint.clone(),
                    ..parsed
                };
                block.lines[i] = replacement.to_string();
                updated += 1;
            }
            None => additions.push(annotation.to_string()),
        }
    }

    let added = additions.len();
    if added > 0 {
        let has_tags = block.lines.iter().any(|l| l.starts_with('@'));
        if !block.lines.is_empty() && !has_tags {
            block.lines.push(String::new());
        }
        block.lines.extend(additions);
    }
    (added, updated)
}

/// Merge property annotations into the docblock of the first class in `content`.
///
/// Annotations already present with the same type are left alone, ones with
/// a different type are rewritten in place, new ones are appended. Without a
/// docblock, one is created above the class and its attributes.
///
/// # Errors
///
/// [`AnnotatorError::ClassNotFound`] if `content` declares no class, or a
/// render error from the docblock template.
pub fn merge_annotations(
    content: &str,
    annotations: &[PropertyAnnotation],
    path: &Path,
) -> Result<MergeResult, AnnotatorError> {
    let caps = CLASS_RE
        .captures(content)
        .ok_or_else(|| AnnotatorError::ClassNotFound {
            path: path.to_path_buf(),
        })?;
    let class_start = caps.get(0).map_or(0, |m| m.start());
    let class_indent = caps.get(1).map_or("", |m| m.as_str());
    let decl_start = attributes_start(content, class_start);

    let unchanged = || MergeResult {
        content: content.to_string(),
        added: 0,
        updated: 0,
    };

    match find_docblock(&content[..decl_start]) {
        Some(span) => {
            let mut block = DocBlock::parse(&content[span.start..span.end]);
            let (added, updated) = merge_into(&mut block, annotations);
            if added == 0 && updated == 0 {
                return Ok(unchanged());
            }
            let rendered = block.render(&span.indent)?;
            let merged = format!(
                "{}{}{}",
                &content[..span.start],
                rendered,
                &content[span.end..]
            );
            Ok(MergeResult {
                content: merged,
                added,
                updated,
            })
        }
        None => {
            let mut block = DocBlock::default();
            let (added, _) = merge_into(&mut block, annotations);
            if added == 0 {
                return Ok(unchanged());
            }
            let rendered = block.render(class_indent)?;
            let merged = format!(
                "{}{}\n{}",
                &content[..decl_start],
                rendered,
                &content[decl_start..]
            );
            Ok(MergeResult {
                content: merged,
                added,
                updated: 0,
            })
        }
    }
}
