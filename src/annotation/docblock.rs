use askama::Template;

/// Renders a docblock from its content lines.
#[derive(Template)]
#[template(
    source = "{{ indent }}/**\n{%- for line in lines %}\n{{ indent }}{% if line.is_empty() %} *{% else %} * {{ line }}{% endif %}\n{%- endfor %}\n{{ indent }} */",
    ext = "txt",
    escape = "none"
)]
pub struct DocBlockTemplate<'a> {
    /// Leading whitespace of the class declaration
    pub indent: &'a str,
    /// Content lines without the ` * ` prefix
    pub lines: &'a [String],
}

/// Content of a `/** ... */` comment, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub lines: Vec<String>,
}

impl DocBlock {
    /// Strip the comment markers and the ` * ` prefix of every line.
    ///
    /// Leading and trailing blank lines are dropped; blank lines between
    /// content are kept.
    pub fn parse(text: &str) -> Self {
        let inner = text
            .trim()
            .trim_start_matches("/**")
            .trim_end_matches("*/");
        let mut lines: Vec<String> = inner
            .lines()
            .map(|line| {
                let line = line.trim_start();
                let line = line.strip_prefix('*').unwrap_or(line);
                let line = line.strip_prefix(' ').unwrap_or(line);
                line.trim_end().to_string()
            })
            .collect();

        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        DocBlock { lines }
    }

    pub fn render(&self, indent: &str) -> Result<String, askama::Error> {
        DocBlockTemplate {
            indent,
            lines: &self.lines,
        }
        .render()
    }
}
