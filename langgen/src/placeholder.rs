//! Placeholder extraction.
//!
//! Templates reference arguments with the interpolation form `\(name)`. The
//! name runs non-greedily up to the first following `)`, so nesting is not
//! possible and a name can never contain `)`. Occurrences are found with a
//! leftmost, non-overlapping scan and never span a line break.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\\\((.*?)\)").unwrap();
}

/// One `\(name)` occurrence inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte span of the whole occurrence, delimiters included.
    pub span: Range<usize>,
    /// The inner name with `\(` and `)` stripped.
    pub name: &'a str,
}

/// Lazy iterator over the placeholders of one template, in order of appearance.
///
/// The only state is the scan position, so a clone resumes from the same
/// point and calling [`extract_placeholders`] again restarts from the
/// beginning.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    template: &'a str,
    position: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position > self.template.len() {
            return None;
        }
        let captures = PLACEHOLDER_REGEX.captures_at(self.template, self.position)?;
        // Group 0 and group 1 always participate in a match of this pattern.
        let whole = captures.get(0)?;
        let name = captures.get(1)?;
        // A match is at least `\()`, so the scan always moves forward.
        self.position = whole.end();
        Some(Placeholder {
            span: whole.range(),
            name: name.as_str(),
        })
    }
}

/// Scans `template` for `\(name)` placeholders.
pub fn extract_placeholders(template: &str) -> Placeholders<'_> {
    Placeholders {
        template,
        position: 0,
    }
}
