//! Apple `.strings` resource tables.
//!
//! One table is generated per catalog language. Each line is a
//! `"key" = "value";` pair. Values are written verbatim, so the catalog author
//! is responsible for any `.strings` escaping (`\"`, `\n`) inside templates.

use indoc::indoc;

use crate::traits::Artifact;

/// The `.strings` table of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsTable {
    /// Language code this table localizes.
    pub language: String,
    /// Key-value pairs, in catalog entry order.
    pub pairs: Vec<Pair>,
}

impl StringsTable {
    pub fn find_pair(&self, key: &str) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.key == key)
    }
}

impl Artifact for StringsTable {
    fn render(&self) -> String {
        let mut content = format!(
            indoc! {"
            // This file is automatically generated by langgen.
            // Do not edit it manually, as your changes will be overwritten.
            //
            //: Language: {}
            //

            "},
            self.language
        );

        for pair in &self.pairs {
            content.push_str(&pair.to_string());
            content.push('\n');
        }

        content
    }
}

/// A single key-value pair in a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The resource key.
    pub key: String,
    /// The localized value, with positional specifiers.
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Pair {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}
