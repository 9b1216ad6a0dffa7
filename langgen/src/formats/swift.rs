//! Swift accessor module.
//!
//! Every catalog entry becomes one static accessor inside a top-level
//! `public enum`. Dotted keys nest: `home.greeting` is generated as
//! `Localization.Home.greeting(...)`. Namespaces keep the order in which
//! their first entry appears in the catalog.
//!
//! ```swift
//! public enum Localization {
//!     /// Hello, \(user)!
//!     public static func greeting(user: String) -> String {
//!         String(format: NSLocalizedString("greeting %@", tableName: "Localizable", comment: ""), arguments: [user])
//!     }
//! }
//! ```

use crate::{generator::AccessorDescriptor, traits::Artifact};

const INDENT: &str = "    ";

// Words that must be wrapped in backticks to be used as identifiers.
const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "break", "case", "catch", "class",
    "continue", "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough",
    "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "open", "operator", "private", "protocol", "public",
    "repeat", "rethrows", "return", "self", "static", "struct", "subscript", "super", "switch",
    "throw", "throws", "true", "try", "typealias", "var", "where", "while",
];

/// The generated Swift source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorModule {
    /// Name of the top-level enum (and of the file).
    pub type_name: String,
    /// `.strings` table the accessors look up.
    pub table_name: String,
    /// Accessors, in catalog entry order.
    pub accessors: Vec<AccessorDescriptor>,
}

impl Artifact for AccessorModule {
    fn render(&self) -> String {
        let mut root = Namespace::new(self.type_name.clone());
        for accessor in &self.accessors {
            let path: Vec<&str> = accessor.entry_key.split('.').collect();
            root.insert(&path, accessor);
        }

        let mut content = String::from(
            "// This file is automatically generated by langgen.\n\
             // Do not edit it manually, as your changes will be overwritten.\n\
             \n\
             import Foundation\n\
             \n",
        );
        root.render(&self.table_name, 0, &mut content);
        content
    }
}

enum Item<'a> {
    Accessor(&'a AccessorDescriptor),
    Namespace(Namespace<'a>),
}

struct Namespace<'a> {
    name: String,
    items: Vec<Item<'a>>,
}

impl<'a> Namespace<'a> {
    fn new(name: String) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }

    fn insert(&mut self, path: &[&str], accessor: &'a AccessorDescriptor) {
        let (first, rest) = match path.split_first() {
            Some((first, rest)) if !rest.is_empty() => (first, rest),
            _ => {
                self.items.push(Item::Accessor(accessor));
                return;
            }
        };

        let name = namespace_name(first);
        let existing = self.items.iter_mut().find_map(|item| match item {
            Item::Namespace(namespace) if namespace.name == name => Some(namespace),
            _ => None,
        });
        match existing {
            Some(namespace) => namespace.insert(rest, accessor),
            None => {
                let mut namespace = Namespace::new(name);
                namespace.insert(rest, accessor);
                self.items.push(Item::Namespace(namespace));
            }
        }
    }

    fn render(&self, table_name: &str, depth: usize, out: &mut String) {
        let indent = INDENT.repeat(depth);
        out.push_str(&format!(
            "{}public enum {} {{\n",
            indent,
            escape_identifier(&self.name)
        ));

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match item {
                Item::Accessor(accessor) => render_accessor(accessor, table_name, depth + 1, out),
                Item::Namespace(namespace) => namespace.render(table_name, depth + 1, out),
            }
        }

        out.push_str(&format!("{}}}\n", indent));
    }
}

fn render_accessor(accessor: &AccessorDescriptor, table_name: &str, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    let body_indent = INDENT.repeat(depth + 1);
    let name = accessor
        .entry_key
        .rsplit('.')
        .next()
        .unwrap_or(&accessor.entry_key);
    let lookup = format!(
        "NSLocalizedString({}, tableName: {}, comment: \"\")",
        string_literal(&accessor.resource_key),
        string_literal(table_name)
    );

    let doc = accessor.doc.lines().collect::<Vec<_>>().join(" ");
    if !doc.trim().is_empty() {
        out.push_str(&format!("{}/// {}\n", indent, doc.trim()));
    }

    if accessor.arguments.is_empty() {
        out.push_str(&format!(
            "{}public static var {}: String {{\n",
            indent,
            escape_identifier(name)
        ));
        out.push_str(&format!("{}{}\n", body_indent, lookup));
    } else {
        let parameters = accessor
            .arguments
            .iter()
            .map(|(name, ty)| format!("{}: {}", escape_identifier(name), ty.swift_type()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{}public static func {}({}) -> String {{\n",
            indent,
            escape_identifier(name),
            parameters
        ));
        out.push_str(&format!(
            "{}String(format: {}, arguments: {})\n",
            body_indent, lookup, accessor.argument_list
        ));
    }

    out.push_str(&format!("{}}}\n", indent));
}

/// `home` → `Home`
pub(crate) fn namespace_name(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Wraps Swift keywords in backticks.
pub(crate) fn escape_identifier(name: &str) -> String {
    if SWIFT_KEYWORDS.contains(&name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}

fn string_literal(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
