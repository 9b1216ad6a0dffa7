//! Cross-language catalog validation.
//!
//! [`validate`] checks every invariant of a [`Catalog`] and stops at the first
//! violation. On success it returns a [`ValidatedCatalog`], in which every
//! argument carries a supported [`ArgumentType`] and every placeholder of every
//! template is already resolved to the index of the argument it names. Code
//! that generates output only ever sees that resolved form, so nothing after
//! validation can fail a lookup.
//!
//! Checks run in this order:
//!
//! 1. languages: at least one, each a valid language identifier, no duplicates;
//! 2. entry keys are unique;
//! 3. completeness: every entry localizes every declared language, then no
//!    entry localizes an undeclared one;
//! 4. per entry: key syntax, then per argument its name, uniqueness and type,
//!    then placeholder resolution for each language in declared order;
//! 5. the Swift accessors and namespaces derived from the keys do not clash.

use std::{
    collections::{HashMap, HashSet},
    ops::Range,
};

use unic_langid::LanguageIdentifier;

use crate::{
    error::ValidationError,
    formats::swift::namespace_name,
    placeholder::extract_placeholders,
    types::{ArgumentType, Catalog, Entry, LanguageCode},
};

/// Localization of the development language's base resources (`Base.lproj`).
pub const BASE_LANGUAGE: &str = "Base";

/// A catalog that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCatalog<'a> {
    languages: &'a [LanguageCode],
    entries: Vec<ValidatedEntry<'a>>,
}

impl<'a> ValidatedCatalog<'a> {
    /// Declared languages, in declared order.
    pub fn languages(&self) -> &'a [LanguageCode] {
        self.languages
    }

    /// Entries, in catalog order.
    pub fn entries(&self) -> &[ValidatedEntry<'a>] {
        &self.entries
    }
}

/// An entry whose arguments are typed and whose templates are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry<'a> {
    key: &'a str,
    arguments: Vec<TypedArgument<'a>>,
    /// One per declared language, in declared order.
    templates: Vec<ResolvedTemplate<'a>>,
}

impl<'a> ValidatedEntry<'a> {
    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn arguments(&self) -> &[TypedArgument<'a>] {
        &self.arguments
    }

    /// Templates for every declared language, in declared order.
    pub fn templates(&self) -> &[ResolvedTemplate<'a>] {
        &self.templates
    }

    pub fn template(&self, language: &str) -> Option<&ResolvedTemplate<'a>> {
        self.templates.iter().find(|t| t.language == language)
    }
}

/// An argument with a supported type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedArgument<'a> {
    pub name: &'a str,
    pub argument_type: ArgumentType,
}

/// A template whose placeholders all name a declared argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate<'a> {
    language: &'a str,
    source: &'a str,
    placeholders: Vec<ResolvedPlaceholder>,
}

impl<'a> ResolvedTemplate<'a> {
    pub fn language(&self) -> &'a str {
        self.language
    }

    /// The template as written in the catalog.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Placeholder occurrences in order of appearance.
    pub fn placeholders(&self) -> &[ResolvedPlaceholder] {
        &self.placeholders
    }
}

/// A placeholder occurrence bound to its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlaceholder {
    /// Byte span of `\(name)` in the source template.
    pub span: Range<usize>,
    /// 0-based index into the entry's declared arguments.
    pub argument: usize,
}

/// Validates `catalog`, returning the first violated invariant.
pub fn validate(catalog: &Catalog) -> Result<ValidatedCatalog<'_>, ValidationError> {
    validate_languages(&catalog.languages)?;
    validate_unique_keys(&catalog.entries)?;
    validate_completeness(catalog)?;

    let entries = catalog
        .entries
        .iter()
        .map(|entry| validate_entry(entry, &catalog.languages))
        .collect::<Result<Vec<_>, _>>()?;
    validate_accessor_names(&catalog.entries)?;

    tracing::debug!(
        languages = catalog.languages.len(),
        entries = entries.len(),
        "catalog validated"
    );

    Ok(ValidatedCatalog {
        languages: &catalog.languages,
        entries,
    })
}

fn validate_languages(languages: &[LanguageCode]) -> Result<(), ValidationError> {
    if languages.is_empty() {
        return Err(ValidationError::NoLanguages);
    }

    let mut seen = HashSet::new();
    for language in languages {
        if !is_language_code(language) {
            return Err(ValidationError::InvalidLanguage {
                language: language.clone(),
            });
        }
        if !seen.insert(language.as_str()) {
            return Err(ValidationError::DuplicateLanguage {
                language: language.clone(),
            });
        }
    }

    Ok(())
}

/// Apple's `Base` localization or a language identifier such as `pt-BR`.
fn is_language_code(language: &str) -> bool {
    if language.trim().is_empty() {
        return false;
    }
    language == BASE_LANGUAGE || language.parse::<LanguageIdentifier>().is_ok()
}

fn validate_unique_keys(entries: &[Entry]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.key.as_str()) {
            return Err(ValidationError::DuplicateKey {
                key: entry.key.clone(),
            });
        }
    }
    Ok(())
}

fn validate_completeness(catalog: &Catalog) -> Result<(), ValidationError> {
    for language in &catalog.languages {
        for entry in &catalog.entries {
            if !entry.localizations.contains_key(language) {
                return Err(ValidationError::MissingLocalization {
                    key: entry.key.clone(),
                    language: language.clone(),
                });
            }
        }
    }

    for entry in &catalog.entries {
        for language in entry.localizations.keys() {
            if !catalog.languages.contains(language) {
                return Err(ValidationError::UnnecessaryLocalization {
                    key: entry.key.clone(),
                    language: language.clone(),
                });
            }
        }
    }

    Ok(())
}

fn validate_entry<'a>(
    entry: &'a Entry,
    languages: &'a [LanguageCode],
) -> Result<ValidatedEntry<'a>, ValidationError> {
    if !is_identifier_path(&entry.key) {
        return Err(ValidationError::InvalidKey {
            key: entry.key.clone(),
        });
    }

    let mut arguments = Vec::with_capacity(entry.arguments.len());
    let mut index_by_name = HashMap::with_capacity(entry.arguments.len());
    for (index, argument) in entry.arguments.iter().enumerate() {
        if !is_identifier(&argument.name) {
            return Err(ValidationError::InvalidArgumentName {
                key: entry.key.clone(),
                argument: argument.name.clone(),
            });
        }
        if index_by_name.insert(argument.name.as_str(), index).is_some() {
            return Err(ValidationError::DuplicateArgument {
                key: entry.key.clone(),
                argument: argument.name.clone(),
            });
        }
        let argument_type =
            argument
                .argument_type()
                .ok_or_else(|| ValidationError::UnsupportedArgumentType {
                    key: entry.key.clone(),
                    argument: argument.name.clone(),
                    argument_type: argument.r#type.clone(),
                })?;
        arguments.push(TypedArgument {
            name: &argument.name,
            argument_type,
        });
    }

    let templates = languages
        .iter()
        .map(|language| resolve_template(entry, language, &index_by_name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedEntry {
        key: &entry.key,
        arguments,
        templates,
    })
}

fn resolve_template<'a>(
    entry: &'a Entry,
    language: &'a str,
    index_by_name: &HashMap<&str, usize>,
) -> Result<ResolvedTemplate<'a>, ValidationError> {
    // Completeness was checked before any entry is resolved.
    let source = entry
        .localization(language)
        .ok_or_else(|| ValidationError::MissingLocalization {
            key: entry.key.clone(),
            language: language.to_string(),
        })?;

    let placeholders = extract_placeholders(source)
        .map(|placeholder| match index_by_name.get(placeholder.name) {
            Some(&argument) => Ok(ResolvedPlaceholder {
                span: placeholder.span,
                argument,
            }),
            None => Err(ValidationError::UndefinedPlaceholderReference {
                key: entry.key.clone(),
                language: language.to_string(),
                name: placeholder.name.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedTemplate {
        language,
        source,
        placeholders,
    })
}

/// Every accessor and nested namespace must be the only declaration of its
/// name in its Swift scope. Namespaces with the same name merge.
fn validate_accessor_names(entries: &[Entry]) -> Result<(), ValidationError> {
    // (scope, name) -> (is a namespace, key that first declared it)
    let mut declared: HashMap<(String, String), (bool, &str)> = HashMap::new();

    for entry in entries {
        let segments: Vec<&str> = entry.key.split('.').collect();
        let Some((member, prefixes)) = segments.split_last() else {
            continue;
        };

        let mut scope = String::new();
        for prefix in prefixes {
            let name = namespace_name(prefix);
            let declaration = (scope.clone(), name.clone());
            match declared.get(&declaration).copied() {
                Some((true, _)) => {}
                Some((false, other)) => return Err(collision(entry, other)),
                None => {
                    declared.insert(declaration, (true, entry.key.as_str()));
                }
            }
            scope.push('.');
            scope.push_str(&name);
        }

        let declaration = (scope, member.to_string());
        if let Some((_, other)) = declared.insert(declaration, (false, entry.key.as_str())) {
            return Err(collision(entry, other));
        }
    }

    Ok(())
}

fn collision(entry: &Entry, other: &str) -> ValidationError {
    ValidationError::AccessorNameCollision {
        key: entry.key.clone(),
        other: other.to_string(),
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// One or more identifiers joined by `.`.
pub fn is_identifier_path(s: &str) -> bool {
    s.split('.').all(is_identifier)
}
