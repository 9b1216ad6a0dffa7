//! Rewriting named placeholders into positional format specifiers.
//!
//! Each `\(name)` becomes `%<n>$<spec>`, where `n` is the 1-based position of
//! the named argument in the entry's declarations. Appearance order in the
//! text does not matter, and every occurrence of one name gets the same token.

use crate::{
    specifier::positional_specifier,
    validation::{ResolvedTemplate, ValidatedEntry},
};

impl ValidatedEntry<'_> {
    /// The resource-table value for `language`, or `None` if the language is
    /// not declared by the catalog.
    pub fn localized_value(&self, language: &str) -> Option<String> {
        self.template(language)
            .map(|template| rewrite_template(self, template))
    }
}

/// Replaces every placeholder of `template` with its positional specifier.
pub fn rewrite_template(entry: &ValidatedEntry<'_>, template: &ResolvedTemplate<'_>) -> String {
    let source = template.source();
    let arguments = entry.arguments();

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for placeholder in template.placeholders() {
        out.push_str(&source[cursor..placeholder.span.start]);
        let argument = &arguments[placeholder.argument];
        out.push_str(&positional_specifier(
            placeholder.argument + 1,
            argument.argument_type,
        ));
        cursor = placeholder.span.end;
    }
    out.push_str(&source[cursor..]);

    tracing::trace!(
        key = entry.key(),
        language = template.language(),
        value = %out,
        "rewrote template"
    );
    out
}

#[cfg(test)]
mod tests {
    use crate::{
        formats::CatalogFormat,
        types::Catalog,
        validation::validate,
    };

    fn values(yaml: &str, language: &str) -> Vec<String> {
        let catalog = Catalog::from_str_with_format(yaml, CatalogFormat::Yaml).unwrap();
        let validated = validate(&catalog).unwrap();
        validated
            .entries()
            .iter()
            .map(|entry| entry.localized_value(language).unwrap())
            .collect()
    }

    #[test]
    fn test_rewrite_greeting() {
        let yaml = r#"
languages: [en, ja]
items:
  - key: greeting
    localizations:
      en: "Hello, \\(user)!"
      ja: "こんにちは、\\(user)さん！"
    arguments:
      - name: user
        type: String
"#;
        assert_eq!(values(yaml, "en"), vec!["Hello, %1$@!"]);
        assert_eq!(values(yaml, "ja"), vec!["こんにちは、%1$@さん！"]);
    }

    #[test]
    fn test_order_follows_declarations_not_text() {
        let yaml = r#"
languages: [en]
items:
  - key: order
    localizations:
      en: "\\(b) comes after \\(a)"
    arguments:
      - name: a
        type: Int
      - name: b
        type: String
"#;
        assert_eq!(values(yaml, "en"), vec!["%2$@ comes after %1$lld"]);
    }

    #[test]
    fn test_repeated_placeholder_collapses_to_one_token() {
        let yaml = r#"
languages: [en]
items:
  - key: echo
    localizations:
      en: "\\(x), \\(x) and \\(x) cost \\(price)"
    arguments:
      - name: price
        type: Double
      - name: x
        type: String
"#;
        assert_eq!(
            values(yaml, "en"),
            vec!["%2$@, %2$@ and %2$@ cost %1$lf"]
        );
    }

    #[test]
    fn test_no_arguments_leaves_template_unchanged() {
        let yaml = r#"
languages: [en]
items:
  - key: plain
    localizations:
      en: "100% (literally) plain"
"#;
        assert_eq!(values(yaml, "en"), vec!["100% (literally) plain"]);
    }

    #[test]
    fn test_unknown_language_has_no_value() {
        let yaml = r#"
languages: [en]
items:
  - key: plain
    localizations:
      en: Plain
"#;
        let catalog = Catalog::from_str_with_format(yaml, CatalogFormat::Yaml).unwrap();
        let validated = validate(&catalog).unwrap();
        assert_eq!(validated.entries()[0].localized_value("fr"), None);
    }
}
