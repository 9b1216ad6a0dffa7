//! Resource keys and accessor signatures.
//!
//! An entry with arguments is stored under a composite key: the base key, a
//! space, then one unnumbered specifier per argument in declared order
//! (`"greeting %@ %lld"`). Tables and accessors derive the key through the
//! same function so that they always agree.

use crate::{specifier::bare_specifier, validation::ValidatedEntry};

impl ValidatedEntry<'_> {
    /// The key written to every table and used by the accessor lookup.
    pub fn resource_key(&self) -> String {
        if self.arguments().is_empty() {
            return self.key().to_string();
        }

        let specifiers = self
            .arguments()
            .iter()
            .map(|argument| bare_specifier(argument.argument_type))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {}", self.key(), specifiers)
    }

    /// Declared argument names as a bracketed list, e.g. `[user, count]`.
    pub fn argument_list(&self) -> String {
        self.argument_list_with(str::to_string)
    }

    /// The argument list with every name passed through `render`, e.g. to
    /// escape names that are keywords in the generated source.
    pub fn argument_list_with<F>(&self, render: F) -> String
    where
        F: Fn(&str) -> String,
    {
        format!(
            "[{}]",
            self.arguments()
                .iter()
                .map(|argument| render(argument.name))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::{formats::CatalogFormat, types::Catalog, validation::validate};

    const CATALOG: &str = indoc! {r#"
        languages: [en]
        items:
          - key: greeting
            localizations:
              en: "Hello, \\(user)!"
            arguments:
              - name: user
                type: String
          - key: cart.summary
            localizations:
              en: "\\(price) for \\(count) items, \\(user)"
            arguments:
              - name: count
                type: Int
              - name: price
                type: Double
              - name: user
                type: String
          - key: title
            localizations:
              en: Title
    "#};

    #[test]
    fn test_resource_keys() {
        let catalog = Catalog::from_str_with_format(CATALOG, CatalogFormat::Yaml).unwrap();
        let validated = validate(&catalog).unwrap();
        let keys: Vec<_> = validated.entries().iter().map(|e| e.resource_key()).collect();
        assert_eq!(
            keys,
            vec!["greeting %@", "cart.summary %lld %lf %@", "title"]
        );
    }

    #[test]
    fn test_resource_key_is_stable() {
        let catalog = Catalog::from_str_with_format(CATALOG, CatalogFormat::Yaml).unwrap();
        let validated = validate(&catalog).unwrap();
        for entry in validated.entries() {
            assert_eq!(entry.resource_key(), entry.resource_key());
        }
    }

    #[test]
    fn test_argument_lists() {
        let catalog = Catalog::from_str_with_format(CATALOG, CatalogFormat::Yaml).unwrap();
        let validated = validate(&catalog).unwrap();
        let lists: Vec<_> = validated
            .entries()
            .iter()
            .map(|e| e.argument_list())
            .collect();
        assert_eq!(lists, vec!["[user]", "[count, price, user]", "[]"]);
    }

    #[test]
    fn test_argument_list_with_renderer() {
        let catalog = Catalog::from_str_with_format(CATALOG, CatalogFormat::Yaml).unwrap();
        let validated = validate(&catalog).unwrap();
        let cart = &validated.entries()[1];
        assert_eq!(
            cart.argument_list_with(|name| name.to_uppercase()),
            "[COUNT, PRICE, USER]"
        );
        assert_eq!(cart.argument_list_with(str::to_string), cart.argument_list());
    }
}
