//! Core types for langgen.
//! Catalog documents decode into these; validation and generation read them.

use std::{
    collections::BTreeMap,
    fmt::Display,
    fs::File,
    io::Read,
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error::Error, formats::CatalogFormat};

/// Language code as written in the catalog (e.g. "en", "ja", "pt-BR").
pub type LanguageCode = String;

/// The single source of truth: declared project languages plus every
/// localizable entry.
///
/// A catalog is immutable once loaded. Run it through
/// [`crate::validation::validate`] before generating anything from it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    /// Project languages, in the order output files are generated.
    pub languages: Vec<LanguageCode>,

    /// All entries, in output order.
    #[serde(rename = "items", default)]
    pub entries: Vec<Entry>,
}

impl Catalog {
    /// Parses a catalog from text in the given format.
    pub fn from_str_with_format(s: &str, format: CatalogFormat) -> Result<Self, Error> {
        let catalog: Catalog = match format {
            CatalogFormat::Yaml => {
                serde_yaml::from_str(s).map_err(|e| Error::parse_error(format, e))?
            }
            CatalogFormat::Json => {
                serde_json::from_str(s).map_err(|e| Error::parse_error(format, e))?
            }
            CatalogFormat::Toml => toml::from_str(s).map_err(|e| Error::parse_error(format, e))?,
        };

        tracing::debug!(
            %format,
            languages = catalog.languages.len(),
            entries = catalog.entries.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Reads a catalog file.
    ///
    /// When `format` is `None` it is inferred from the file extension. The
    /// file is decoded BOM-aware, so UTF-16 catalogs saved by some editors are
    /// accepted as well as plain UTF-8.
    pub fn read_from<P: AsRef<Path>>(path: P, format: Option<CatalogFormat>) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format,
            None => CatalogFormat::from_path(path)?,
        };

        let file = File::open(path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;

        Self::from_str_with_format(&decoded, format)
    }

    pub fn find_entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// One localizable message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Stable identifier. Dots split it into accessor namespaces.
    pub key: String,

    /// Template per language code. Templates reference arguments as `\(name)`.
    pub localizations: BTreeMap<LanguageCode, String>,

    /// Declared arguments. Their order fixes the positional specifier indices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

impl Entry {
    pub fn localization(&self, language: &str) -> Option<&str> {
        self.localizations.get(language).map(String::as_str)
    }
}

/// A named, typed argument of an entry.
///
/// `type` keeps the raw text from the catalog so that an unsupported type is
/// reported by validation with the entry it belongs to, instead of surfacing
/// as an opaque deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Argument {
    pub name: String,
    pub r#type: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, argument_type: impl Into<String>) -> Self {
        Argument {
            name: name.into(),
            r#type: argument_type.into(),
        }
    }

    /// The semantic type, if the declared one is supported.
    pub fn argument_type(&self) -> Option<ArgumentType> {
        self.r#type.parse().ok()
    }
}

/// Supported semantic argument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ArgumentType {
    String,
    Int,
    Double,
}

impl ArgumentType {
    pub const ALL: [ArgumentType; 3] = [
        ArgumentType::String,
        ArgumentType::Int,
        ArgumentType::Double,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentType::String => "String",
            ArgumentType::Int => "Int",
            ArgumentType::Double => "Double",
        }
    }
}

impl FromStr for ArgumentType {
    type Err = String;

    /// Type names are matched exactly; `int` or `string` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ArgumentType::String),
            "Int" => Ok(ArgumentType::Int),
            "Double" => Ok(ArgumentType::Double),
            other => Err(format!("unsupported argument type: {other}")),
        }
    }
}

impl Display for ArgumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_yaml_catalog() {
        let yaml = indoc! {r#"
            languages: [en, ja]
            items:
              - key: greeting
                localizations:
                  en: 'Hello, \(user)!'
                  ja: 'こんにちは、\(user)さん！'
                arguments:
                  - name: user
                    type: String
              - key: title
                localizations:
                  en: Title
                  ja: タイトル
        "#};

        let catalog = Catalog::from_str_with_format(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(catalog.languages, vec!["en", "ja"]);
        assert_eq!(catalog.entries.len(), 2);

        let greeting = catalog.find_entry("greeting").unwrap();
        assert_eq!(greeting.localization("en"), Some(r"Hello, \(user)!"));
        assert_eq!(greeting.arguments, vec![Argument::new("user", "String")]);

        // `arguments` is optional
        assert!(catalog.find_entry("title").unwrap().arguments.is_empty());
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{
            "languages": ["en"],
            "items": [
                {
                    "key": "count",
                    "localizations": { "en": "\\(n) items" },
                    "arguments": [{ "name": "n", "type": "Int" }]
                }
            ]
        }"#;

        let catalog = Catalog::from_str_with_format(json, CatalogFormat::Json).unwrap();
        let entry = &catalog.entries[0];
        assert_eq!(entry.localization("en"), Some(r"\(n) items"));
        assert_eq!(entry.arguments[0].argument_type(), Some(ArgumentType::Int));
    }

    #[test]
    fn test_parse_toml_catalog() {
        let toml = indoc! {r#"
            languages = ["en", "fr"]

            [[items]]
            key = "farewell"
            localizations = { en = 'Bye, \(name)', fr = 'Au revoir, \(name)' }
            arguments = [{ name = "name", type = "String" }]
        "#};

        let catalog = Catalog::from_str_with_format(toml, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.entries[0].localization("fr"), Some(r"Au revoir, \(name)"));
    }

    #[test]
    fn test_unsupported_type_survives_parsing() {
        let yaml = indoc! {r#"
            languages: [en]
            items:
              - key: ratio
                localizations:
                  en: '\(value)'
                arguments:
                  - name: value
                    type: Float
        "#};

        let catalog = Catalog::from_str_with_format(yaml, CatalogFormat::Yaml).unwrap();
        let argument = &catalog.entries[0].arguments[0];
        assert_eq!(argument.r#type, "Float");
        assert_eq!(argument.argument_type(), None);
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = Catalog::from_str_with_format("items: []", CatalogFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().starts_with("yaml parse error"));
    }

    #[test]
    fn test_argument_type_from_str_is_exact() {
        assert_eq!("Double".parse::<ArgumentType>(), Ok(ArgumentType::Double));
        assert!("double".parse::<ArgumentType>().is_err());
        assert!("Bool".parse::<ArgumentType>().is_err());
    }
}
