//! Turning a validated catalog into generated artifacts.
//!
//! [`Generator::new`] validates the whole catalog before anything is produced,
//! so a generator only exists for catalogs that can be fully emitted. Every
//! method after that is infallible and deterministic: tables come out in
//! declared language order, rows and accessors in catalog entry order.

use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    formats::{AccessorModule, Pair, StringsTable, swift::escape_identifier},
    types::{ArgumentType, Catalog},
    validation::{ValidatedCatalog, validate},
};

/// Default `.strings` table name (`Localizable.strings`).
pub const DEFAULT_TABLE_NAME: &str = "Localizable";

/// Default name of the generated Swift namespace and file.
pub const DEFAULT_TYPE_NAME: &str = "Localization";

/// Naming options for the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Table name, used for the `.strings` file name and the accessor lookups.
    pub table_name: String,
    /// Top-level Swift type that holds the accessors.
    pub type_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }
}

/// Everything needed to generate one accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDescriptor {
    /// The entry key as written in the catalog.
    pub entry_key: String,
    /// Composite resource key, identical to the table key column.
    pub resource_key: String,
    /// Declared arguments, in declared order.
    pub arguments: Vec<(String, ArgumentType)>,
    /// Bracketed argument names, e.g. `[user, count]`, with Swift keywords
    /// escaped. Used verbatim as the accessor's formatting arguments.
    pub argument_list: String,
    /// Template of the first declared language, shown as documentation.
    pub doc: String,
}

/// All artifacts of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub tables: Vec<StringsTable>,
    pub module: AccessorModule,
}

/// Generates tables and accessors from a catalog that passed validation.
pub struct Generator<'a> {
    catalog: ValidatedCatalog<'a>,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Validates `catalog` and prepares generation.
    ///
    /// Fails with the first violated catalog invariant.
    pub fn new(catalog: &'a Catalog, options: GeneratorOptions) -> Result<Self, Error> {
        let catalog = validate(catalog)?;
        Ok(Self { catalog, options })
    }

    /// Declared languages, in output order.
    pub fn languages(&self) -> &'a [String] {
        self.catalog.languages()
    }

    /// `(resource key, value)` rows of one language, in entry order.
    ///
    /// Returns `None` if `language` is not declared by the catalog.
    pub fn rows(&self, language: &str) -> Option<Vec<(String, String)>> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| {
                entry
                    .localized_value(language)
                    .map(|value| (entry.resource_key(), value))
            })
            .collect()
    }

    /// The `.strings` table of one language.
    pub fn table(&self, language: &str) -> Option<StringsTable> {
        if !self.languages().iter().any(|l| l == language) {
            return None;
        }

        let pairs = self
            .rows(language)?
            .into_iter()
            .map(|(key, value)| Pair { key, value })
            .collect();

        Some(StringsTable {
            language: language.to_string(),
            pairs,
        })
    }

    /// Tables of all declared languages, in declared order.
    pub fn tables(&self) -> Vec<StringsTable> {
        self.languages()
            .iter()
            .filter_map(|language| self.table(language))
            .collect()
    }

    /// One accessor descriptor per entry, in entry order.
    pub fn accessors(&self) -> Vec<AccessorDescriptor> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| AccessorDescriptor {
                entry_key: entry.key().to_string(),
                resource_key: entry.resource_key(),
                arguments: entry
                    .arguments()
                    .iter()
                    .map(|argument| (argument.name.to_string(), argument.argument_type))
                    .collect(),
                argument_list: entry.argument_list_with(escape_identifier),
                doc: entry
                    .templates()
                    .first()
                    .map(|template| template.source().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// The Swift accessor module.
    pub fn accessor_module(&self) -> AccessorModule {
        AccessorModule {
            type_name: self.options.type_name.clone(),
            table_name: self.options.table_name.clone(),
            accessors: self.accessors(),
        }
    }

    /// Every artifact of the catalog.
    pub fn generate(&self) -> Artifacts {
        let artifacts = Artifacts {
            tables: self.tables(),
            module: self.accessor_module(),
        };
        tracing::debug!(
            tables = artifacts.tables.len(),
            accessors = artifacts.module.accessors.len(),
            "generated artifacts"
        );
        artifacts
    }

    /// `<strings_dir>/<language>.lproj/<table>.strings`
    pub fn table_path<P: AsRef<Path>>(&self, strings_dir: P, language: &str) -> PathBuf {
        strings_dir
            .as_ref()
            .join(format!("{}.lproj", language))
            .join(format!("{}.strings", self.options.table_name))
    }

    /// `<swift_dir>/<TypeName>.swift`
    pub fn module_path<P: AsRef<Path>>(&self, swift_dir: P) -> PathBuf {
        swift_dir
            .as_ref()
            .join(format!("{}.swift", self.options.type_name))
    }
}

/// Validates `catalog` and generates all of its artifacts.
pub fn generate(catalog: &Catalog, options: GeneratorOptions) -> Result<Artifacts, Error> {
    Ok(Generator::new(catalog, options)?.generate())
}
