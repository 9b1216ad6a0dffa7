#![forbid(unsafe_code)]
//! Compile a multilingual string catalog into localization artifacts.
//!
//! A catalog declares the project languages and a list of entries. Each entry
//! has one template per language and an optional list of typed arguments,
//! referenced in the templates as `\(name)`. From it langgen generates:
//!
//! - one Apple `.strings` table per language, where placeholders are rewritten
//!   to positional specifiers (`\(user)` → `%1$@`);
//! - one Swift module with a typed accessor per entry.
//!
//! The whole catalog is validated before anything is generated. A catalog
//! with a missing translation, an unsupported argument type, or a reference to
//! an undeclared argument produces no output at all.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langgen::{Catalog, Generator, GeneratorOptions, traits::Artifact};
//!
//! let catalog = Catalog::read_from("langgen.yml", None)?;
//! let generator = Generator::new(&catalog, GeneratorOptions::default())?;
//!
//! for table in generator.tables() {
//!     table.write_to(generator.table_path("Resources", &table.language))?;
//! }
//! generator.accessor_module().write_to(generator.module_path("Sources"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Catalog
//!
//! ```yaml
//! languages: [en, ja]
//! items:
//!   - key: greeting
//!     localizations:
//!       en: "Hello, \\(user)!"
//!       ja: "こんにちは、\\(user)さん！"
//!     arguments:
//!       - name: user
//!         type: String
//! ```
//!
//! Supported argument types are `String`, `Int` and `Double`.

pub mod error;
pub mod formats;
pub mod generator;
pub mod placeholder;
pub mod rewrite;
pub mod signature;
pub mod specifier;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export most used types for easy consumption
pub use crate::{
    error::{Error, ValidationError},
    formats::{AccessorModule, CatalogFormat, Pair, StringsTable, infer_format_from_extension},
    generator::{AccessorDescriptor, Artifacts, Generator, GeneratorOptions, generate},
    placeholder::{Placeholder, extract_placeholders},
    types::{Argument, ArgumentType, Catalog, Entry},
    validation::{ValidatedCatalog, ValidatedEntry, validate},
};
