//! Input and output formats for langgen.
//!
//! Catalogs are read from YAML, JSON, or TOML documents ([`CatalogFormat`]).
//! Generated artifacts are Apple `.strings` tables ([`strings`]) and a Swift
//! accessor module ([`swift`]).

pub mod strings;
pub mod swift;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

pub use strings::{Pair, StringsTable};
pub use swift::AccessorModule;

use crate::Error;

/// Serialization formats a catalog can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// YAML document (`.yml`, `.yaml`). The default catalog format.
    Yaml,
    /// JSON document (`.json`).
    Json,
    /// TOML document (`.toml`).
    Toml,
}

/// Implements [`std::fmt::Display`] for [`CatalogFormat`].
///
/// # Example
/// ```rust
/// use langgen::formats::CatalogFormat;
/// assert_eq!(CatalogFormat::Yaml.to_string(), "yaml");
/// assert_eq!(CatalogFormat::Toml.to_string(), "toml");
/// ```
impl Display for CatalogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFormat::Yaml => write!(f, "yaml"),
            CatalogFormat::Json => write!(f, "json"),
            CatalogFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`CatalogFormat`].
///
/// Accepts the following case-insensitive strings:
/// - `"yaml"`, `"yml"` → `CatalogFormat::Yaml`
/// - `"json"` → `CatalogFormat::Json`
/// - `"toml"` → `CatalogFormat::Toml`
///
/// Returns [`crate::error::Error::UnknownFormat`] for unknown strings.
///
/// # Example
/// ```rust
/// use langgen::formats::CatalogFormat;
/// use std::str::FromStr;
/// assert_eq!(CatalogFormat::from_str("YML").unwrap(), CatalogFormat::Yaml);
/// assert!(CatalogFormat::from_str("xml").is_err());
/// ```
impl FromStr for CatalogFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "json" => Ok(CatalogFormat::Json),
            "toml" => Ok(CatalogFormat::Toml),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl CatalogFormat {
    /// Infers the catalog format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        infer_format_from_extension(&path).ok_or_else(|| {
            Error::UnknownFormat(format!(
                "cannot infer catalog format from extension: {:?}",
                path.as_ref().extension()
            ))
        })
    }
}

/// Infers a [`CatalogFormat`] from the file extension of a path, if recognized.
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<CatalogFormat> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_format_display() {
        assert_eq!(CatalogFormat::Yaml.to_string(), "yaml");
        assert_eq!(CatalogFormat::Json.to_string(), "json");
        assert_eq!(CatalogFormat::Toml.to_string(), "toml");
    }

    #[test]
    fn test_catalog_format_from_str() {
        assert_eq!(CatalogFormat::from_str("yaml").unwrap(), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_str("YML").unwrap(), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_str(" json ").unwrap(), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_str("Toml").unwrap(), CatalogFormat::Toml);

        let err = CatalogFormat::from_str("strings").unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(ref s) if s == "strings"));
    }

    #[test]
    fn test_infer_format_from_extension() {
        assert_eq!(
            infer_format_from_extension("langgen.yml"),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(
            infer_format_from_extension("config/strings.yaml"),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(
            infer_format_from_extension("catalog.json"),
            Some(CatalogFormat::Json)
        );
        assert_eq!(
            infer_format_from_extension("catalog.toml"),
            Some(CatalogFormat::Toml)
        );
        assert_eq!(infer_format_from_extension("catalog"), None);
        assert_eq!(infer_format_from_extension("Localizable.strings"), None);
    }

    #[test]
    fn test_from_path_reports_unknown_extension() {
        let err = CatalogFormat::from_path("catalog.txt").unwrap_err();
        assert!(err.to_string().contains("cannot infer catalog format"));
    }
}
