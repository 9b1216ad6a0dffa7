use crate::validation::{validate_catalog_format, validate_file_path};
use langgen::Catalog;

/// Read a catalog file, with an optional explicit format overriding the
/// extension.
pub fn load_catalog(path: &str, format: Option<&str>) -> Result<Catalog, String> {
    validate_file_path(path)?;
    let format = format.map(validate_catalog_format).transpose()?;

    let catalog = Catalog::read_from(path, format)
        .map_err(|e| format!("Failed to read catalog {}: {}", path, e))?;
    tracing::info!(
        path,
        languages = catalog.languages.len(),
        entries = catalog.entries.len(),
        "read catalog"
    );
    Ok(catalog)
}
