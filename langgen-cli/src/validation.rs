use langgen::{CatalogFormat, validation::is_identifier};
use std::path::Path;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    if !path_obj.metadata().map(|m| m.is_file()).unwrap_or(false) {
        return Err(format!("Cannot read file: {}", path));
    }

    Ok(())
}

/// Validate an output directory.
///
/// The directory may not exist yet (it is created when writing), but if the
/// path exists it must be a directory.
pub fn validate_output_dir(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("Output directory cannot be empty".to_string());
    }

    let path_obj = Path::new(path);
    if path_obj.exists() && !path_obj.is_dir() {
        return Err(format!("Output path is not a directory: {}", path));
    }

    Ok(())
}

/// Validate catalog format string
pub fn validate_catalog_format(format: &str) -> Result<CatalogFormat, String> {
    if format.trim().is_empty() {
        return Err("Format cannot be empty".to_string());
    }

    format.parse::<CatalogFormat>().map_err(|_| {
        format!(
            "Unsupported catalog format: {}. Supported formats: yaml, json, toml",
            format
        )
    })
}

/// Validate the `.strings` table name (used as a file name).
pub fn validate_table_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Table name cannot be empty".to_string());
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(format!(
            "Invalid table name: {}. Expected a plain file name without extension",
            name
        ));
    }

    Ok(())
}

/// Validate the generated Swift type name.
pub fn validate_type_name(name: &str) -> Result<(), String> {
    if !is_identifier(name) {
        return Err(format!(
            "Invalid type name: {}. Expected a Swift identifier",
            name
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_catalog_format() {
        assert_eq!(validate_catalog_format("yaml"), Ok(CatalogFormat::Yaml));
        assert_eq!(validate_catalog_format("JSON"), Ok(CatalogFormat::Json));
        assert!(validate_catalog_format("").is_err());
        assert!(
            validate_catalog_format("strings")
                .unwrap_err()
                .contains("Unsupported catalog format")
        );
    }

    #[test]
    fn test_validate_table_name() {
        assert!(validate_table_name("Localizable").is_ok());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("a/b").is_err());
        assert!(validate_table_name("..").is_err());
    }

    #[test]
    fn test_validate_type_name() {
        assert!(validate_type_name("Localization").is_ok());
        assert!(validate_type_name("L10n").is_ok());
        assert!(validate_type_name("10n").is_err());
        assert!(validate_type_name("My-Strings").is_err());
    }
}
