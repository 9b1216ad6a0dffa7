use langgen_cli::load_catalog;
use langgen_cli::validation::{
    validate_catalog_format, validate_file_path, validate_output_dir, validate_table_name,
    validate_type_name,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_file_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("langgen.yml");
    fs::write(&test_file, "languages: [en]\n").unwrap();

    assert!(validate_file_path(test_file.to_str().unwrap()).is_ok());
}

#[test]
fn test_validate_file_path_not_exists() {
    let result = validate_file_path("nonexistent_catalog.yml");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("File does not exist"));
}

#[test]
fn test_validate_file_path_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = validate_file_path(temp_dir.path().to_str().unwrap());
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Path is not a file"));
}

#[test]
fn test_validate_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    // Existing directory
    assert!(validate_output_dir(temp_dir.path().to_str().unwrap()).is_ok());

    // Not yet created: allowed, and not created by validation
    let nested = temp_dir.path().join("nested").join("out");
    assert!(validate_output_dir(nested.to_str().unwrap()).is_ok());
    assert!(!temp_dir.path().join("nested").exists());

    // A file is not a directory
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();
    let error = validate_output_dir(file.to_str().unwrap()).unwrap_err();
    assert!(error.contains("not a directory"));

    assert!(validate_output_dir("").is_err());
}

#[test]
fn test_validate_catalog_format_values() {
    for format in ["yaml", "yml", "json", "toml", "YAML"] {
        assert!(
            validate_catalog_format(format).is_ok(),
            "Format '{}' should be valid",
            format
        );
    }
    for format in ["", "xml", "strings"] {
        assert!(
            validate_catalog_format(format).is_err(),
            "Format '{}' should be invalid",
            format
        );
    }
}

#[test]
fn test_validate_names() {
    assert!(validate_table_name("Localizable").is_ok());
    assert!(validate_table_name("../escape").is_err());
    assert!(validate_type_name("Localization").is_ok());
    assert!(validate_type_name("").is_err());
}

#[test]
fn test_load_catalog_toml() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.toml");
    fs::write(
        &catalog_path,
        r#"languages = ["en"]

[[items]]
key = "title"
localizations = { en = "Title" }
"#,
    )
    .unwrap();

    let catalog = load_catalog(catalog_path.to_str().unwrap(), None).unwrap();
    assert_eq!(catalog.languages, vec!["en"]);
    assert_eq!(catalog.entries[0].key, "title");
}

#[test]
fn test_load_catalog_rejects_unknown_format_flag() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("langgen.yml");
    fs::write(&catalog_path, "languages: [en]\n").unwrap();

    let error = load_catalog(catalog_path.to_str().unwrap(), Some("xml")).unwrap_err();
    assert!(error.contains("Unsupported catalog format"));
}
