use crate::catalog::load_catalog;
use crate::validation::{validate_output_dir, validate_table_name, validate_type_name};
use langgen::{AccessorModule, Generator, GeneratorOptions, StringsTable, traits::Artifact};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub catalog: String,
    pub format: Option<String>,
    pub strings_output_dir: String,
    pub swift_output_dir: String,
    pub table_name: String,
    pub type_name: String,
    /// Compare against the files on disk instead of writing them.
    pub check: bool,
}

/// Validate the catalog and write one `.strings` table per language plus the
/// Swift accessor module.
///
/// Nothing is written unless the whole catalog is valid.
pub fn run_generate_command(opts: GenerateOptions) -> Result<(), String> {
    validate_output_dir(&opts.strings_output_dir)?;
    validate_output_dir(&opts.swift_output_dir)?;
    validate_table_name(&opts.table_name)?;
    validate_type_name(&opts.type_name)?;

    let catalog = load_catalog(&opts.catalog, opts.format.as_deref())?;
    let options = GeneratorOptions {
        table_name: opts.table_name.clone(),
        type_name: opts.type_name.clone(),
    };
    let generator = Generator::new(&catalog, options).map_err(|e| e.to_string())?;

    // Tables are independent per language; collecting keeps declared order.
    let tables: Vec<(PathBuf, StringsTable)> = generator
        .languages()
        .par_iter()
        .filter_map(|language| {
            generator
                .table(language)
                .map(|table| (generator.table_path(&opts.strings_output_dir, language), table))
        })
        .collect();
    let module = generator.accessor_module();
    let module_path = generator.module_path(&opts.swift_output_dir);

    if opts.check {
        return check_outputs(&tables, &module_path, &module);
    }

    for (path, table) in &tables {
        table
            .write_to(path)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), entries = table.pairs.len(), "wrote strings table");
    }
    module
        .write_to(&module_path)
        .map_err(|e| format!("Failed to write {}: {}", module_path.display(), e))?;
    tracing::info!(path = %module_path.display(), accessors = module.accessors.len(), "wrote accessor module");

    println!(
        "Generated {} strings table(s) and {} ({} entries)",
        tables.len(),
        module_path.display(),
        module.accessors.len()
    );
    Ok(())
}

fn check_outputs(
    tables: &[(PathBuf, StringsTable)],
    module_path: &Path,
    module: &AccessorModule,
) -> Result<(), String> {
    let mut stale = Vec::new();
    for (path, table) in tables {
        if !table
            .is_up_to_date(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?
        {
            stale.push(path.display().to_string());
        }
    }
    if !module
        .is_up_to_date(module_path)
        .map_err(|e| format!("Failed to read {}: {}", module_path.display(), e))?
    {
        stale.push(module_path.display().to_string());
    }

    if stale.is_empty() {
        println!("All generated files are up to date");
        Ok(())
    } else {
        Err(format!(
            "Generated files are out of date: {}",
            stale.join(", ")
        ))
    }
}
