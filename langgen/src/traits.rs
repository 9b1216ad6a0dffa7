//! Traits shared by the generated artifacts.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// A generated file: rendered in memory first, then written anywhere.
///
/// # Example
///
/// ```rust,no_run
/// use langgen::formats::{Pair, StringsTable};
/// use langgen::traits::Artifact;
///
/// let table = StringsTable {
///     language: "en".to_string(),
///     pairs: vec![Pair::new("greeting %@", "Hello, %1$@!")],
/// };
/// table.write_to("en.lproj/Localizable.strings")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Artifact {
    /// Full file content.
    fn render(&self) -> String;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush().map_err(Error::Io)
    }

    /// Write to a file path, creating missing parent directories.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Whether the file at `path` already holds exactly this content.
    ///
    /// A missing file is reported as out of date rather than as an error.
    fn is_up_to_date<P: AsRef<Path>>(&self, path: P) -> Result<bool, Error> {
        match fs::read_to_string(path) {
            Ok(existing) => Ok(existing == self.render()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
