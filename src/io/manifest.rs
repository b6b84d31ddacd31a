//! Line-oriented manifest files listing selected images and produced tensors

use crate::io::error::{Result, WithPath};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one entry per line, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_manifest<I>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let file = File::create(path).with_path(path, "create manifest")?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        writeln!(writer, "{entry}").with_path(path, "write manifest")?;
    }

    writer.flush().with_path(path, "flush manifest")
}

/// Read the entries of a manifest, one per non-empty line
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).with_path(path, "read manifest")?;
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
