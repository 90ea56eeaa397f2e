//! rsmib-std: Filesystem loading for rsmib.
//!
//! Wraps the IO-free `rsmib-core` parser with file handling: parsing a
//! MIB by path, locating modules in search directories, and recursively
//! loading a module together with its transitive imports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod loader;

pub use loader::{load_mib_tree, LoadError};
pub use rsmib_core;

use rsmib_core::ast::Module;

/// Parse a single MIB file.
///
/// The file must be UTF-8; the parsed module keeps the path as its
/// position filename.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read (or is not
/// UTF-8) and [`LoadError::Parse`] on a syntax error.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Module, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, "file is not valid UTF-8"),
    })?;
    tracing::debug!(path = %path.display(), "parsing MIB file");
    let module = rsmib_core::parser::parse(&path.to_string_lossy(), &text)?;
    Ok(module)
}

/// Locate the file for a module name in the given directories.
///
/// Directories are tried in order; within each, the candidate filenames
/// are `<module>.mib`, `<module>.txt`, and `<module>` with no extension.
/// The first existing file wins.
#[must_use]
pub fn find_mib_file(module: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in search_dirs {
        for candidate in [
            format!("{module}.mib"),
            format!("{module}.txt"),
            String::from(module),
        ] {
            let path = dir.join(candidate);
            if path.is_file() {
                tracing::debug!(module, path = %path.display(), "resolved module file");
                return Some(path);
            }
        }
    }
    None
}

/// Recursively collect MIB files from a directory.
///
/// Includes files with no extension, or `.mib`, `.txt`, `.my` extensions.
#[must_use]
pub fn collect_mib_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_files_recursive(dir, &mut files);
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_files_recursive(&path, files);
            } else if path.is_file() {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if ext.is_empty()
                    || ext.eq_ignore_ascii_case("mib")
                    || ext.eq_ignore_ascii_case("txt")
                    || ext.eq_ignore_ascii_case("my")
                {
                    files.push(path);
                }
            }
        }
    }
}
