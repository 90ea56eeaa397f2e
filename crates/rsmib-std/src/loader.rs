//! Recursive MIB tree loading.
//!
//! Given a root MIB file and a list of search directories, parses the
//! root module, discovers its IMPORTS, locates each imported module on
//! disk, and parses the transitive closure depth-first. Modules are
//! deduplicated by their parsed (canonical) name, which also makes
//! import cycles terminate.

use std::collections::BTreeMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

use rsmib_core::ast::Module;
use rsmib_core::parser::ParseError;
use thiserror::Error;

/// Error loading a MIB file or tree.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
    /// The file did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An imported module has no file in any search directory.
    #[error(
        "module `{missing}` imported by `{importer}` not found in search directories {search_dirs:?}"
    )]
    MissingDependency {
        /// The module whose IMPORTS named the missing one.
        importer: String,
        /// The module that could not be located.
        missing: String,
        /// The directories that were searched, in order.
        search_dirs: Vec<PathBuf>,
    },
}

/// Parse `root` and every module it transitively imports.
///
/// The root file's own directory is searched first, then each entry of
/// `search_dirs` in order. Returns the parsed modules keyed by module
/// name.
///
/// # Errors
///
/// Fails on the first unreadable file, parse error, or import that
/// cannot be located; see [`LoadError`].
pub fn load_mib_tree(
    root: &Path,
    search_dirs: &[PathBuf],
) -> Result<BTreeMap<String, Module>, LoadError> {
    let root = absolutize(root)?;

    let mut effective_dirs = Vec::with_capacity(search_dirs.len() + 1);
    if let Some(parent) = root.parent() {
        effective_dirs.push(parent.to_path_buf());
    }
    effective_dirs.extend(search_dirs.iter().cloned());

    let mut modules = BTreeMap::new();
    load_recursive(&root, &effective_dirs, &mut modules)?;
    Ok(modules)
}

fn load_recursive(
    path: &Path,
    search_dirs: &[PathBuf],
    modules: &mut BTreeMap<String, Module>,
) -> Result<(), LoadError> {
    let module = crate::parse_file(path)?;
    let name = module.name.as_str().to_owned();

    // Dedup on the canonical name from the parsed module, not the
    // filename; this is what breaks import cycles.
    if modules.contains_key(&name) {
        return Ok(());
    }
    tracing::debug!(module = %name, path = %path.display(), "loaded MIB module");

    let dependencies: Vec<String> = module
        .body
        .imports
        .iter()
        .map(|import| import.module.as_str().to_owned())
        .collect();
    modules.insert(name.clone(), module);

    for dependency in dependencies {
        if modules.contains_key(&dependency) {
            continue;
        }
        let Some(dependency_path) = crate::find_mib_file(&dependency, search_dirs) else {
            return Err(LoadError::MissingDependency {
                importer: name,
                missing: dependency,
                search_dirs: search_dirs.to_vec(),
            });
        };
        load_recursive(&dependency_path, search_dirs, modules)?;
    }
    Ok(())
}

/// Resolve a path against the current directory without touching the
/// filesystem (no symlink resolution).
fn absolutize(path: &Path) -> Result<PathBuf, LoadError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}
