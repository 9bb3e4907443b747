//! Expected documents stored as files next to the tests.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::JsonAssertionError;

/// `tests/resources` of the crate whose tests are running.
///
/// Cargo sets `CARGO_MANIFEST_DIR` for the package under test; outside Cargo the
/// current directory stands in for it.
pub fn default_resource_dir() -> PathBuf {
    env::var_os("CARGO_MANIFEST_DIR")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join("tests")
        .join("resources")
}

/// Resolves `name` inside `dir`, ignoring one leading `/`.
pub fn resource_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name.strip_prefix('/').unwrap_or(name))
}

/// Reads the resource `name` from `dir`.
///
/// # Errors
///
/// Returns [`JsonAssertionError::Resource`] when the file cannot be read.
pub fn load_resource(dir: &Path, name: &str) -> Result<String, JsonAssertionError> {
    let path = resource_path(dir, name);

    fs::read_to_string(&path).map_err(|source| JsonAssertionError::Resource { path, source })
}
