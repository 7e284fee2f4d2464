//! Filesystem side of template processing: writing rendered files, creating
//! directories and patching the project's `package.json`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Creates a directory and all of its missing parents.
///
/// # Errors
/// * `Error::DirectoryCreate` if the directory cannot be created
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path)
        .map_err(|source| Error::DirectoryCreate { path: path.to_path_buf(), source })
}

/// Writes `content` to `path`, replacing any existing file.
///
/// Missing parent directories are created first.
///
/// # Errors
/// * `Error::DirectoryCreate` if a parent directory cannot be created
/// * `Error::FileWrite` if the file cannot be written
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(|source| Error::FileWrite { path: path.to_path_buf(), source })
}

/// Appends `content` to `path`, creating the file if needed.
pub fn append_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Appending to file: {}", path.display());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| Error::FileWrite { path: path.to_path_buf(), source })
}

/// Adds (or replaces) a script entry in a `package.json` file.
///
/// Key order of the existing manifest is preserved and the file is rewritten
/// with 2-space indentation.
///
/// # Errors
/// * `Error::PackageManifest` if the manifest cannot be read, is not a JSON
///   object, or has a `scripts` field that is not an object
/// * `Error::FileWrite` if the patched manifest cannot be written back
pub fn add_package_script<P: AsRef<Path>>(package_json: P, name: &str, command: &str) -> Result<()> {
    let path = package_json.as_ref();
    let manifest_error =
        |reason: String| Error::PackageManifest { path: path.to_path_buf(), reason };

    let raw = fs::read_to_string(path).map_err(|e| manifest_error(e.to_string()))?;
    let mut manifest: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| manifest_error(e.to_string()))?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| manifest_error("top-level value is not an object".to_string()))?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
    if scripts.is_null() {
        *scripts = serde_json::Value::Object(serde_json::Map::new());
    }
    let scripts = scripts
        .as_object_mut()
        .ok_or_else(|| manifest_error("\"scripts\" is not an object".to_string()))?;

    scripts.insert(name.to_string(), serde_json::Value::String(command.to_string()));

    let mut content =
        serde_json::to_string_pretty(&manifest).map_err(|e| manifest_error(e.to_string()))?;
    content.push('\n');
    write_file(path, &content)
}
