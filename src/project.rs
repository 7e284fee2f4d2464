//! The validated description of the project being created.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::flavor::Flavor;

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("project name pattern is valid"));

/// Message shown by the interactive name prompt on invalid input.
pub const NAME_RULE: &str =
    "Project name must contain only letters, numbers, hyphens, and underscores.";

pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME.is_match(name)
}

/// Checks a project name against `^[A-Za-z0-9_-]+$`.
///
/// # Errors
/// * `Error::InvalidName` if the name is empty or contains other characters
pub fn validate_project_name(name: &str) -> Result<()> {
    if is_valid_project_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidName { name: name.to_string() })
    }
}

/// A project to generate: which flavor, under which name, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    flavor: Flavor,
    name: String,
    target_path: PathBuf,
}

impl ProjectRequest {
    /// Builds a request for `working_dir/name`.
    ///
    /// # Errors
    /// * `Error::InvalidName` if `name` is not a valid project name
    /// * `Error::TargetExists` if `working_dir/name` already exists
    pub fn new<S: Into<String>>(flavor: Flavor, name: S, working_dir: &Path) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;

        let target_path = working_dir.join(&name);
        if target_path.exists() {
            return Err(Error::TargetExists { target: target_path });
        }

        Ok(Self { flavor, name, target_path })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Directory the project is created in.
    pub fn parent_dir(&self) -> &Path {
        self.target_path.parent().unwrap_or(&self.target_path)
    }
}
