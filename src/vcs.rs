//! Git initialization of the generated project.

use std::path::Path;

use crate::error::Result;
use crate::project::ProjectRequest;
use crate::renderer::TemplateRenderer;
use crate::runner::{CommandRunner, CommandSpec};
use crate::writer;

pub const GITIGNORE_FILE: &str = ".gitignore";

const GITIGNORE_TEMPLATE: &str = include_str!("../templates/gitignore.j2");

/// Renders the `.gitignore` for a project: dependencies, build output and
/// environment files, plus the flavor's own build directories.
pub fn render_gitignore(renderer: &dyn TemplateRenderer, request: &ProjectRequest) -> Result<String> {
    let context = serde_json::json!({
        "extra_entries": request.flavor().profile().gitignore,
    });
    renderer.render(GITIGNORE_TEMPLATE, &context)
}

/// Runs `git init` in the project and writes its `.gitignore`.
///
/// An existing `.gitignore` left by the framework generator is replaced.
pub fn init_repository(
    runner: &dyn CommandRunner,
    renderer: &dyn TemplateRenderer,
    request: &ProjectRequest,
) -> Result<()> {
    println!("🌱 Initializing Git repository...");
    runner.run(&git(request.target_path()).arg("init"))?;

    let gitignore = render_gitignore(renderer, request)?;
    writer::write_file(request.target_path().join(GITIGNORE_FILE), &gitignore)
}

/// `git` invocation rooted at `repo`.
pub fn git(repo: &Path) -> CommandSpec {
    CommandSpec::new("git").current_dir(repo)
}
