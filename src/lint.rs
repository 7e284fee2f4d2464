//! ESLint and Prettier setup for a generated project.

use crate::error::Result;
use crate::project::ProjectRequest;
use crate::renderer::TemplateRenderer;
use crate::runner::{CommandRunner, CommandSpec};
use crate::vcs::GITIGNORE_FILE;
use crate::writer;

pub const LINT_DEPENDENCIES: [&str; 5] =
    ["eslint", "@eslint/js", "globals", "prettier", "eslint-config-prettier"];

const ESLINT_CONFIG: (&str, &str) =
    ("eslint.config.mjs", include_str!("../templates/lint/eslint.config.mjs"));
const PRETTIER_CONFIG: (&str, &str) =
    (".prettierrc.json", include_str!("../templates/lint/prettierrc.json"));
const GITIGNORE_APPEND: &str = include_str!("../templates/lint/gitignore-append");

/// Installs ESLint and Prettier as dev dependencies, writes their
/// configuration and ignores the ESLint cache.
pub fn setup_linting(
    runner: &dyn CommandRunner,
    renderer: &dyn TemplateRenderer,
    request: &ProjectRequest,
) -> Result<()> {
    let root = request.target_path();
    println!("\n🔧 Configuring ESLint and Prettier...");

    println!("📦 Installing ESLint and Prettier...");
    runner.run(
        &CommandSpec::new("npm")
            .args(["install", "-D"])
            .args(LINT_DEPENDENCIES)
            .current_dir(root),
    )?;

    let context = serde_json::json!({ "name": request.name() });
    for (file, template) in [ESLINT_CONFIG, PRETTIER_CONFIG] {
        println!("📝 Creating {file} configuration file...");
        writer::write_file(root.join(file), &renderer.render(template, &context)?)?;
    }

    writer::append_file(root.join(GITIGNORE_FILE), GITIGNORE_APPEND)?;

    println!("✅ ESLint and Prettier have been successfully configured!");
    Ok(())
}
