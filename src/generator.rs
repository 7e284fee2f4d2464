//! Project generation.
//! A single [`Generator`] scaffolds every flavor; what differs between
//! flavors lives in their [`FlavorProfile`].

use log::{debug, warn};

use crate::error::Result;
use crate::flavor::{FlavorProfile, ScaffoldLocation, TemplateFile, TAILWIND_IMPORT};
use crate::project::ProjectRequest;
use crate::renderer::TemplateRenderer;
use crate::runner::{CommandRunner, CommandSpec};
use crate::writer;

/// Scaffolds projects and wires Tailwind CSS into them.
pub struct Generator<'a> {
    runner: &'a dyn CommandRunner,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(runner: &'a dyn CommandRunner, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { runner, renderer }
    }

    /// Generates the project described by `request`.
    ///
    /// # Flow
    /// 1. Runs the flavor's scaffolding command
    /// 2. Installs Tailwind CSS and its build integration
    /// 3. Writes the integration config file
    /// 4. Writes the stylesheet importing Tailwind CSS
    /// 5. Writes the templated entry page
    /// 6. Adds the `package.json` start script (plain flavor)
    /// 7. Runs the flavor's post-generation commands
    ///
    /// # Errors
    /// Any command or file failure aborts generation and leaves the partially
    /// generated project in place. A failed `package.json` patch is only
    /// reported.
    pub fn generate(&self, request: &ProjectRequest) -> Result<()> {
        let profile = request.flavor().profile();
        println!("\n📦 Creating {} '{}'...", profile.label, request.name());

        self.scaffold(profile, request)?;
        self.install_dependencies(profile, request)?;

        for dir in profile.directories {
            writer::create_dir(request.target_path().join(dir))?;
        }

        if let Some(config) = &profile.config {
            println!("📝 Creating {}...", config.path);
            self.write_template(config, request)?;
        }

        writer::write_file(request.target_path().join(profile.stylesheet), TAILWIND_IMPORT)?;
        println!("✅ Tailwind CSS import added to {}.", profile.stylesheet);

        if let Some(shell) = &profile.shell_page {
            self.write_template(shell, request)?;
        }
        self.write_template(&profile.entry_page, request)?;

        if let Some(script) = &profile.start_script {
            let package_json = request.target_path().join("package.json");
            match writer::add_package_script(&package_json, script.name, script.command) {
                Ok(()) => println!(
                    "✅ The script \"{}\" has been added to your package.json.",
                    script.name
                ),
                Err(e) => {
                    warn!("Skipping start script: {}", e);
                    eprintln!("❌ Error modifying package.json: {e}");
                }
            }
        }

        for command in profile.post_commands {
            if let Some((program, args)) = command.split_first() {
                let spec = CommandSpec::new(*program)
                    .args(args.iter().copied())
                    .current_dir(request.target_path());
                self.runner.run(&spec)?;
            }
        }

        println!("\n✅ {} created successfully!", profile.label);
        Ok(())
    }

    /// Renders a flavor template for the given project.
    pub fn render(&self, file: &TemplateFile, request: &ProjectRequest) -> Result<String> {
        let context = serde_json::json!({
            "name": request.name(),
            "flavor": request.flavor().profile().tag,
        });
        self.renderer.render(file.template, &context)
    }

    fn write_template(&self, file: &TemplateFile, request: &ProjectRequest) -> Result<()> {
        let content = self.render(file, request)?;
        writer::write_file(request.target_path().join(file.path), &content)
    }

    fn scaffold(&self, profile: &FlavorProfile, request: &ProjectRequest) -> Result<()> {
        let workdir = match profile.scaffold.location {
            ScaffoldLocation::Target => {
                writer::create_dir(request.target_path())?;
                request.target_path()
            }
            ScaffoldLocation::Parent => request.parent_dir(),
        };
        debug!("Scaffolding {:?} in {}", profile.flavor, workdir.display());

        let spec = CommandSpec::new(profile.scaffold.program)
            .args(profile.scaffold_args(request.name()))
            .current_dir(workdir);
        self.runner.run(&spec)
    }

    fn install_dependencies(&self, profile: &FlavorProfile, request: &ProjectRequest) -> Result<()> {
        println!("🔧 Installing development dependencies ({})...", profile.dev_dependencies.join(", "));
        let spec = CommandSpec::new("npm")
            .args(["install", "-D"])
            .args(profile.dev_dependencies.iter().copied())
            .args(profile.install_flags.iter().copied())
            .current_dir(request.target_path());
        self.runner.run(&spec)
    }
}

/// Prints how to start working on the generated project.
pub fn print_next_steps(request: &ProjectRequest) {
    let steps = &request.flavor().profile().next_steps;
    println!("🚀 To get started, follow these steps:");
    println!("1. Navigate to the folder: `cd {}`", request.name());
    println!("2. Launch the development server: {}", steps.run);
    println!("3. {}", steps.open);
}
