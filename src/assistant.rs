//! Interactive orchestration of a scaffolding run.
//!
//! A run moves through these stages in order and never goes back:
//! preflight, flavor and name resolution, target validation, generation,
//! git initialization, optional lint setup, optional publishing.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::flavor::Flavor;
use crate::generator::{print_next_steps, Generator};
use crate::lint::setup_linting;
use crate::preflight::{check_environment, ensure_tool};
use crate::project::{validate_project_name, ProjectRequest};
use crate::prompt::Prompter;
use crate::publisher::{PublishOutcome, PublishRequest, Publisher, GITHUB_API_URL};
use crate::renderer::TemplateRenderer;
use crate::runner::CommandRunner;
use crate::vcs::init_repository;

/// Settings that are not asked interactively.
#[derive(Debug, Clone)]
pub struct Options {
    /// Answer "no" to the ESLint/Prettier question without asking
    pub skip_lint: bool,
    /// Answer "no" to the GitHub question without asking
    pub skip_publish: bool,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { skip_lint: false, skip_publish: false, github_api_url: GITHUB_API_URL.to_string() }
    }
}

/// Flavor (and optionally name) chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorSelection {
    pub flavor: Flavor,
    pub name: Option<String>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub project: ProjectRequest,
    pub linting: bool,
    /// `None` when the user declined publishing
    pub publish: Option<PublishOutcome>,
}

/// Drives a scaffolding run.
pub struct Assistant<'a> {
    prompter: &'a dyn Prompter,
    runner: &'a dyn CommandRunner,
    renderer: &'a dyn TemplateRenderer,
    working_dir: PathBuf,
    options: Options,
}

impl<'a> Assistant<'a> {
    pub fn new<P: AsRef<Path>>(
        prompter: &'a dyn Prompter,
        runner: &'a dyn CommandRunner,
        renderer: &'a dyn TemplateRenderer,
        working_dir: P,
        options: Options,
    ) -> Self {
        Self { prompter, runner, renderer, working_dir: working_dir.as_ref().to_path_buf(), options }
    }

    /// Runs every stage.
    ///
    /// # Errors
    /// Preflight, naming and target errors are returned before anything is
    /// written. Generation, git and lint errors are returned as they happen
    /// and leave the partial project on disk. Publishing never fails the run.
    pub fn run(&self, selection: Option<FlavorSelection>) -> Result<RunReport> {
        debug!("Stage: preflight");
        check_environment(self.runner)?;

        debug!("Stage: resolve flavor");
        let (flavor, name_from_args) = match selection {
            Some(FlavorSelection { flavor, name }) => {
                println!("Directly creating a {flavor} as requested by the command line.");
                (flavor, name)
            }
            None => (self.prompter.select_flavor(&Flavor::ALL)?, None),
        };

        debug!("Stage: resolve name");
        let name = self.resolve_name(flavor, name_from_args)?;

        debug!("Stage: validate target");
        let project = ProjectRequest::new(flavor, name, &self.working_dir)?;
        if let Some(tool) = &flavor.profile().required_tool {
            ensure_tool(self.runner, tool)?;
        }

        debug!("Stage: generate {}", project.target_path().display());
        println!("\nCreating project '{}'...", project.name());
        Generator::new(self.runner, self.renderer).generate(&project)?;

        debug!("Stage: init version control");
        init_repository(self.runner, self.renderer, &project)?;

        debug!("Stage: lint setup");
        let linting = self.ask(
            self.options.skip_lint,
            "Do you want to add a linter (ESLint) and a formatter (Prettier) to your project?",
            true,
        )?;
        if linting {
            setup_linting(self.runner, self.renderer, &project)?;
        }

        debug!("Stage: publish");
        let publish = self.publish(&project)?;

        println!("\n✅ Project created successfully!");
        print_next_steps(&project);

        Ok(RunReport { project, linting, publish })
    }

    fn resolve_name(&self, flavor: Flavor, from_args: Option<String>) -> Result<String> {
        match from_args {
            Some(name) => {
                validate_project_name(&name)?;
                println!("Using project name from arguments: '{name}'");
                Ok(name)
            }
            None => self.prompter.project_name(flavor.profile().default_name),
        }
    }

    fn ask(&self, skip: bool, prompt: &str, default: bool) -> Result<bool> {
        if skip {
            debug!("Skipping prompt '{}'", prompt);
            return Ok(false);
        }
        self.prompter.confirm(prompt, default)
    }

    fn publish(&self, project: &ProjectRequest) -> Result<Option<PublishOutcome>> {
        let wanted = self.ask(
            self.options.skip_publish,
            "Do you want to create a GitHub repository for this project and push the code?",
            false,
        )?;
        if !wanted {
            return Ok(None);
        }

        let access_token = self.prompter.secret(
            "Please enter your GitHub Personal Access Token (PAT). (Requires \"repo\" permission)",
        )?;
        let is_private = self.prompter.confirm("Do you want the repository to be private?", true)?;

        let request = PublishRequest {
            project_name: project.name().to_string(),
            target_path: project.target_path().to_path_buf(),
            access_token,
            is_private,
        };

        let publisher = Publisher::new(self.options.github_api_url.as_str(), self.runner);
        Ok(Some(publisher.publish(&request)))
    }
}
