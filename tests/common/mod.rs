#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::path::Path;

use rtpa::error::{Error, Result};
use rtpa::flavor::Flavor;
use rtpa::project::is_valid_project_name;
use rtpa::prompt::Prompter;
use rtpa::renderer::MiniJinjaRenderer;
use rtpa::runner::{CommandRunner, CommandSpec};

pub fn renderer() -> MiniJinjaRenderer {
    MiniJinjaRenderer::new().unwrap()
}

/// Records every command and fakes the filesystem effects of the real tools.
#[derive(Default)]
pub struct FakeRunner {
    commands: RefCell<Vec<CommandSpec>>,
    probes: RefCell<Vec<CommandSpec>>,
    missing: Vec<String>,
    failing: Vec<String>,
    init_manifest: Option<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probes of `program` report it as not installed.
    pub fn with_missing_tool(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Commands whose line starts with `prefix` exit unsuccessfully.
    pub fn failing_on(mut self, prefix: &str) -> Self {
        self.failing.push(prefix.to_string());
        self
    }

    /// Content `npm init -y` writes instead of a generated manifest.
    pub fn with_init_manifest(mut self, content: &str) -> Self {
        self.init_manifest = Some(content.to_string());
        self
    }

    pub fn lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(CommandSpec::line).collect()
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }

    pub fn probed(&self) -> Vec<String> {
        self.probes.borrow().iter().map(CommandSpec::line).collect()
    }

    fn simulate(&self, command: &CommandSpec) {
        let Some(dir) = command.working_dir() else {
            return;
        };
        let args: Vec<&str> = command.arguments().iter().map(String::as_str).collect();

        match (command.program(), args.as_slice()) {
            ("npm", ["init", "-y"]) => {
                let name = dir.file_name().unwrap().to_string_lossy();
                let manifest = serde_json::json!({
                    "name": name,
                    "version": "1.0.0",
                    "main": "index.js",
                    "scripts": { "test": "echo \"Error: no test specified\" && exit 1" },
                    "license": "ISC"
                });
                let content = self.init_manifest.clone().unwrap_or_else(|| manifest.to_string());
                fs::write(dir.join("package.json"), content).unwrap();
            }
            ("npm", ["create", _, name, ..]) | ("ng", ["new", name, ..]) => {
                let project = dir.join(name);
                fs::create_dir_all(project.join("src")).unwrap();
                fs::write(project.join("package.json"), format!(r#"{{"name": "{name}"}}"#)).unwrap();
                fs::write(project.join(".gitignore"), "node_modules\n").unwrap();
            }
            ("git", ["init"]) => fs::create_dir_all(dir.join(".git")).unwrap(),
            _ => {}
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.commands.borrow_mut().push(command.clone());
        let line = command.line();
        if self.failing.iter().any(|prefix| line.starts_with(prefix.as_str())) {
            return Err(Error::CommandExecution { command: line, stderr: "simulated failure".to_string() });
        }
        self.simulate(command);
        Ok(())
    }

    fn probe(&self, command: &CommandSpec) -> bool {
        self.probes.borrow_mut().push(command.clone());
        !self.missing.iter().any(|program| program == command.program())
    }
}

#[derive(Debug)]
pub enum Answer {
    Flavor(Flavor),
    Name(&'static str),
    Confirm(bool),
    Secret(&'static str),
}

/// Replays scripted answers in order and records the questions asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::new(Vec::new()) }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, question: &str) -> Answer {
        self.asked.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for '{question}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select_flavor(&self, _flavors: &[Flavor]) -> Result<Flavor> {
        match self.next("flavor") {
            Answer::Flavor(flavor) => Ok(flavor),
            other => panic!("expected a flavor answer, got {other:?}"),
        }
    }

    fn project_name(&self, default: &str) -> Result<String> {
        // Like the terminal prompt, keep asking until the input validates.
        loop {
            match self.next(&format!("name (default {default})")) {
                Answer::Name("") => return Ok(default.to_string()),
                Answer::Name(name) if is_valid_project_name(name) => return Ok(name.to_string()),
                Answer::Name(_) => continue,
                other => panic!("expected a name answer, got {other:?}"),
            }
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected a yes/no answer for '{prompt}', got {other:?}"),
        }
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        match self.next(prompt) {
            Answer::Secret(value) => Ok(value.to_string()),
            other => panic!("expected a secret answer for '{prompt}', got {other:?}"),
        }
    }
}

/// Every path under `root`, relative to it.
pub fn tree(root: &Path) -> BTreeSet<String> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            out.insert(path.strip_prefix(root).unwrap().to_string_lossy().into_owned());
            if path.is_dir() {
                walk(root, &path, out);
            }
        }
    }

    let mut out = BTreeSet::new();
    walk(root, root, &mut out);
    out
}
