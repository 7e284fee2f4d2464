//! Command-line interface implementation for rtpa.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgGroup, Parser};

use crate::assistant::{FlavorSelection, Options};
use crate::flavor::Flavor;
use crate::publisher::GITHUB_API_URL;

/// Command-line arguments structure for rtpa.
///
/// Each flavor flag optionally takes the project name as its value; without
/// any flavor flag the flavor is chosen from an interactive menu.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rtpa: ready Tailwind CSS project assistant",
    long_about = None,
    group(ArgGroup::new("flavor").multiple(false))
)]
pub struct Args {
    /// Create a simple HTML/CSS project built with the Tailwind CLI
    #[arg(long, value_name = "NAME", num_args = 0..=1, group = "flavor")]
    pub simple: Option<Option<String>>,

    /// Create a Vite (vanilla JS) project
    #[arg(long, visible_alias = "js", value_name = "NAME", num_args = 0..=1, group = "flavor")]
    pub vite: Option<Option<String>>,

    /// Create an Angular project
    #[arg(long, value_name = "NAME", num_args = 0..=1, group = "flavor")]
    pub angular: Option<Option<String>>,

    /// Create an Astro project
    #[arg(long, value_name = "NAME", num_args = 0..=1, group = "flavor")]
    pub astro: Option<Option<String>>,

    /// Create a Nuxt project
    #[arg(long, value_name = "NAME", num_args = 0..=1, group = "flavor")]
    pub nuxt: Option<Option<String>>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not offer to set up ESLint and Prettier
    #[arg(long)]
    pub skip_lint: bool,

    /// Do not offer to create a GitHub repository
    #[arg(long)]
    pub skip_publish: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "RTPA_GITHUB_API_URL", default_value = GITHUB_API_URL, hide = true)]
    pub github_api_url: String,
}

impl Args {
    /// Flavor requested through a flag, with the name given after it if any.
    pub fn flavor_selection(&self) -> Option<FlavorSelection> {
        [
            (Flavor::Plain, &self.simple),
            (Flavor::Vite, &self.vite),
            (Flavor::Angular, &self.angular),
            (Flavor::Astro, &self.astro),
            (Flavor::Nuxt, &self.nuxt),
        ]
        .into_iter()
        .find_map(|(flavor, flag)| {
            flag.as_ref().map(|name| FlavorSelection { flavor, name: name.clone() })
        })
    }

    pub fn options(&self) -> Options {
        Options {
            skip_lint: self.skip_lint,
            skip_publish: self.skip_publish,
            github_api_url: self.github_api_url.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help or version
/// * With status code 1 on any other argument error
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}
