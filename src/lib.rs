//! rtpa scaffolds front-end projects with Tailwind CSS already wired in.
//! It drives the ecosystem's own generators (npm, Vite, Angular, Astro, Nuxt),
//! lays down the Tailwind configuration and a landing page, initializes git and
//! can publish the result to a new GitHub repository.

/// Orchestration of a complete scaffolding run
pub mod assistant;

/// Command-line interface module for the rtpa application
pub mod cli;

/// Error types and handling for the rtpa application
pub mod error;

/// Project flavors and their generation profiles
pub mod flavor;

/// Flavor-independent project generation
pub mod generator;

/// ESLint and Prettier setup
pub mod lint;

/// Logging setup
pub mod logger;

/// Startup checks for required external tools
pub mod preflight;

/// Project name validation and the validated project request
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// GitHub repository creation and initial push
pub mod publisher;

/// MiniJinja rendering of the embedded templates
pub mod renderer;

/// External command execution
pub mod runner;

/// Git initialization of generated projects
pub mod vcs;

/// File writing and package.json patching
pub mod writer;
