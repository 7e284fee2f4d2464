//! rtpa's main application entry point.
//! Parses the command line, wires the real prompter, runner and renderer
//! into the assistant and reports fatal errors.

use rtpa::{
    assistant::Assistant,
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    runner::SystemRunner,
};

const BANNER: &str = r#"
        *******       ************   ********         **
        *********     ************   **********      *****
        ***    ***         ***       ***    ***     *** ***
        *********          ***       *********     ***   ***
        *******            ***       ******       *********** // Simple HTML/CSS
        ***  ***           ***       ***          *********** // Vite, Angular
        ***   ***          ***       ***          ***     *** // Astro, Nuxt
        ***    ***         ***       ***          ***     *** (@by likeur)
"#;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Prints the welcome banner
/// 2. Captures the working directory the project is created in
/// 3. Runs the assistant with the terminal prompter and the system runner
fn run(args: Args) -> Result<()> {
    println!("{BANNER}");
    println!("✨ Welcome to the Ready Tailwindcss Project Assistant Tool!");

    let working_dir = std::env::current_dir()?;
    let prompter = DialoguerPrompter::new();
    let runner = SystemRunner::new();
    let renderer = MiniJinjaRenderer::new()?;

    let assistant = Assistant::new(&prompter, &runner, &renderer, working_dir, args.options());
    assistant.run(args.flavor_selection())?;
    Ok(())
}
