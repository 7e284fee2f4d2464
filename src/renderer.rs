//! Template rendering for generated files.
//! Entry pages, framework configs and lint configs are MiniJinja templates
//! embedded in the binary; see the `templates/` directory.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Name under which the shared landing-page body is registered. Entry page
/// templates pull it in with `{% include "hero.html" %}`.
pub const HERO_PARTIAL: &str = "hero.html";

const HERO_TEMPLATE: &str = include_str!("../templates/hero.html");

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance with the shared partials registered
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer. Undefined variables are errors so that a
    /// missing value can never leave a placeholder in a generated file.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template(HERO_PARTIAL, HERO_TEMPLATE)?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::Render` if the template is malformed or references a
    ///   variable missing from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}
