//! Project flavors and the configuration record that drives generation for
//! each of them.

use std::fmt;

/// Placeholder replaced by the project name in scaffold arguments.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Content of every generated stylesheet.
pub const TAILWIND_IMPORT: &str = "@import \"tailwindcss\";";

/// Project template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Plain HTML/CSS page compiled with the Tailwind CLI
    Plain,
    /// Vite vanilla JavaScript project
    Vite,
    /// Angular application
    Angular,
    /// Astro site
    Astro,
    /// Nuxt application
    Nuxt,
}

impl Flavor {
    /// All flavors, in menu order.
    pub const ALL: [Flavor; 5] =
        [Flavor::Plain, Flavor::Vite, Flavor::Angular, Flavor::Astro, Flavor::Nuxt];

    pub fn profile(self) -> &'static FlavorProfile {
        match self {
            Flavor::Plain => &PLAIN,
            Flavor::Vite => &VITE,
            Flavor::Angular => &ANGULAR,
            Flavor::Astro => &ASTRO,
            Flavor::Nuxt => &NUXT,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().label)
    }
}

/// Where the scaffolding command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldLocation {
    /// The project directory is created first and the command runs inside it.
    Target,
    /// The command runs in the working directory and creates the project
    /// directory itself.
    Parent,
}

/// External command that produces the project skeleton.
#[derive(Debug)]
pub struct Scaffold {
    pub program: &'static str,
    /// Arguments; `{name}` is replaced by the project name.
    pub args: &'static [&'static str],
    pub location: ScaffoldLocation,
}

/// A file rendered from an embedded template, relative to the project root.
#[derive(Debug)]
pub struct TemplateFile {
    pub path: &'static str,
    pub template: &'static str,
}

/// A `package.json` script added after scaffolding.
#[derive(Debug)]
pub struct PackageScript {
    pub name: &'static str,
    pub command: &'static str,
}

/// Tool a flavor needs on top of the common preflight set.
#[derive(Debug)]
pub struct RequiredTool {
    pub name: &'static str,
    pub probe: &'static [&'static str],
    pub hint: &'static str,
}

/// Instructions printed once the project is ready.
#[derive(Debug)]
pub struct NextSteps {
    pub run: &'static str,
    pub open: &'static str,
}

/// Everything that differs between flavors.
#[derive(Debug)]
pub struct FlavorProfile {
    pub flavor: Flavor,
    /// Short name shown on the landing page
    pub tag: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default_name: &'static str,
    pub required_tool: Option<RequiredTool>,
    pub scaffold: Scaffold,
    pub dev_dependencies: &'static [&'static str],
    pub install_flags: &'static [&'static str],
    /// Directories created after scaffolding
    pub directories: &'static [&'static str],
    /// Tailwind build integration (bundler plugin or PostCSS config)
    pub config: Option<TemplateFile>,
    pub stylesheet: &'static str,
    pub entry_page: TemplateFile,
    /// Host document, for frameworks whose entry component has no `<title>`
    pub shell_page: Option<TemplateFile>,
    pub start_script: Option<PackageScript>,
    /// Commands run in the project once every file is in place
    pub post_commands: &'static [&'static [&'static str]],
    pub gitignore: &'static [&'static str],
    pub next_steps: NextSteps,
}

impl FlavorProfile {
    /// Scaffold arguments with the project name substituted.
    pub fn scaffold_args(&self, name: &str) -> Vec<String> {
        self.scaffold.args.iter().map(|arg| arg.replace(NAME_PLACEHOLDER, name)).collect()
    }
}

const PLAIN: FlavorProfile = FlavorProfile {
    flavor: Flavor::Plain,
    tag: "simple html",
    label: "Simple HTML/CSS Project + Tailwind CSS",
    description: "Creates a basic HTML/CSS project with Tailwind CSS via CLI.",
    default_name: "my-simple-tailwind-project",
    required_tool: None,
    scaffold: Scaffold { program: "npm", args: &["init", "-y"], location: ScaffoldLocation::Target },
    dev_dependencies: &["tailwindcss", "@tailwindcss/cli"],
    install_flags: &[],
    directories: &["css", "img"],
    config: None,
    stylesheet: "css/input.css",
    entry_page: TemplateFile {
        path: "index.html",
        template: include_str!("../templates/plain/index.html.j2"),
    },
    shell_page: None,
    start_script: Some(PackageScript {
        name: "start",
        command: "npx @tailwindcss/cli -i ./css/input.css -o ./css/output.css --watch",
    }),
    post_commands: &[&["npx", "@tailwindcss/cli", "-i", "./css/input.css", "-o", "./css/output.css"]],
    gitignore: &[],
    next_steps: NextSteps {
        run: "`npm run start`",
        open: "Open your `index.html` in the browser and start coding!",
    },
};

const VITE: FlavorProfile = FlavorProfile {
    flavor: Flavor::Vite,
    tag: "vite",
    label: "Vite js (Vanilla JS) Project + Tailwind CSS",
    description: "Creates a modern project with Vite.js and configures Tailwind CSS via its Vite plugin.",
    default_name: "my-vite-tailwind-project",
    required_tool: None,
    scaffold: Scaffold {
        program: "npm",
        args: &["create", "vite@latest", NAME_PLACEHOLDER, "--", "--template", "vanilla", "--no-interactive"],
        location: ScaffoldLocation::Parent,
    },
    dev_dependencies: &["tailwindcss", "@tailwindcss/vite"],
    install_flags: &[],
    directories: &[],
    config: Some(TemplateFile {
        path: "vite.config.js",
        template: include_str!("../templates/vite/vite.config.js"),
    }),
    stylesheet: "src/style.css",
    entry_page: TemplateFile {
        path: "index.html",
        template: include_str!("../templates/vite/index.html.j2"),
    },
    shell_page: None,
    start_script: None,
    post_commands: &[],
    gitignore: &[],
    next_steps: NextSteps {
        run: "`npm run dev`",
        open: "Open your browser at the address indicated by Vite (usually `http://localhost:5173/`).",
    },
};

const ANGULAR: FlavorProfile = FlavorProfile {
    flavor: Flavor::Angular,
    tag: "angular",
    label: "Angular Project + Tailwind CSS v4",
    description: "Creates an Angular project and integrates Tailwind CSS v4 through PostCSS.",
    default_name: "my-angular-tailwind-project",
    required_tool: Some(RequiredTool {
        name: "Angular CLI",
        probe: &["ng", "version"],
        hint: "Please install it first with `npm install -g @angular/cli`, then run this tool again.",
    }),
    scaffold: Scaffold {
        program: "ng",
        args: &[
            "new",
            NAME_PLACEHOLDER,
            "--style=css",
            "--inline-style",
            "--skip-git",
            "--package-manager=npm",
            "--defaults",
        ],
        location: ScaffoldLocation::Parent,
    },
    dev_dependencies: &["tailwindcss", "@tailwindcss/postcss", "postcss"],
    install_flags: &["--force"],
    directories: &[],
    config: Some(TemplateFile {
        path: ".postcssrc.json",
        template: include_str!("../templates/angular/postcssrc.json"),
    }),
    stylesheet: "src/styles.css",
    entry_page: TemplateFile {
        path: "src/app/app.html",
        template: include_str!("../templates/angular/app.html.j2"),
    },
    shell_page: Some(TemplateFile {
        path: "src/index.html",
        template: include_str!("../templates/angular/index.html.j2"),
    }),
    start_script: None,
    post_commands: &[],
    gitignore: &["/.angular"],
    next_steps: NextSteps {
        run: "`npm run start` or `ng serve`",
        open: "Open your browser at the address indicated by Angular (usually `http://localhost:4200/`).",
    },
};

const ASTRO: FlavorProfile = FlavorProfile {
    flavor: Flavor::Astro,
    tag: "astro",
    label: "Astro Project + Tailwind CSS",
    description: "Creates a minimal Astro site and configures Tailwind CSS via its Vite plugin.",
    default_name: "my-astro-tailwind-project",
    required_tool: None,
    scaffold: Scaffold {
        program: "npm",
        args: &[
            "create",
            "astro@latest",
            NAME_PLACEHOLDER,
            "--",
            "--template",
            "minimal",
            "--install",
            "--no-git",
            "--skip-houston",
            "--yes",
        ],
        location: ScaffoldLocation::Parent,
    },
    dev_dependencies: &["tailwindcss", "@tailwindcss/vite"],
    install_flags: &[],
    directories: &[],
    config: Some(TemplateFile {
        path: "astro.config.mjs",
        template: include_str!("../templates/astro/astro.config.mjs"),
    }),
    stylesheet: "src/styles/global.css",
    entry_page: TemplateFile {
        path: "src/pages/index.astro",
        template: include_str!("../templates/astro/index.astro.j2"),
    },
    shell_page: None,
    start_script: None,
    post_commands: &[],
    gitignore: &["/.astro"],
    next_steps: NextSteps {
        run: "`npm run dev`",
        open: "Open your browser at the address indicated by Astro (usually `http://localhost:4321/`).",
    },
};

const NUXT: FlavorProfile = FlavorProfile {
    flavor: Flavor::Nuxt,
    tag: "nuxt",
    label: "Nuxt Project + Tailwind CSS",
    description: "Creates a Nuxt application and configures Tailwind CSS via its Vite plugin.",
    default_name: "my-nuxt-tailwind-project",
    required_tool: None,
    scaffold: Scaffold {
        program: "npm",
        args: &[
            "create",
            "nuxt@latest",
            NAME_PLACEHOLDER,
            "--",
            "--packageManager",
            "npm",
            "--gitInit",
            "false",
            "--no-modules",
            "--template",
            "minimal",
        ],
        location: ScaffoldLocation::Parent,
    },
    dev_dependencies: &["tailwindcss", "@tailwindcss/vite"],
    install_flags: &[],
    directories: &[],
    config: Some(TemplateFile {
        path: "nuxt.config.ts",
        template: include_str!("../templates/nuxt/nuxt.config.ts"),
    }),
    stylesheet: "app/assets/css/main.css",
    entry_page: TemplateFile {
        path: "app/app.vue",
        template: include_str!("../templates/nuxt/app.vue.j2"),
    },
    shell_page: None,
    start_script: None,
    post_commands: &[],
    gitignore: &["/.nuxt", "/.output", "/.data"],
    next_steps: NextSteps {
        run: "`npm run dev`",
        open: "Open your browser at the address indicated by Nuxt (usually `http://localhost:3000/`).",
    },
};
