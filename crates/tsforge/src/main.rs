//! tsforge CLI - scaffolding for TypeScript projects

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tsforge_core::config::load_preset;
use tsforge_core::pipeline::{ConsoleProgress, Progress};
use tsforge_core::templates::resolve_template_root;
use tsforge_core::tui::CliclackProgress;
use tsforge_core::{
    create_project, BootstrapError, Configuration, PackageManager, ProcessRunner, ProjectOptions,
    ProjectReport,
};

#[derive(Parser, Debug)]
#[command(name = "tsforge")]
#[command(about = "CLI for scaffolding TypeScript projects with optional lint, git and hook setup")]
#[command(version)]
pub struct Args {
    /// Project folder to create inside the current directory
    pub name: Option<String>,

    /// Package manager used for installs
    #[arg(short = 'p', long = "package-manager", value_parser = parse_package_manager)]
    pub package_manager: Option<PackageManager>,

    /// Initialize a git repository
    #[arg(short, long)]
    pub git: bool,

    /// Add TypeScript
    #[arg(long)]
    pub ts: bool,

    /// Add ESLint (airbnb-base + typescript-eslint)
    #[arg(short, long)]
    pub eslint: bool,

    /// Add nodemon hot reloading (requires --ts)
    #[arg(short, long)]
    pub nodemon: bool,

    /// Add an .editorconfig file
    #[arg(long = "editorconfig")]
    pub editor_config: bool,

    /// Add husky + commitlint commit hooks (requires --git and --eslint)
    #[arg(long = "commit-lint", visible_alias = "pre-commit-hook")]
    pub commit_lint: bool,

    /// Install dependencies instead of printing the install commands
    #[arg(short, long)]
    pub install: bool,

    /// Enable every feature and install dependencies (non-interactive defaults)
    #[arg(short, long)]
    pub yes: bool,

    /// YAML file with project options; flags given on the command line are added to it
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Print plain lines instead of spinners (for CI logs)
    #[arg(long)]
    pub plain: bool,
}

impl From<&Args> for ProjectOptions {
    fn from(args: &Args) -> Self {
        ProjectOptions {
            name: args.name.clone(),
            package_manager: args.package_manager,
            run_install: args.install,
            git: args.git,
            ts: args.ts,
            eslint: args.eslint,
            nodemon: args.nodemon,
            editor_config: args.editor_config,
            commit_lint: args.commit_lint,
        }
    }
}

fn parse_package_manager(s: &str) -> Result<PackageManager, String> {
    s.parse().map_err(|e: tsforge_core::ScaffoldError| e.to_string())
}

/// Build the configuration from preset, `--yes` defaults and flags
fn resolve_configuration(args: &Args) -> Result<Configuration> {
    let mut options = match &args.preset {
        Some(path) => load_preset(path)?,
        None => ProjectOptions::default(),
    };
    if args.yes {
        options = options.merge(&ProjectOptions::all_features());
    }
    options = options.merge(&ProjectOptions::from(args));

    let cwd = std::env::current_dir()?;
    let templates = resolve_template_root(args.template_dir.clone());
    Ok(Configuration::new(options, &cwd, templates)?)
}

async fn run<P: Progress>(
    config: &Configuration,
    progress: &mut P,
) -> Result<ProjectReport, BootstrapError> {
    create_project(config, &ProcessRunner, progress).await
}

fn report_failure(err: &BootstrapError) {
    eprintln!("{} {}", "ERROR:".red().bold(), err);
    if let BootstrapError::CreationFailed {
        source,
        rolled_back,
        ..
    } = err
    {
        eprintln!("  {}", source.to_string().dimmed());
        if *rolled_back {
            eprintln!("  {}", "Changes made by this run were removed.".dimmed());
        }
    }
}

/// Lines for template files the project already had
fn kept_files(report: &ProjectReport) -> Vec<String> {
    report
        .skipped
        .iter()
        .map(|path| {
            let shown = path.strip_prefix(&report.target_directory).unwrap_or(path);
            format!("Kept existing {}", shown.display())
        })
        .collect()
}

async fn try_main(args: &Args) -> Result<ExitCode> {
    let config = resolve_configuration(args)?;

    let result = if args.plain {
        println!("{} Preparing project", ">>".green().bold());
        run(&config, &mut ConsoleProgress).await
    } else {
        cliclack::intro("tsforge")?;
        let mut progress = CliclackProgress::new();
        let result = run(&config, &mut progress).await;
        progress.finish()?;
        result
    };

    match result {
        Ok(report) => {
            if args.plain {
                for line in kept_files(&report) {
                    println!("  {}", line.dimmed());
                }
                println!("{} {}", "DONE.".green().bold(), report.summary());
            } else {
                for line in kept_files(&report) {
                    cliclack::log::remark(line)?;
                }
                cliclack::outro(format!("{}. Happy coding!", report.summary()))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let code = match try_main(&args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), e);
            ExitCode::FAILURE
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();
    code
}
