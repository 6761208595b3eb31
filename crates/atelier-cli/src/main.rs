//! Atelier CLI
//!
//! Course help at the command line: guided help per exercise step, blank
//! templates, catalog export, and an interactive shell.

mod shell;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atelier_content::{Catalog, Registry, Topic};
use atelier_render::style::{self, SemanticStyle};
use atelier_render::RenderMode;
use atelier_session::{Session, SessionConfig};

/// Atelier - Course Exercise Helper
///
/// Shows hints, explanations, and solutions for the course exercises, one
/// chapter per topic. Help is guided: the hint always comes before the
/// solution so students can try again first.
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (default: atelier.json in current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Rendering mode: auto, rich, or plain
    #[arg(long, value_name = "MODE", global = true)]
    render: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the full help (hint, explanation, solution) for one step.
    Show {
        /// Course topic (e.g. python, docker)
        topic: String,

        /// Step identifier (e.g. 3.2.1)
        identifier: String,
    },

    /// List the sections of a topic.
    List {
        /// Course topic (e.g. python, docker)
        topic: String,
    },

    /// List all topics with their chapters.
    Topics,

    /// Show the blank code template for one step.
    Template {
        /// Course topic (e.g. pandas)
        topic: String,

        /// Step identifier (e.g. 2.1.1)
        identifier: String,
    },

    /// Print a congratulation banner.
    Success {
        /// Course topic (e.g. python, docker)
        topic: String,

        /// Message to celebrate
        message: String,
    },

    /// Export the content catalog as JSON.
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Interactive help shell.
    Shell {
        /// Topic loaded at startup (falls back to the configured default)
        topic: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing subscriber with appropriate filter
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if args.no_color || no_color_env {
        style::set_no_color(true);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Loads configuration, applies CLI overrides, and dispatches the command.
fn run(args: Args) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(ref render) = args.render {
        config.render_mode = RenderMode::from_str(render)?;
    }
    config.validate()?;

    tracing::debug!(render_mode = ?config.render_mode, "Session configuration resolved");
    let mut session = Session::new(config);

    match args.command {
        Command::Show { topic, identifier } => run_show(&mut session, &topic, &identifier),
        Command::List { topic } => run_list(&mut session, &topic),
        Command::Topics => run_topics(),
        Command::Template { topic, identifier } => run_template(&mut session, &topic, &identifier),
        Command::Success { topic, message } => run_success(&mut session, &topic, &message),
        Command::Export { output, pretty } => run_export(output.as_deref(), pretty),
        Command::Shell { topic } => shell::run(&mut session, topic.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            SessionConfig::load_from_file(path)?
        }
        None => SessionConfig::load()?,
    };
    Ok(config)
}

fn run_show(session: &mut Session, topic: &str, identifier: &str) -> anyhow::Result<()> {
    let helper = session.get_or_load(Topic::from_str(topic)?);
    print!("{}", helper.present(identifier));
    Ok(())
}

fn run_list(session: &mut Session, topic: &str) -> anyhow::Result<()> {
    let helper = session.get_or_load(Topic::from_str(topic)?);
    print!("{}", helper.overview());
    Ok(())
}

fn run_topics() -> anyhow::Result<()> {
    println!("Chapitres du cours :");
    for topic in Topic::ALL {
        let registry = Registry::for_topic(topic);
        println!(
            "  {}. {} {} - {} sections",
            topic.chapter(),
            topic.emblem(),
            topic.title(),
            registry.len()
        );
    }
    Ok(())
}

fn run_template(session: &mut Session, topic: &str, identifier: &str) -> anyhow::Result<()> {
    let helper = session.get_or_load(Topic::from_str(topic)?);
    print!("{}", helper.template(identifier));
    Ok(())
}

fn run_success(session: &mut Session, topic: &str, message: &str) -> anyhow::Result<()> {
    let helper = session.get_or_load(Topic::from_str(topic)?);
    print!("{}", helper.success(message));
    Ok(())
}

fn run_export(output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let catalog = Catalog::collect();
    match output {
        Some(path) => {
            catalog.write_to_file(path, pretty)?;
            println!("Catalogue exporté vers {}", path.display().code());
        }
        None => {
            let json = if pretty {
                catalog.to_json_pretty()?
            } else {
                catalog.to_json()?
            };
            println!("{json}");
        }
    }
    Ok(())
}
