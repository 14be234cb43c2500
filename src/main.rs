use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use masthead::cli;

#[derive(Debug, Parser)]
#[command(name = "masthead")]
#[command(
    about = "Synthesize an SEO profile and project it into head tags, robots.txt, and a runtime meta-tag helper"
)]
#[command(version)]
struct Cli {
    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show extra detail
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build seo.config.json from an answers file
    Setup {
        /// Target project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// JSON answer record describing the business
        #[arg(long)]
        answers: PathBuf,

        /// Rebuild even if a configuration already exists
        #[arg(long)]
        force: bool,
    },

    /// Inject head tags and write robots.txt plus the meta-tag helper
    Apply {
        /// Target project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Inject generic placeholder tags without consulting a profile
        #[arg(long)]
        bare: bool,
    },

    /// Report the project's current SEO state
    Status {
        /// Target project directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Export global flags for the output helpers.
    if cli.json {
        std::env::set_var("MASTHEAD_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("MASTHEAD_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("MASTHEAD_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("MASTHEAD_NO_COLOR", "1");
    }

    // Logs go to stderr so --json output on stdout stays parseable.
    let default_directive = if cli.verbose {
        "masthead=debug"
    } else {
        "masthead=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Setup {
            path,
            answers,
            force,
        } => cli::setup_cmd::run(&path, &answers, force).await,
        Commands::Apply { path, bare } => cli::apply_cmd::run(&path, bare).await,
        Commands::Status { path } => cli::status::run(&path).await,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "masthead",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
