mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "progress",
    about = "Implementation progress dashboard — overall completion, milestones, features, and screenshots",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from progress.yaml or .git/)
    #[arg(long, global = true, env = "PROGRESS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default progress.yaml and sample progress.json
    Init,

    /// Start the dashboard web server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "3141")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Load progress (falling back to demo data) and print it
    Show {
        /// Progress endpoint (default: progress_url from config, else the local server)
        #[arg(long)]
        url: Option<String>,

        /// Fail if demo data was used or the payload is invalid
        #[arg(long)]
        strict: bool,
    },

    /// List image files in the screenshot directory
    Screenshots {
        /// Directory to list (default: screenshots_dir from config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the demo payload used when live data is unavailable
    Demo,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
        Commands::Show { url, strict } => cmd::show::run(&root, url.as_deref(), strict, cli.json),
        Commands::Screenshots { dir } => cmd::screenshots::run(&root, dir.as_deref(), cli.json),
        Commands::Demo => cmd::demo::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
