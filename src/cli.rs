use crate::build_info;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Explicit finite difference solver for 1D model transport equations
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Parameter file, one `<value> ! <name>` pair per line.
    #[arg(required_unless_present_any(["build_info", "list_schemes"]))]
    pub input: Option<PathBuf>,

    /// Result table to write.
    #[arg(required_unless_present_any(["build_info", "list_schemes"]))]
    pub output: Option<PathBuf>,

    /// Scheme name or alias, see --list-schemes.
    #[arg(required_unless_present_any(["build_info", "list_schemes"]))]
    pub scheme: Option<String>,

    /// Write a numerical against reference plot.
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Write a spacetime image of the field history.
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Time levels kept in the history image, evenly spaced.
    #[arg(long, default_value = "500")]
    pub history_lines: usize,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "1")]
    pub threads: usize,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,

    /// Print the available schemes and quit
    #[arg(long)]
    pub list_schemes: bool,
}

pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global fmt subscriber.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Global rayon pool.
pub fn init_threads(threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .thread_name(|i| format!("rayon_thread_{}", i))
        .build_global()?;
    Ok(())
}

impl Args {
    /// Parse arguments and set up logging and threads.
    /// Exits early for `--build-info`.
    pub fn cli_setup(name: &str) -> anyhow::Result<Self> {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        init_logging(&args.log_level)?;
        tracing::info!(
            "{name} {} ({})",
            build_info::git_describe(),
            build_info::git_hash()
        );
        init_threads(args.threads)?;
        Ok(args)
    }

    /// Every `stride`-th level is kept so at most `history_lines` remain.
    pub fn history_stride(&self, applied_steps: usize) -> usize {
        let levels = applied_steps + 1;
        levels.div_ceil(self.history_lines.max(1)).max(1)
    }
}
