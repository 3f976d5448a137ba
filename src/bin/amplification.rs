use anyhow::Context;
use clap::Parser;
use fdm1d::export::write_table_file;
use fdm1d::reference::amplification_table;
use std::path::PathBuf;

/// Tabulate |g| of the first order and Leonard upwind schemes
/// over Courant number and phase angle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Table to write.
    output: PathBuf,

    #[arg(long, default_value = "2.0")]
    max_courant: f64,

    #[arg(long, default_value = "3.0")]
    max_beta: f64,

    /// Samples along the Courant number axis.
    #[arg(long, default_value = "5")]
    courant_samples: usize,

    /// Samples along the phase angle axis.
    #[arg(long, default_value = "61")]
    beta_samples: usize,

    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    fdm1d::cli::init_logging(&args.log_level)?;

    let table = amplification_table(
        args.max_courant,
        args.max_beta,
        args.courant_samples,
        args.beta_samples,
    )?;
    tracing::info!("{} rows", table.rows());
    write_table_file(&args.output, &table)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}
