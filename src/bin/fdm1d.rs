use anyhow::Context;
use fdm1d::cli::Args;
use fdm1d::config::{load_parameters, SchemeParameters};
use fdm1d::export::write_table_file;
use fdm1d::image::{ComparisonPlot, HistoryImage};
use fdm1d::solver::{SchemeRegistry, Simulation};
use std::time::Instant;

const PLOT_WIDTH: u32 = 800;
const PLOT_HEIGHT: u32 = 600;

fn list_schemes(registry: &SchemeRegistry) {
    for scheme in registry.schemes() {
        let aliases: Vec<&str> = registry.aliases_of(scheme.name).collect();
        println!(
            "{:<20} {:<16} {}",
            scheme.name,
            aliases.join(", "),
            scheme.description
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("fdm1d")?;

    // Dropped at the end of main, which flushes the profile
    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&server_addr)?;
        tracing::info!(
            "Run this to view profiling data:  puffin_viewer {server_addr}"
        );
        profiling::puffin::set_scopes_on(true);
        server
    };
    let registry = SchemeRegistry::standard();

    if args.list_schemes {
        list_schemes(&registry);
        return Ok(());
    }

    // clap guarantees these unless one of the early exit flags was given
    let (Some(input), Some(output), Some(scheme_id)) =
        (args.input.as_ref(), args.output.as_ref(), args.scheme.as_ref())
    else {
        anyhow::bail!("input, output and scheme are required");
    };

    let table = load_parameters(input)
        .with_context(|| {
            format!("reading parameters from {}", input.display())
        })?;
    let params = SchemeParameters::from_table(&table)
        .with_context(|| {
            format!("interpreting parameters from {}", input.display())
        })?;
    let scheme = registry.lookup(scheme_id)?;
    let mut simulation = Simulation::new(params, scheme, args.chunk_size)?;

    let applied = simulation.engine().time_step().applied_steps();
    let stride = args.history_stride(applied);
    let physical = simulation.engine().grid().physical_range();
    let mut history = args
        .history
        .as_ref()
        .map(|_| HistoryImage::new(physical.len() as u32));

    let now = Instant::now();
    simulation.run_with(|level, field| {
        profiling::finish_frame!();
        if let Some(h) = history.as_mut() {
            if level % stride == 0 || level == applied {
                h.add_line(&field[physical.clone()]);
            }
        }
    })?;
    tracing::info!("Solve time: {:?}", now.elapsed());

    let result = simulation.table()?;
    write_table_file(output, &result)
        .with_context(|| format!("writing results to {}", output.display()))?;

    if let Some(path) = args.plot.as_ref() {
        let x = result.column(0);
        let mut plot = ComparisonPlot::new(PLOT_WIDTH, PLOT_HEIGHT, x);
        for label in result.labels().iter().skip(1) {
            if let Some(y) = result.column_by_label(label) {
                plot.add_curve(label.as_str(), y);
            }
        }
        plot.write(path)
            .with_context(|| format!("writing plot to {}", path.display()))?;
    }

    if let (Some(path), Some(h)) = (args.history.as_ref(), history) {
        h.write(path)
            .with_context(|| format!("writing history to {}", path.display()))?;
    }

    Ok(())
}
