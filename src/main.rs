use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use simplelog::LevelFilter;

use relations::analysis::analyze;
use relations::config::Config;
use relations::predicate::Builtin;
use relations::report::{write_report, ReportConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Lower border of the range (inclusive).
    #[arg(long, value_name = "INT", default_value_t = 1, allow_negative_numbers = true)]
    left: i64,

    /// Upper border of the range (inclusive).
    #[arg(long, value_name = "INT", default_value_t = 10, allow_negative_numbers = true)]
    right: i64,

    /// Relation predicate: `square` (a^2 >= 3b) or `scaled` (3a <= 5b).
    #[arg(long, value_name = "NAME", default_value = "square")]
    predicate: Builtin,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,

    /// Do not print intermediate composition steps.
    #[arg(long)]
    no_steps: bool,

    /// Write the transitive closure as a Graphviz DOT file.
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("invalid log level '{}'", s))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    // Logs go to stderr, the report owns stdout.
    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let time_total = std::time::Instant::now();

    let config = Config::new(args.left, args.right).with_predicate(args.predicate);
    log::info!("Analyzing {}", config);
    let analysis = analyze(&config);
    log::info!(
        "Closure: {} steps ({}), {} of {} pairs related",
        analysis.closure.steps().len(),
        analysis.closure.termination(),
        analysis.closure.matrix().count(),
        analysis.domain.len() * analysis.domain.len()
    );

    let report_config = ReportConfig {
        show_steps: !args.no_steps,
    };
    write_report(&mut io::stdout().lock(), &analysis, &report_config).wrap_err("Failed to write report")?;

    if let Some(path) = &args.dot {
        let dot = analysis.closure.matrix().to_dot()?;
        std::fs::write(path, dot).wrap_err_with(|| format!("Failed to write DOT file {}", path.display()))?;
        log::info!("Wrote closure graph to {}", path.display());
    }

    log::info!("All done in {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
