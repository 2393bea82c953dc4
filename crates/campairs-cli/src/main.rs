//! campairs CLI — write sequential multi-camera image pairs to a text file.

use campairs::{sink, NameSource, PairGenerator, TracingDiagnostics, WindowConfig};
use clap::Parser;
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "campairs")]
#[command(
    about = "Generate image pairs for matching from multi-camera sequences (temporal window + cross-camera alignment)"
)]
#[command(version)]
struct Cli {
    /// Path to write the pairs (one `name0 name1` per line).
    #[arg(long)]
    output: PathBuf,

    /// Image list: a text file with one name per line, or a directory to scan.
    #[arg(long = "image_list", visible_alias = "image-list")]
    image_list: Option<PathBuf>,

    /// Feature store whose groups are keyed by image name (used when no image list is given).
    #[arg(long)]
    features: Option<PathBuf>,

    /// Number of future frames to include in pairs.
    #[arg(long = "window_size", visible_alias = "window-size", default_value_t = 2)]
    window_size: usize,

    /// Treat sequences as circular so the last frames pair with the first.
    #[arg(long = "loop")]
    loop_closure: bool,

    /// Path to write a JSON summary of the run.
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl Cli {
    fn window(&self) -> WindowConfig {
        WindowConfig::new(self.window_size, self.loop_closure)
    }

    fn name_source(&self) -> CliResult<NameSource> {
        Ok(NameSource::resolve(
            self.image_list.as_deref(),
            self.features.as_deref(),
        )?)
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> CliResult<()> {
    let source = cli.name_source()?;
    let names = source.load()?;

    let window = cli.window();
    tracing::info!(
        "Generating pairs for {} names (window_size={}, loop={})",
        names.len(),
        window.window_size,
        window.loop_closure
    );

    let generator = PairGenerator::new(window);
    let set = generator.generate_with_diagnostics(&names, &mut TracingDiagnostics);

    sink::write_pairs(&cli.output, &set.pairs)?;

    if let Some(summary_path) = cli.summary.as_deref() {
        write_summary(summary_path, &set.summary)?;
    }

    Ok(())
}

fn write_summary(path: &Path, summary: &campairs::PairSummary) -> CliResult<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, &json)?;
    tracing::info!("Summary written to {}", path.display());
    Ok(())
}
