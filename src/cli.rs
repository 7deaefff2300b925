//! Command line front end.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use snapcheck_analysis::{AnalysisRequest, AnalysisSession, Analyzer, CallbackObserver, GeoEngine};
use snapcheck_core::{AnalysisResult, Diagnostic, DiagnosticLevel, FeatureId, FeatureLayer};
use snapcheck_io::{load_line_layer, load_polygon_layer, Exporter, GeoJsonExporter};
use snapcheck_settings::{default_config_path, Config};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "snapcheck", version)]
#[command(about = "Find line endpoints that stop short of, or overshoot, polygon boundaries")]
pub struct Cli {
    /// Log progress at INFO level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check line endpoints against polygon boundaries
    Check(CheckArgs),
    /// Write a default configuration file
    Config {
        /// Target file (.toml or .json); defaults to the platform config dir
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Polygon layer (GeoJSON FeatureCollection)
    #[arg(long)]
    pub polygons: PathBuf,

    /// Line layer (GeoJSON FeatureCollection)
    #[arg(long)]
    pub lines: PathBuf,

    /// Half-width of the boundary band, in layer units
    #[arg(long)]
    pub distance: Option<f64>,

    /// Only check selected features
    #[arg(long)]
    pub selected_only: bool,

    /// Check every feature, even when the config enables selection mode
    #[arg(long, conflicts_with = "selected_only")]
    pub all_features: bool,

    /// Selected polygon ids
    #[arg(long, value_delimiter = ',')]
    pub select_polygons: Vec<u64>,

    /// Selected line ids
    #[arg(long, value_delimiter = ',')]
    pub select_lines: Vec<u64>,

    /// Write flagged endpoints to this GeoJSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Coordinate reference written into the export
    #[arg(long)]
    pub crs: Option<String>,

    /// Configuration file; defaults to the platform config dir if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with status 2 when any endpoint is flagged
    #[arg(long)]
    pub fail_on_flagged: bool,
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Check(args) => check(&args),
        Command::Config { path, force } => {
            let path = match path {
                Some(path) => path,
                None => default_config_path()?,
            };
            write_default_config(&path, force)?;
            println!("Wrote {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match default_config_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(e) => {
                debug!(error = %e, "No config directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save_to_file(path)?;
    Ok(())
}

fn apply_selection<G>(layer: FeatureLayer<G>, ids: &[u64]) -> FeatureLayer<G> {
    if ids.is_empty() {
        layer
    } else {
        layer.with_selection(ids.iter().copied().map(FeatureId))
    }
}

/// Report printed on stdout: one `label<TAB>x<TAB>y` row per point and a
/// total line.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    for (label, point) in result.entries() {
        let _ = writeln!(out, "{}\t{}\t{}", label, point.x, point.y);
    }
    let _ = writeln!(out, "Total: {}", result.len());
    out
}

fn selection_mode(args: &CheckArgs, config: &Config) -> bool {
    if args.all_features {
        false
    } else {
        args.selected_only || config.analysis.selected_only
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic.level {
        // Already part of the report.
        DiagnosticLevel::Info if diagnostic.key == "zero_results" => {}
        _ => eprintln!("{}", diagnostic),
    }
}

fn check(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let distance = args.distance.unwrap_or(config.analysis.buffer_distance);
    let selected_only = selection_mode(args, &config);

    let polygons = apply_selection(load_polygon_layer(&args.polygons)?, &args.select_polygons);
    let lines = apply_selection(load_line_layer(&args.lines)?, &args.select_lines);

    let request = AnalysisRequest::new(Some(&polygons), Some(&lines))
        .with_buffer_distance(distance)
        .selected_only(selected_only);

    let mut observer = CallbackObserver::new()
        .with_progress(|percent| debug!(percent, "Progress"))
        .with_diagnostics(print_diagnostic);
    let mut session = AnalysisSession::new();
    let result = match Analyzer::new(GeoEngine::new()).analyze(&request, &mut session, &mut observer) {
        Ok(result) => result,
        // Already printed as an error diagnostic.
        Err(e) if e.is_configuration_error() => return Ok(ExitCode::FAILURE),
        Err(e) => return Err(e.into()),
    };

    print!("{}", format_report(&result));

    let export_path = args.export.clone().or(config.export.default_path.clone());
    if let Some(path) = export_path {
        let crs = args.crs.clone().unwrap_or(config.export.crs.clone());
        let outcome = GeoJsonExporter::new()
            .with_crs(crs)
            .with_layer_name(config.export.layer_name.clone())
            .export(&result, &path);
        if outcome.success {
            info!(path = %path.display(), "Export written");
            eprintln!("{}", outcome.message);
        } else if result.is_empty() {
            eprintln!("Export skipped: {}", outcome.message);
        } else {
            bail!("Export failed: {}", outcome.message);
        }
    }

    if args.fail_on_flagged && !result.is_empty() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
