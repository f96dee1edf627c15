use clap::{Parser, Subcommand, ValueEnum};
use pf_app::{
    AppResult, CurveSummary, Session, SessionConfig, StepOutcome, load_config, load_script,
    run_script,
};
use pf_engine::{CurveKind, PlotOrientation, Preset, RecomputeController};
use pf_fit::{Point, PointSet, fit_parabola};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "parafit CLI - parabola through three control points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a parabola and print its coefficients
    Fit {
        /// Control points as x,y (only the first three are used)
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point>,
    },
    /// Print a sampled curve as CSV
    Sample {
        /// Control points as x,y (only the first three are used)
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point>,
        /// Domain and resolution preset (narrow or wide)
        #[arg(long, default_value = "narrow")]
        preset: Preset,
        /// Which curve to sample
        #[arg(long, value_enum, default_value_t = Tier::Smooth)]
        tier: Tier,
        /// Emit y,x instead of x,y
        #[arg(long)]
        swapped: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start a session from a config file and print its state as JSON
    Show {
        /// Path to a session YAML/JSON file (defaults to the built-in session)
        config_path: Option<PathBuf>,
    },
    /// Replay a script of edits and recompute commands
    Replay {
        /// Path to the script YAML/JSON file
        script_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Tier {
    Rough,
    Smooth,
}

impl From<Tier> for CurveKind {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Rough => CurveKind::Rough,
            Tier::Smooth => CurveKind::Smooth,
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fit { points } => cmd_fit(&points),
        Commands::Sample {
            points,
            preset,
            tier,
            swapped,
            output,
        } => cmd_sample(&points, preset, tier.into(), swapped, output.as_deref()),
        Commands::Show { config_path } => cmd_show(config_path.as_deref()),
        Commands::Replay { script_path } => cmd_replay(&script_path),
    }
}

fn cmd_fit(points: &[Point]) -> AppResult<()> {
    let fit = fit_parabola(points)?;
    if let Some(notice) = fit.notice {
        eprintln!("note: {}", notice);
    }
    let k = fit.coefficients;
    println!("y = {}·x² + {}·x + {}", k.a, k.b, k.c);
    println!("  a = {}", k.a);
    println!("  b = {}", k.b);
    println!("  c = {}", k.c);
    Ok(())
}

fn cmd_sample(
    points: &[Point],
    preset: Preset,
    kind: CurveKind,
    swapped: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let set = PointSet::from_points(points.iter().copied())?;
    let controller = RecomputeController::new(preset.config(), &set)?;

    let orientation = if swapped {
        PlotOrientation::Swapped
    } else {
        PlotOrientation::Primary
    };
    let (h, v) = orientation.axis_labels();
    let curve = controller.curve(kind);

    let mut csv = format!("{},{}\n", h, v);
    for [a, b] in orientation.project(curve) {
        csv.push_str(&format!("{},{}\n", a, b));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        info!(path = %path.display(), samples = curve.len(), "curve exported");
        println!(
            "✓ Exported {} {} samples to {}",
            curve.len(),
            kind.label(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_show(config_path: Option<&Path>) -> AppResult<()> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => SessionConfig::default(),
    };
    let session = Session::new(&config)?;
    let json = serde_json::to_string_pretty(&session.snapshot())?;
    println!("{}", json);
    Ok(())
}

fn cmd_replay(script_path: &Path) -> AppResult<()> {
    println!("Replaying script: {}", script_path.display());
    let script = load_script(script_path)?;
    let reports = run_script(&script)?;

    for report in &reports {
        let k = report.coefficients;
        let status = match &report.outcome {
            StepOutcome::Refreshed { kind, notice } => {
                let mut s = format!("✓ {} refreshed", kind.label());
                if let Some(n) = notice {
                    s.push_str(&format!(" ({})", n));
                }
                s
            }
            StepOutcome::Nothing => "- nothing to do".to_string(),
            StepOutcome::Rejected { message } => format!("✗ {}", message),
        };
        println!("[{:>3}] {:?}", report.index, report.step);
        println!("      {}", status);
        println!(
            "      points={}  smooth={:?}  a={:.6} b={:.6} c={:.6}",
            report.point_count, report.smooth_state, k.a, k.b, k.c
        );
        println!("      rough:  {}", summarize(&report.rough));
        println!("      smooth: {}", summarize(&report.smooth));
    }

    let rejected = reports
        .iter()
        .filter(|r| matches!(r.outcome, StepOutcome::Rejected { .. }))
        .count();
    info!(steps = reports.len(), rejected, "replay finished");
    println!("✓ Replayed {} steps", reports.len());
    Ok(())
}

fn summarize(curve: &CurveSummary) -> String {
    match (curve.first, curve.last) {
        (Some(first), Some(last)) => format!(
            "{} samples, ({:.3}, {:.3}) .. ({:.3}, {:.3})",
            curve.samples, first.x, first.y, last.x, last.y
        ),
        _ => "empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_negatives() {
        assert_eq!(parse_point("-3,2.5").unwrap(), Point::new(-3.0, 2.5));
        assert_eq!(parse_point(" 1 , -1 ").unwrap(), Point::new(1.0, -1.0));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_parses_sample() {
        let cli = Cli::try_parse_from([
            "pf-cli", "sample", "--preset", "wide", "--tier", "rough", "0,1", "1,3", "-2,4",
        ])
        .unwrap();
        match cli.command {
            Commands::Sample {
                points,
                preset,
                tier,
                swapped,
                ..
            } => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[2], Point::new(-2.0, 4.0));
                assert_eq!(preset, Preset::Wide);
                assert!(matches!(tier, Tier::Rough));
                assert!(!swapped);
            }
            _ => panic!("expected sample"),
        }
    }

    #[test]
    fn summary_lists_endpoints() {
        let curve = pf_fit::Curve::from_points(vec![Point::new(-3.0, -11.0), Point::new(3.0, 4.0)]);
        assert_eq!(
            summarize(&CurveSummary::from(&curve)),
            "2 samples, (-3.000, -11.000) .. (3.000, 4.000)"
        );
        assert_eq!(summarize(&CurveSummary::from(&pf_fit::Curve::default())), "empty");
    }
}
