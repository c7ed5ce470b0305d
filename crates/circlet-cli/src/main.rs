//! circlet CLI - run circular layout passes over scene files.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::print_stdout
)]

use circlet_layout::{CircleLayout, ConfigError, Format, LayoutError, LayoutPass, Scene};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circlet")]
#[command(about = "Lay out children around a circle")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one layout pass and print the placements
    Layout {
        /// Scene file (.yaml or .json)
        scene: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a scene file
    Check {
        /// Scene file (.yaml or .json)
        scene: PathBuf,
    },

    /// Re-run the pass while stepping one property between two values
    Sweep {
        /// Scene file (.yaml or .json)
        scene: PathBuf,

        /// Property to step
        #[arg(short, long, value_enum)]
        property: SweepProperty,

        /// First value
        #[arg(long, default_value = "0")]
        from: f32,

        /// Last value
        #[arg(long)]
        to: f32,

        /// Number of intervals between `from` and `to`
        #[arg(long, default_value = "10")]
        steps: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SweepProperty {
    /// Fixed radius in pixels
    Radius,
    /// Start angle in degrees
    AngleOffset,
    /// Fixed angular step in degrees
    Angle,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Scene { path: PathBuf, source: ConfigError },

    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Layout { scene, format } => run_layout(&scene, format),
        Commands::Check { scene } => check_scene(&scene),
        Commands::Sweep {
            scene,
            property,
            from,
            to,
            steps,
        } => sweep(&scene, property, from, to, steps),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn load_scene(path: &Path) -> Result<(Scene, CircleLayout), CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let scene_err = |source| CliError::Scene {
        path: path.to_path_buf(),
        source,
    };
    let scene = Scene::parse(&text, Format::from_path(path)).map_err(scene_err)?;
    let layout = scene.build().map_err(scene_err)?;
    info!(path = %path.display(), children = scene.children.len(), "scene loaded");
    Ok((scene, layout))
}

fn run_layout(path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let (_, mut layout) = load_scene(path)?;
    let pass = layout.layout();
    match format {
        OutputFormat::Text => print!("{}", render_text(pass)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(pass)?),
    }
    Ok(())
}

fn check_scene(path: &Path) -> Result<(), CliError> {
    let (scene, mut layout) = load_scene(path)?;
    let pass = layout.layout();
    println!("Scene valid: {}", path.display());
    println!("  Container: {} x {}", scene.width, scene.height);
    println!("  Children: {}", scene.children.len());
    println!("  On circle: {}", pass.geometry.circular_count);
    println!(
        "  Center element: {}",
        pass.center_element()
            .and_then(|p| p.id)
            .map_or_else(|| "none".to_string(), |id| id.to_string())
    );
    println!("  Radius: {:.2}", pass.geometry.radius);
    Ok(())
}

fn sweep(
    path: &Path,
    property: SweepProperty,
    from: f32,
    to: f32,
    steps: u32,
) -> Result<(), CliError> {
    let (_, mut layout) = load_scene(path)?;
    let stdout = io::stdout();
    sweep_layout(&mut layout, property, from, to, steps, &mut stdout.lock())
}

/// Step `property` from `from` to `to`, writing one row of centers per pass.
fn sweep_layout(
    layout: &mut CircleLayout,
    property: SweepProperty,
    from: f32,
    to: f32,
    steps: u32,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let intervals = steps.max(1);
    for step in 0..=intervals {
        let t = step as f32 / intervals as f32;
        let value = from + (to - from) * t;
        match property {
            SweepProperty::Radius => layout.set_radius(value)?,
            SweepProperty::AngleOffset => layout.set_angle_offset_degrees(value)?,
            SweepProperty::Angle => layout.set_angle_degrees(value)?,
        }
        debug!(?property, value, "sweep step");
        let pass = layout.layout();
        let centers: Vec<String> = pass
            .placements
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.center.x, p.center.y))
            .collect();
        writeln!(out, "{:>8.2}  {}", value, centers.join(" "))?;
    }
    Ok(())
}

fn render_text(pass: &LayoutPass) -> String {
    let g = &pass.geometry;
    let mut out = format!(
        "center ({:.1}, {:.1})  outer {:.1}  radius {:.1}  step {:.2} deg\n",
        g.center.x,
        g.center.y,
        g.outer_radius,
        g.radius,
        g.angle_increment.degrees()
    );
    for p in &pass.placements {
        let id = p.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let angle = p
            .angle
            .map_or_else(|| "center".to_string(), |a| format!("{:.1} deg", a.degrees()));
        out.push_str(&format!(
            "{:>3} {:>5}  ({:.1}, {:.1})  [{:.1}, {:.1}, {:.1} x {:.1}]  {}\n",
            p.index,
            id,
            p.center.x,
            p.center.y,
            p.bounds.x,
            p.bounds.y,
            p.bounds.width,
            p.bounds.height,
            angle
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlet_core::Rect;
    use circlet_layout::{compute_layout, ChildBox, CircleParams};

    const TWO_CHILD_SCENE: &str = r"
width: 200
height: 200
children:
  - { id: 1, width: 20, height: 20 }
  - { id: 2, width: 20, height: 20 }
";

    fn two_child_layout() -> CircleLayout {
        Scene::parse(TWO_CHILD_SCENE, Format::Yaml)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_cli_parses_sweep() {
        let cli = Cli::try_parse_from([
            "circlet", "sweep", "scene.yaml", "--property", "angle-offset", "--to", "360",
        ])
        .unwrap();
        match cli.command {
            Commands::Sweep {
                property, from, to, steps, ..
            } => {
                assert!(matches!(property, SweepProperty::AngleOffset));
                assert_eq!(from, 0.0);
                assert_eq!(to, 360.0);
                assert_eq!(steps, 10);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["circlet", "-vv", "check", "scene.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_render_text() {
        let children = vec![ChildBox::new(20.0, 20.0).with_id(1), ChildBox::new(20.0, 20.0)];
        let pass = compute_layout(Rect::new(0.0, 0.0, 200.0, 200.0), &children, &CircleParams::new());
        let text = render_text(&pass);
        assert!(text.starts_with("center (100.0, 100.0)  outer 100.0  radius 90.0  step 180.00 deg\n"));
        assert!(text.contains("  0    #1  (190.0, 100.0)"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_load_scene_missing_file() {
        let err = load_scene(Path::new("/nonexistent/scene.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_sweep_radius_rows() {
        let mut layout = two_child_layout();
        let mut out = Vec::new();
        sweep_layout(&mut layout, SweepProperty::Radius, 0.0, 100.0, 2, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(
            rows,
            [
                "    0.00  (190.0, 100.0) (10.0, 100.0)",
                "   50.00  (150.0, 100.0) (50.0, 100.0)",
                "  100.00  (200.0, 100.0) (0.0, 100.0)",
            ]
        );
        assert_eq!(layout.pass_count(), 3);
    }

    #[test]
    fn test_sweep_zero_steps_runs_one_interval() {
        let mut layout = two_child_layout();
        let mut out = Vec::new();
        sweep_layout(&mut layout, SweepProperty::AngleOffset, 0.0, 90.0, 0, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().last().unwrap().starts_with("   90.00  (100.0, 10.0)"));
    }

    #[test]
    fn test_sweep_rejects_negative_radius() {
        let mut layout = two_child_layout();
        let mut out = Vec::new();
        let err = sweep_layout(&mut layout, SweepProperty::Radius, -10.0, 10.0, 1, &mut out)
            .unwrap_err();
        assert!(matches!(err, CliError::Layout(LayoutError::NegativeRadius(_))));
        assert!(out.is_empty());
    }
}
