mod svg;

use std::fs;
use std::io::{self, BufRead, BufReader, Read};

use canvas::config::{ConfigError, EngineConfig};
use canvas::engine::Engine;
use canvas::input::InputEvent;
use canvas::scene::{ImportReport, SceneError};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;

use crate::svg::SvgRenderer;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("unknown connection `{0}`")]
    UnknownConnection(String),
    #[error("connection `{0}` has a missing endpoint")]
    Unroutable(String),
    #[error("event on line {line}: {source}")]
    Event { line: usize, source: serde_json::Error },
    #[error("viewport size must be positive, got {width}x{height}")]
    ViewportSize { width: f64, height: f64 },
}

#[derive(Parser, Debug)]
#[command(name = "flowboard", about = "Headless flowchart scene tool")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a scene and report what it contains.
    Check {
        #[arg(help = "Scene file path, or - for stdin")]
        scene: String,
    },
    /// Import a scene and write it back in canonical form.
    Normalize {
        #[arg(help = "Scene file path, or - for stdin")]
        scene: String,
        #[arg(short, long, help = "Output path; stdout when omitted")]
        output: Option<String>,
    },
    /// Print the routed path of one connection.
    Route {
        #[arg(help = "Scene file path, or - for stdin")]
        scene: String,
        connection_id: String,
    },
    /// Print the viewport that frames every node.
    Fit {
        #[arg(help = "Scene file path, or - for stdin")]
        scene: String,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
    /// Feed recorded input events through the editor and write the result.
    Replay {
        #[arg(help = "Scene file path, or - for stdin")]
        scene: String,
        #[arg(help = "One JSON input event per line")]
        events: String,
        #[arg(short, long, help = "Output path; stdout when omitted")]
        output: Option<String>,
    },
    /// Render the scene as a standalone SVG document.
    Svg {
        #[arg(help = "Scene file path, or - for stdin")]
        scene: String,
        #[arg(short, long, help = "Output path; stdout when omitted")]
        output: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    nodes: usize,
    connections: usize,
    areas: usize,
    dropped_connections: usize,
    duplicate_ids: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FitReport {
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match cli.command {
        Command::Check { scene } => run_check(&scene),
        Command::Normalize { scene, output } => run_normalize(&scene, output.as_deref()),
        Command::Route { scene, connection_id } => run_route(&scene, &connection_id),
        Command::Fit { scene, width, height } => run_fit(&scene, width, height),
        Command::Replay { scene, events, output } => run_replay(&scene, &events, output.as_deref()),
        Command::Svg { scene, output } => run_svg(&scene, output.as_deref()),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

fn run_check(scene: &str) -> Result<(), CliError> {
    let (_, report) = import_scene(scene)?;
    print_json(&CheckReport {
        nodes: report.nodes,
        connections: report.connections,
        areas: report.areas,
        dropped_connections: report.dropped_connections,
        duplicate_ids: report.duplicate_ids,
    })
}

fn run_normalize(scene: &str, output: Option<&str>) -> Result<(), CliError> {
    let engine = load_engine(scene)?;
    write_output(output, &engine.export_json()?)
}

fn run_route(scene: &str, connection_id: &str) -> Result<(), CliError> {
    let engine = load_engine(scene)?;
    if engine.scene.connection(connection_id).is_none() {
        return Err(CliError::UnknownConnection(connection_id.to_owned()));
    }
    let path = engine.connection_path(connection_id).ok_or_else(|| CliError::Unroutable(connection_id.to_owned()))?;
    print_json(&path)
}

fn run_fit(scene: &str, width: f64, height: f64) -> Result<(), CliError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(CliError::ViewportSize { width, height });
    }
    let mut engine = load_engine(scene)?;
    engine.set_viewport_size(width, height);
    if !engine.fit_to_content() {
        tracing::info!("scene has no nodes; viewport left at identity");
    }
    let vp = engine.viewport;
    print_json(&FitReport { pan_x: vp.pan_x, pan_y: vp.pan_y, zoom: vp.zoom })
}

fn run_replay(scene: &str, events: &str, output: Option<&str>) -> Result<(), CliError> {
    let mut engine = load_engine(scene)?;
    let reader = open_reader(events)?;

    let mut applied = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Read { path: events.to_owned(), source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: InputEvent =
            serde_json::from_str(trimmed).map_err(|source| CliError::Event { line: idx + 1, source })?;
        let actions = engine.handle(event);
        tracing::debug!(line = idx + 1, ?actions, "event applied");
        applied += 1;
    }
    tracing::info!(events = applied, state = engine.input.name(), "replay finished");

    write_output(output, &engine.export_json()?)
}

fn run_svg(scene: &str, output: Option<&str>) -> Result<(), CliError> {
    let engine = load_engine(scene)?;
    let mut renderer = SvgRenderer::new();
    engine.render(&mut renderer);
    write_output(output, &renderer.finish(engine.scene.content_bounds()))
}

fn import_scene(scene: &str) -> Result<(Engine, ImportReport), CliError> {
    let mut engine = Engine::new(EngineConfig::from_env())?;
    let report = engine.open_json(&read_input(scene)?)?;
    if report.dropped_connections > 0 {
        tracing::warn!(dropped = report.dropped_connections, "invalid connections were dropped");
    }
    if report.duplicate_ids > 0 {
        tracing::warn!(dropped = report.duplicate_ids, "records with duplicate ids were dropped");
    }
    Ok((engine, report))
}

fn load_engine(scene: &str) -> Result<Engine, CliError> {
    import_scene(scene).map(|(engine, _)| engine)
}

fn open_reader(path: &str) -> Result<Box<dyn BufRead>, CliError> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = fs::File::open(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    Ok(Box::new(BufReader::new(file)))
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut text = String::new();
    open_reader(path)?
        .read_to_string(&mut text)
        .map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    Ok(text)
}

fn write_output(path: Option<&str>, text: &str) -> Result<(), CliError> {
    match path {
        None | Some("-") => {
            println!("{}", text.trim_end());
            Ok(())
        }
        Some(path) => fs::write(path, text).map_err(|source| CliError::Write { path: path.to_owned(), source }),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
