use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use triarc::{ArrangementEngine, Point, TriangleIndex};

mod script;

/// Canvas layout the renderer expects: an 800×800 canvas with a centered
/// 400×400 square. The core itself accepts any coordinates.
const CANVAS: i64 = 800;
const SQUARE: i64 = 400;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Replay draw scripts through the arrangement core")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay a script and write the resulting scene JSON
    Run {
        #[arg(long)]
        script: String,
        #[arg(long)]
        out: String,
    },
    /// Replay a script and print the scene JSON to stdout
    Show {
        #[arg(long)]
        script: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { script, out } => run(&script, &out),
        Action::Show { script } => show(&script),
    }
}

fn run(script: &str, out: &str) -> Result<()> {
    let scene = replay_to_scene(script)?;
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&scene)?)?;
    tracing::info!(script, out, "scene written");
    Ok(())
}

fn show(script: &str) -> Result<()> {
    let scene = replay_to_scene(script)?;
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

fn replay_to_scene(script: &str) -> Result<serde_json::Value> {
    let text =
        std::fs::read_to_string(script).with_context(|| format!("reading script {script}"))?;
    let commands = script::parse(&text)?;

    let origin = Point::new((CANVAS - SQUARE) / 2, (CANVAS - SQUARE) / 2);
    let mut engine = ArrangementEngine::new(origin, SQUARE);
    script::replay(&mut engine, &commands);

    let mut index = TriangleIndex::default();
    let segments: Vec<_> = engine.segments().collect();
    index.rebuild(segments.iter());
    let triangles = index.find_triangles();
    tracing::info!(
        commands = commands.len(),
        segments = segments.len(),
        points = index.points().len(),
        triangles = triangles.len(),
        "replayed"
    );

    Ok(serde_json::json!({
        "canvas": { "width": CANVAS, "height": CANVAS },
        "segments": segments
            .iter()
            .map(|s| serde_json::json!([[s.start.x, s.start.y], [s.end.x, s.end.y]]))
            .collect::<Vec<_>>(),
        "triangles": triangles
            .iter()
            .map(|t| serde_json::json!({
                "points": t.points().map(|p| [p.x, p.y]),
                "acute": t.is_acute(),
            }))
            .collect::<Vec<_>>(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn diagonal_script_produces_two_triangles() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# diagonal across the square").unwrap();
        writeln!(file, "add 200 200 600 600").unwrap();
        let scene = replay_to_scene(file.path().to_str().unwrap()).unwrap();

        assert_eq!(scene["segments"].as_array().unwrap().len(), 5);
        let triangles = scene["triangles"].as_array().unwrap();
        assert_eq!(triangles.len(), 2);
        for t in triangles {
            assert!(t["acute"].is_boolean());
            assert_eq!(t["points"].as_array().unwrap().len(), 3);
        }
    }

    #[test]
    fn run_writes_the_scene_file() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("steps.txt");
        std::fs::write(&script_path, "add 300 300 400 400\nundo\n").unwrap();
        let out_path = dir.path().join("nested/scene.json");

        run(script_path.to_str().unwrap(), out_path.to_str().unwrap()).unwrap();

        let scene: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out_path).unwrap()).unwrap();
        assert_eq!(scene["segments"].as_array().unwrap().len(), 4);
        assert!(scene["triangles"].as_array().unwrap().is_empty());
    }

    #[test]
    fn missing_script_is_an_error() {
        assert!(replay_to_scene("/no/such/script").is_err());
    }
}
