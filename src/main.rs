use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use sketchwall::config::Config;
use sketchwall::draw::{CairoCanvas, DrawingSurface};
use sketchwall::files;
use sketchwall::input::{StrokeCapture, StrokeScript};
use sketchwall::persistence::{
    FixedNameInput, GalleryOutcome, HtmlGalleryView, HttpDrawingService, SaveOutcome,
    SketchpadDependencies, StderrNotifier,
};
use sketchwall::widget::Sketchpad;

#[derive(Parser, Debug)]
#[command(name = "sketchwall")]
#[command(
    version,
    about = "Freehand drawing widget that posts sketches to a shared drawing wall"
)]
struct Cli {
    /// Config file to use instead of ~/.config/sketchwall/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay recorded pointer input and save the drawing to the service
    Draw {
        /// JSON stroke script to replay
        #[arg(long, short = 's', value_name = "FILE")]
        strokes: PathBuf,

        /// Owner name submitted with the drawing
        #[arg(long, short = 'n', default_value = "")]
        name: String,
    },
    /// Replay recorded pointer input into a local PNG file
    Render {
        /// JSON stroke script to replay
        #[arg(long, short = 's', value_name = "FILE")]
        strokes: PathBuf,

        /// Output file (defaults to ~/Pictures/Sketchwall/sketch_<timestamp>.png)
        #[arg(long, short = 'o', value_name = "PNG")]
        out: Option<PathBuf>,
    },
    /// Fetch the saved drawings into an HTML gallery
    Gallery {
        /// Directory to write index.html into
        #[arg(long, short = 'o', value_name = "DIR")]
        out: PathBuf,

        /// Also write every drawing as an image file
        #[arg(long)]
        extract: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(&files::expand_tilde(path))?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Draw { strokes, name } => run_draw(&config, &strokes, name),
        Command::Render { strokes, out } => run_render(&config, &strokes, out),
        Command::Gallery { out, extract } => run_gallery(&config, &out, extract),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn replay_onto_canvas(config: &Config, strokes: &Path) -> Result<StrokeCapture<CairoCanvas>> {
    let script = StrokeScript::load(strokes)?;
    let canvas = CairoCanvas::new(config.canvas.width, config.canvas.height)
        .context("Failed to create canvas")?;
    let mut capture = StrokeCapture::new(canvas, config.stroke.to_style());
    script.replay(&mut capture);
    Ok(capture)
}

fn sketchpad(
    config: &Config,
    capture: StrokeCapture<CairoCanvas>,
    name: String,
    gallery: Arc<HtmlGalleryView>,
) -> Result<Sketchpad<CairoCanvas>> {
    let deps = SketchpadDependencies {
        service: Arc::new(HttpDrawingService::from_config(config)?),
        name_input: Arc::new(FixedNameInput::new(name)),
        notifier: Arc::new(StderrNotifier),
        gallery,
    };
    Ok(Sketchpad::new(capture, deps))
}

fn run_draw(config: &Config, strokes: &Path, name: String) -> Result<()> {
    let capture = replay_onto_canvas(config, strokes)?;
    let mut pad = sketchpad(config, capture, name, Arc::new(HtmlGalleryView::new()))?;

    match runtime()?.block_on(pad.save()) {
        SaveOutcome::Submitted(_) => {
            println!("Drawing saved to {}", config.save_url()?);
            Ok(())
        }
        SaveOutcome::Rejected => Err(anyhow!("Drawing not saved: an owner name is required")),
        SaveOutcome::Failed(reason) => Err(anyhow!("Drawing not saved: {}", reason)),
    }
}

fn run_render(config: &Config, strokes: &Path, out: Option<PathBuf>) -> Result<()> {
    let mut capture = replay_onto_canvas(config, strokes)?;
    let png = capture
        .surface_mut()
        .export_png()
        .context("Failed to encode drawing")?;

    let path = match out {
        Some(path) => path,
        None => files::default_output_directory()
            .join(files::generate_filename("sketch_%Y-%m-%d_%H%M%S", "png")),
    };
    let path = files::write_private_file(&path, &png)?;
    println!("Drawing written to {}", path.display());
    Ok(())
}

fn run_gallery(config: &Config, out: &Path, extract: bool) -> Result<()> {
    let canvas = CairoCanvas::new(config.canvas.width, config.canvas.height)
        .context("Failed to create canvas")?;
    let capture = StrokeCapture::new(canvas, config.stroke.to_style());
    let gallery = Arc::new(HtmlGalleryView::new());
    let mut pad = sketchpad(config, capture, String::new(), gallery.clone())?;

    let outcome = runtime()?.block_on(pad.load_gallery());
    let index = gallery.write_to(out, extract)?;

    match outcome {
        GalleryOutcome::Loaded(count) => {
            println!("Gallery with {} drawings written to {}", count, index.display());
        }
        GalleryOutcome::Fallback(_) => {
            println!(
                "Gallery is empty (drawings could not be loaded); written to {}",
                index.display()
            );
        }
    }
    Ok(())
}
