use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::path::{Path, PathBuf};
use vectorpad::Config;
use vectorpad::input::InputState;
use vectorpad::{script, ui};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VECTORPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "vectorpad")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Pan/zoom 2D vector drawing with vertex snapping and regular polygons"
)]
struct Cli {
    /// Event script to replay (one event per line)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG file the final frame is written to
    #[arg(long, short = 'o', value_name = "FILE", default_value = "vectorpad.png")]
    output: PathBuf,

    /// Surface width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..=16384))]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..=16384))]
    height: u32,

    /// Configuration file (defaults to ~/.config/vectorpad/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print committed shape and polygon counts after replay
    #[arg(long, action = ArgAction::SetTrue)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        // No script: show usage
        println!("vectorpad: pan/zoom 2D vector drawing");
        println!();
        println!("Usage:");
        println!("  vectorpad --script events.txt [--output out.png]   Replay events and render");
        println!("  vectorpad --help                                    Show help");
        println!();
        println!("Controls (in event scripts):");
        println!("  - Hold Shift (draw_mode_key) and click to place points; release to commit");
        println!("  - Tools: L line, R rect, E ellipse, P polyline, G regular polygon");
        println!("  - Polygon sides: + / -");
        println!("  - Right drag pans, scroll zooms around the cursor, 0 resets the view");
        println!("  - Escape cancels the current shape, or exits when idle");
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;
    let mut state = InputState::from_config(&config)
        .map_err(|e| anyhow!("Invalid keybindings in config: {}", e))?;

    let events = script::load_script(script_path)?;
    let applied = script::replay(&mut state, &events);
    log::info!("Replayed {}/{} event(s)", applied, events.len());
    log::info!("{}", state.window_title());

    render_png(&state, &config, cli.width, cli.height, &cli.output)?;
    log::info!("Wrote {}", cli.output.display());

    if cli.summary {
        println!("{}", state.window_title());
        println!("shapes: {}", state.store.shapes().len());
        println!("polygons: {}", state.store.polygons().len());
    }

    Ok(())
}

fn render_png(
    state: &InputState,
    config: &Config,
    width: u32,
    height: u32,
    output: &Path,
) -> anyhow::Result<()> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .context("Failed to create image surface")?;

    {
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
        ui::render_frame(
            &ctx,
            state,
            &config.render_style(),
            config.background_color(),
            width,
        );
    }

    let mut file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", output.display()))?;

    Ok(())
}
