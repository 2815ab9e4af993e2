//! hexview CLI
//!
//! Render regular polygon views from a TOML style file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexview_core::{DrawContext, Rect, RecordingContext};
use hexview_mesh::{BatchKind, MeshContext};
use hexview_paint::{path_data, SvgContext};
use hexview_widgets::{outline, HexagonStyle, HexagonView};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "hexview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render regular polygon views", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand
#[derive(clap::Args)]
struct ViewArgs {
    /// Style file (TOML, keyed by host property names)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View width, overriding the style size
    #[arg(long)]
    width: Option<f64>,

    /// View height, overriding the style size
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the view to an SVG document
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the outline as SVG path data
    Path {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Tessellate the view and print mesh statistics
    Mesh {
        #[command(flatten)]
        view: ViewArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render { view, out } => cmd_render(&view, out),
        Commands::Path { view } => cmd_path(&view),
        Commands::Mesh { view } => cmd_mesh(&view),
    }
}

fn load(args: &ViewArgs) -> Result<(HexagonStyle, Rect)> {
    let style = config::load_style(args.config.as_deref())?;
    let bounds = config::resolve_bounds(&style, args.width, args.height);
    debug!(?bounds, sides = style.sides, "loaded hexagon style");
    Ok((style, bounds))
}

fn draw_view(style: HexagonStyle, bounds: Rect, ctx: &mut dyn DrawContext) -> Result<()> {
    let mut view = HexagonView::with_style(style);
    view.layout(bounds);
    view.draw(ctx).context("Failed to build hexagon outline")
}

fn cmd_render(args: &ViewArgs, out: Option<PathBuf>) -> Result<()> {
    let (style, bounds) = load(args)?;
    let mut svg = SvgContext::new(bounds.size());
    draw_view(style, bounds, &mut svg)?;
    let document = svg.finish();

    match out {
        Some(path) => {
            fs::write(&path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", document),
    }
    Ok(())
}

fn cmd_path(args: &ViewArgs) -> Result<()> {
    let (style, bounds) = load(args)?;
    let path = outline(&style, bounds).context("Failed to build hexagon outline")?;
    println!("{}", path_data(&path));
    Ok(())
}

fn cmd_mesh(args: &ViewArgs) -> Result<()> {
    let (style, bounds) = load(args)?;

    // Record once so the command count can be reported next to the meshes
    let mut recording = RecordingContext::new(bounds.size());
    draw_view(style, bounds, &mut recording)?;
    let mut mesh = MeshContext::new(bounds.size());
    recording.replay(&mut mesh);

    println!("draw commands: {}", recording.commands().len());
    for batch in mesh.batches() {
        let kind = match batch.kind {
            BatchKind::Clip => "clip",
            BatchKind::Fill => "fill",
            BatchKind::Stroke => "stroke",
        };
        println!(
            "{:<6} depth {} vertices {:>5} triangles {:>5} area {:.2}",
            kind,
            batch.clip_depth,
            batch.mesh.vertices.len(),
            batch.mesh.triangle_count(),
            batch.mesh.area()
        );
    }
    println!("total triangles: {}", mesh.triangle_count());
    Ok(())
}
