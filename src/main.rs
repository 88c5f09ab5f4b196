//! Room Layout Planner
//!
//! Command-line front end for the layout service.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roomplan::config::Config;
use roomplan::form::{Field, RoomForm};
use roomplan::render::render_svg;
use roomplan::report::{format_catalog, format_report, placement_issues};
use roomplan::{LayoutClient, LayoutResult, Palette, RoomSpec, Scene, Session, View, reconcile, sample};

#[derive(Parser)]
#[command(name = "roomplan")]
#[command(about = "Furnish a room within a budget and draw the floor plan")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the layout service (overrides config and environment)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RoomArgs {
    /// Room length in meters (3-15)
    #[arg(short, long)]
    length: String,

    /// Room width in meters (3-15)
    #[arg(short, long)]
    width: String,

    /// Budget in dollars (500-10000)
    #[arg(short, long)]
    budget: String,
}

#[derive(Args)]
struct OutputArgs {
    /// Write the floor plan as SVG to this file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Also list placements that overflow the room or overlap
    #[arg(long)]
    check: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the layout service to furnish a room
    Generate {
        #[command(flatten)]
        room: RoomArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a saved layout response for a room
    Render {
        /// Layout JSON as returned by the service
        layout: PathBuf,

        #[command(flatten)]
        room: RoomArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the furniture catalog offered by the service
    Catalog,

    /// Render the built-in sample layout (no service needed)
    Sample {
        /// Print the built-in sample catalog instead of the layout
        #[arg(long)]
        catalog: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.apply_api_url(url.clone());
    }
    let palette = config.palette()?;

    match cli.command {
        Commands::Generate { room, output } => {
            let room = read_room(&room)?;
            let client = LayoutClient::new(config.api.base_url.clone(), config.timeout())?;

            let mut session = Session::new();
            let view = session.submit(&client, room).await?;
            match view {
                View::Layout(design) => present(&design.room, &design.layout, &palette, &output)?,
                View::Failed(message) => bail!("{}", message),
                View::Form => bail!("no layout was produced"),
            }
        }

        Commands::Render { layout, room, output } => {
            let room = read_room(&room)?;
            let layout = load_layout(&layout)?;
            present(&room, &layout, &palette, &output)?;
        }

        Commands::Catalog => {
            let client = LayoutClient::new(config.api.base_url.clone(), config.timeout())?;
            let items = client.list_furniture().await?;
            if items.is_empty() {
                println!("The service offers no furniture.");
            } else {
                print!("{}", format_catalog(&items));
            }
        }

        Commands::Sample { catalog, output } => {
            if catalog {
                print!("{}", format_catalog(&sample::sample_catalog()));
            } else {
                present(&sample::sample_room(), &sample::sample_layout(), &palette, &output)?;
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the raw arguments through the form, exactly as typed.
fn read_room(args: &RoomArgs) -> Result<RoomSpec> {
    let mut form = RoomForm::new();
    form.change(Field::Length, args.length.as_str());
    form.change(Field::Width, args.width.as_str());
    form.change(Field::Budget, args.budget.as_str());
    Ok(form.submit()?)
}

fn load_layout(path: &Path) -> Result<LayoutResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid layout JSON in {}", path.display()))
}

fn present(room: &RoomSpec, layout: &LayoutResult, palette: &Palette, output: &OutputArgs) -> Result<()> {
    let summary = reconcile(layout, room);
    let scene = Scene::build(room, layout, palette);

    println!("{}", format_report(room, layout, &summary, palette));
    println!("{}", scene.scale_legend());

    if output.check {
        let issues = placement_issues(layout, room);
        println!();
        if issues.is_empty() {
            println!("All placements fit without overlapping.");
        } else {
            println!("Placement notes:");
            for issue in issues {
                println!("  {}", issue);
            }
        }
    }

    if let Some(path) = &output.svg {
        fs::write(path, render_svg(&scene))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Floor plan written to {}", path.display());
    }

    Ok(())
}
