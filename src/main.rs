use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paletteswap::models::AppConfig;
use paletteswap::services::{SwapOutcome, SwapPipeline, SwapRequest};

#[derive(Parser)]
#[command(name = "paletteswap")]
#[command(about = "Swap every color of an image for the color at the same position in a new palette")]
struct Cli {
    /// Image to recolor (PNG)
    base: PathBuf,

    /// Destination palette: a text file of R,G,B,A lines, or a PNG whose
    /// colors are read left to right, top to bottom
    palette: Option<PathBuf>,

    /// Output file (default from config: swapped_image.png)
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Write a strip of the base image's palette to this PNG
    #[arg(long, value_name = "PATH")]
    old_palette: Option<PathBuf>,

    /// Write a strip of the destination palette to this PNG
    #[arg(long, value_name = "PATH")]
    new_palette: Option<PathBuf>,

    /// Continue with the swap after writing palette strips
    #[arg(short, long)]
    long: bool,

    /// YAML config file (falls back to $PALETTESWAP_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paletteswap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());
    let pipeline = SwapPipeline::new(config);

    let request = SwapRequest {
        base: cli.base,
        palette: cli.palette,
        dest: cli.dest,
        old_palette_strip: cli.old_palette,
        new_palette_strip: cli.new_palette,
        long: cli.long,
    };

    match pipeline.run(&request)? {
        SwapOutcome::StripsOnly => {
            println!("Wrote palette strips (use --long to also swap colors)");
        }
        SwapOutcome::Swapped { dest, colors, kept } => {
            println!(
                "Swapped {} colors ({} kept) -> {}",
                colors - kept,
                kept,
                dest.display()
            );
        }
    }

    Ok(())
}
