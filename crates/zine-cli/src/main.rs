use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "zinef",
    about = "Reorder a sequential PDF into a fold-ready zine booklet",
    version
)]
struct Cli {
    /// Input PDF file in sequential reading order
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = "zine-print-ready.pdf")]
    output: PathBuf,

    /// Where blank filler pages are inserted
    #[arg(short, long, default_value = "end", value_enum)]
    fill_position: FillArg,

    /// Output paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Output orientation
    #[arg(long, default_value = "landscape", value_enum)]
    orientation: OrientationArg,

    /// Scaling mode for source pages
    #[arg(long, default_value = "fit", value_enum)]
    scaling: ScalingArg,

    /// Skip the fold guide on the first sheet
    #[arg(long)]
    no_guide: bool,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FillArg {
    /// Blanks trail after the last page
    End,
    /// Blanks go before the last page, keeping it as the back cover
    BeforeLast,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScalingArg {
    Fit,
    Fill,
    None,
    Stretch,
}

impl From<FillArg> for zine_impose::FillPosition {
    fn from(arg: FillArg) -> Self {
        match arg {
            FillArg::End => Self::End,
            FillArg::BeforeLast => Self::BeforeLast,
        }
    }
}

impl From<PaperArg> for zine_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for zine_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<ScalingArg> for zine_impose::ScalingMode {
    fn from(arg: ScalingArg) -> Self {
        match arg {
            ScalingArg::Fit => Self::Fit,
            ScalingArg::Fill => Self::Fill,
            ScalingArg::None => Self::None,
            ScalingArg::Stretch => Self::Stretch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let options = zine_impose::ImpositionOptions {
        input_file: cli.input.clone(),
        fill_position: cli.fill_position.into(),
        output_paper_size: cli.paper.into(),
        output_orientation: cli.orientation.into(),
        scaling_mode: cli.scaling.into(),
        fold_guide: !cli.no_guide,
    };

    // Load the input PDF
    let document = zine_impose::load_pdf(&cli.input).await?;

    // Calculate and show statistics
    let stats = zine_impose::calculate_statistics(&document, &options)?;
    println!("Imposition Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Filler pages: {}", stats.filler_pages);
    println!("  Output sheets: {}", stats.output_sheets);

    if cli.stats_only {
        return Ok(());
    }

    // Perform imposition
    let imposed = zine_impose::impose(&document, &options).await?;
    zine_impose::save_pdf(imposed, &cli.output).await?;
    println!("Imposed → {}", cli.output.display());

    Ok(())
}
