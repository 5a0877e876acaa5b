use anyhow::{ensure, Context};
use asteroid_field::prelude::{Cluster, ClusterFinder, Encoder, Grid, Report, DEFAULT_MARKER};
use clap::Parser;
use image::DynamicImage;
use tokio::io::{AsyncRead, AsyncReadExt};

use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// grid file to be analyzed (read from stdin if omitted)
    #[clap(long)]
    input: Option<PathBuf>,

    /// character marking an asteroid cell
    #[clap(long, default_value_t = DEFAULT_MARKER)]
    marker: char,

    /// print the report as json
    #[clap(long)]
    json: bool,

    /// print the grid before the report
    #[clap(long, conflicts_with = "json")]
    print_grid: bool,

    /// png file name to render the clusters into
    #[clap(long)]
    image: Option<PathBuf>,

    /// pixel size of a cell in the rendered image
    #[clap(long, default_value_t = 8)]
    scale: u32,
}

/// Reads the grid lines from `input`, or from stdin when it is `None`
pub async fn read_lines(input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    match input {
        Some(path) => {
            ensure!(
                path.exists(),
                "input file {:?} is not existed!",
                path.to_string_lossy()
            );
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_from(file)
                .await
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => read_from(tokio::io::stdin())
            .await
            .context("failed to read stdin"),
    }
}

pub async fn read_from<R: AsyncRead + Unpin>(mut reader: R) -> anyhow::Result<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    Ok(text.lines().map(String::from).collect())
}

pub fn analyze(lines: &[String], marker: char) -> anyhow::Result<(Grid, Vec<Cluster>)> {
    let mut grid = Grid::from_lines_with_marker(lines, marker)?;
    let clusters = ClusterFinder::new().find(&mut grid);
    Ok((grid, clusters))
}

/// Runs one analysis and writes everything meant for stdout into `out`.
/// With `--json` the only thing written is the report.
fn run<W: Write>(args: &Args, lines: &[String], out: &mut W) -> anyhow::Result<()> {
    let verbose = !args.json;

    if verbose {
        writeln!(out, "start processing... ({} lines)", lines.len())?;
    }

    let (grid, clusters) = analyze(lines, args.marker)?;
    let report = Report::new(&grid, clusters.iter().map(Cluster::len).collect());

    if args.print_grid && verbose {
        write!(out, "{}", grid)?;
    }

    if let Some(path) = &args.image {
        ensure!(!grid.is_empty(), "cannot render an empty grid");
        let img = Encoder::new(&grid, args.scale).encode_clusters(&clusters)?;
        DynamicImage::from(img)
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to save {}", path.display()))?;
        if verbose {
            writeln!(out, "image saved to {}", path.display())?;
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{}", report)?;
    }

    Ok(())
}

async fn handler() -> anyhow::Result<()> {
    let args: Args = Args::parse();
    let lines = read_lines(args.input.as_deref()).await?;
    run(&args, &lines, &mut std::io::stdout().lock())
}

#[tokio::main]
async fn main() {
    if let Err(e) = handler().await {
        eprintln!("error: {:?}", e);
        std::process::exit(1);
    }
}
