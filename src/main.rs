//! CLI for maze generation

#[cfg(feature = "export")]
use std::path::PathBuf;

use clap::Parser;
use log::info;
use territory_maze::{CellView, MazeGenerator, MergeStrategy, Point};

/// Maze generator growing random territories
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    width: usize,

    /// Maze height in cells
    height: usize,

    /// Start point x coordinate
    x_start: usize,

    /// Start point y coordinate
    y_start: usize,

    /// End point x coordinate
    x_end: usize,

    /// End point y coordinate
    y_end: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// How meeting territories are fused
    #[arg(long, value_enum, default_value_t = MergeStrategy::Relabel)]
    merge: MergeStrategy,

    /// Save the maze as a PNG image
    #[cfg(feature = "export")]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory, where to save numbered PNG frames of the generation
    #[cfg(feature = "export")]
    #[arg(short, long)]
    frames: Option<PathBuf>,

    /// Image pixels per maze cell
    #[cfg(feature = "export")]
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=256))]
    scale: u32,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Point::new(args.x_start, args.y_start);
    let end = Point::new(args.x_end, args.y_end);
    let mut maze =
        MazeGenerator::seeded(args.width, args.height, args.seed)?.with_merge_strategy(args.merge);
    info!(
        "Generating {}x{} maze from {} to {}",
        args.width, args.height, start, end
    );

    generate(&mut maze, start, end, &args)?;

    println!("{}", maze);
    let (paths, walls) = maze.stats();
    println!("Paths: {}\nWalls: {}", paths, walls);

    #[cfg(feature = "export")]
    if let Some(path) = &args.output {
        territory_maze::export::save_image(&maze, path, args.scale)?;
        println!("Saved maze as {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "export")]
fn generate(
    maze: &mut MazeGenerator,
    start: Point,
    end: Point,
    args: &Args,
) -> anyhow::Result<()> {
    if let Some(dir) = &args.frames {
        let mut writer = territory_maze::export::FrameWriter::new(dir, args.scale)?;
        maze.generate_recorded(start, end, &mut writer)?;
        info!("Saved {} frames in {}", writer.count(), dir.display());
    } else {
        maze.generate(start, end)?;
    }
    Ok(())
}

#[cfg(not(feature = "export"))]
fn generate(
    maze: &mut MazeGenerator,
    start: Point,
    end: Point,
    _args: &Args,
) -> anyhow::Result<()> {
    maze.generate(start, end)?;
    Ok(())
}
