//! PNG rendering of mazes and generation frames

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use image::{ImageFormat, Rgb, RgbImage};
use log::debug;

use crate::cell::{Cell, Point};
use crate::grid::CellView;
use crate::maze_generator::FrameSink;

/// Largest image side in pixels
pub const MAX_IMAGE_SIDE: u32 = 8192;

const C_WALL: Rgb<u8> = Rgb([32, 32, 32]);
const C_PATH: Rgb<u8> = Rgb([245, 245, 245]);
const C_EMPTY: Rgb<u8> = Rgb([190, 190, 190]);
const C_FRONTIER: Rgb<u8> = Rgb([120, 120, 120]);

/// Territory tints, picked by territory id
const C_TERRITORIES: [Rgb<u8>; 8] = [
    Rgb([230, 97, 1]),
    Rgb([94, 60, 153]),
    Rgb([27, 158, 119]),
    Rgb([217, 95, 2]),
    Rgb([231, 41, 138]),
    Rgb([102, 166, 30]),
    Rgb([230, 171, 2]),
    Rgb([31, 120, 180]),
];

/// Display color of a cell
pub fn cell_color(cell: Cell) -> Rgb<u8> {
    match cell {
        Cell::Empty => C_EMPTY,
        Cell::Frontier => C_FRONTIER,
        Cell::Territory(id) => C_TERRITORIES[id % C_TERRITORIES.len()],
        Cell::Wall => C_WALL,
        Cell::Path => C_PATH,
    }
}

/// Pixel length of an image side covering `cells` cells plus the border
fn image_side(cells: usize, scale: u32) -> anyhow::Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_add(2))
        .and_then(|cells| cells.checked_mul(scale))
        .filter(|&side| side <= MAX_IMAGE_SIDE)
        .ok_or_else(|| {
            anyhow!(
                "{} cells at scale {} exceed the image limit of {} pixels",
                cells,
                scale,
                MAX_IMAGE_SIDE
            )
        })
}

/// Draw the maze with a one cell wall border, `scale` pixels per cell
///
/// Returns error, if the image would be larger than [MAX_IMAGE_SIDE] in
/// either direction.
pub fn render_image(maze: &impl CellView, scale: u32) -> anyhow::Result<RgbImage> {
    let scale = scale.max(1);
    let width = maze.width();
    let height = maze.height();
    let img = RgbImage::from_fn(
        image_side(width, scale)?,
        image_side(height, scale)?,
        |px, py| {
            let cx = (px / scale) as usize;
            let cy = (py / scale) as usize;
            if cx == 0 || cy == 0 || cx > width || cy > height {
                C_WALL
            } else {
                cell_color(maze.cell_at(Point { x: cx - 1, y: cy - 1 }))
            }
        },
    );
    Ok(img)
}

/// Save a PNG image of the maze in `path`
pub fn save_image(maze: &impl CellView, path: &Path, scale: u32) -> anyhow::Result<()> {
    render_image(maze, scale)
        .with_context(|| format!("Could not render image {}", path.display()))?
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Could not write image {}", path.display()))
}

/// Writes every received frame as a numbered PNG into a directory
///
/// File names are the zero-padded frame counter, `00000000.png` first.
pub struct FrameWriter {
    dir: PathBuf,
    scale: u32,
    count: usize,
}

impl FrameWriter {
    /// Create frame writer, creating `dir` if it does not exist
    pub fn new(dir: impl Into<PathBuf>, scale: u32) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create frame directory {}", dir.display()))?;
        Ok(Self {
            dir,
            scale,
            count: 0,
        })
    }

    /// Number of frames written so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{:08}.png", index))
    }
}

impl FrameSink for FrameWriter {
    fn save_frame<V: CellView>(&mut self, maze: &V) -> anyhow::Result<()> {
        let path = self.frame_path(self.count);
        save_image(maze, &path, self.scale)?;
        self.count += 1;
        if self.count % 100 == 0 {
            debug!("Wrote {} frames to {}", self.count, self.dir.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::GenericImageView;

    use super::{cell_color, render_image, save_image, FrameWriter, C_PATH, C_WALL, MAX_IMAGE_SIDE};
    use crate::{Cell, FrameSink, Grid, MazeGenerator, Point};

    #[test]
    fn image_has_wall_border() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.map_cells(|_| Cell::Path);
        grid.set(Point::new(2, 1), Cell::Wall);

        let img = render_image(&grid, 4).unwrap();
        assert_eq!(img.dimensions(), (20, 16));
        assert_eq!(*img.get_pixel(0, 0), C_WALL);
        assert_eq!(*img.get_pixel(19, 15), C_WALL);
        // Cell (0, 0) starts one cell in
        assert_eq!(*img.get_pixel(4, 4), C_PATH);
        assert_eq!(*img.get_pixel(7, 7), C_PATH);
        // Cell (2, 1)
        assert_eq!(*img.get_pixel(13, 9), C_WALL);
    }

    #[test]
    fn zero_scale_draws_single_pixels() {
        let grid = Grid::new(5, 1).unwrap();
        assert_eq!(render_image(&grid, 0).unwrap().dimensions(), (7, 3));
    }

    #[test]
    fn territories_are_tinted() {
        assert_ne!(cell_color(Cell::Territory(0)), cell_color(Cell::Territory(1)));
        assert_ne!(cell_color(Cell::Territory(0)), cell_color(Cell::Path));
        assert_eq!(cell_color(Cell::Territory(2)), cell_color(Cell::Territory(10)));
    }

    #[test]
    fn frames_are_numbered() {
        let dir = std::env::temp_dir().join(format!("territory-maze-frames-{}", std::process::id()));
        let mut writer = FrameWriter::new(&dir, 2).unwrap();
        let mut gen = MazeGenerator::seeded(3, 3, Some(0)).unwrap();
        gen.generate(Point::new(0, 0), Point::new(2, 2)).unwrap();

        writer.save_frame(&gen).unwrap();
        writer.save_frame(&gen).unwrap();
        assert_eq!(writer.count(), 2);
        assert!(dir.join("00000000.png").is_file());
        assert!(dir.join("00000001.png").is_file());
        assert!(!dir.join("00000002.png").exists());

        let img = image::open(dir.join("00000001.png")).unwrap();
        assert_eq!(img.dimensions(), (10, 10));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn oversized_image_is_an_error() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(render_image(&grid, 1_000_000_000).is_err());
        assert!(render_image(&grid, u32::MAX).is_err());
        assert!(render_image(&grid, MAX_IMAGE_SIDE / 5 + 1).is_err());

        let widest = Grid::new(MAX_IMAGE_SIDE as usize - 2, 1).unwrap();
        assert_eq!(
            render_image(&widest, 1).unwrap().dimensions(),
            (MAX_IMAGE_SIDE, 3)
        );
        let too_wide = Grid::new(MAX_IMAGE_SIDE as usize - 1, 1).unwrap();
        assert!(render_image(&too_wide, 1).is_err());
    }

    #[test]
    fn oversized_frames_are_reported() {
        let dir = std::env::temp_dir().join(format!("territory-maze-large-{}", std::process::id()));
        let grid = Grid::new(3, 3).unwrap();

        let path = dir.join("maze.png");
        fs::create_dir_all(&dir).unwrap();
        assert!(save_image(&grid, &path, 1_000_000_000).is_err());
        assert!(!path.exists());

        let mut writer = FrameWriter::new(&dir, 1_000_000_000).unwrap();
        assert!(writer.save_frame(&grid).is_err());
        assert_eq!(writer.count(), 0);
        assert!(!writer.frame_path(0).exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
