//! Generate mazes by growing random territories
//!
//! Territories start from seed points (the start and the end of the maze,
//! plus a few random ones) and grow into random neighbouring cells. Cells
//! that would create loops inside a territory become walls, and
//! territories that meet are fused together.
//!
//! # Examples
//! ```
//! use territory_maze::{CellView, MazeGenerator, Point};
//!
//! let mut maze = MazeGenerator::seeded(12, 8, Some(13)).unwrap();
//! maze.generate(Point::new(0, 0), Point::new(11, 7)).unwrap();
//! println!("{}", maze);
//!
//! let (paths, walls) = maze.stats();
//! assert_eq!(paths + walls, 12 * 8);
//! ```
//!
//! Reproducible mazes with an explicit random source:
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use territory_maze::{MazeGenerator, MergeStrategy, Point};
//!
//! let run = || {
//!     let mut maze = MazeGenerator::new(20, 20, StdRng::seed_from_u64(7))
//!         .unwrap()
//!         .with_merge_strategy(MergeStrategy::UnionFind);
//!     maze.generate(Point::new(0, 0), Point::new(19, 19)).unwrap();
//!     maze.grid().clone()
//! };
//! assert_eq!(run(), run());
//! ```

pub mod cell;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod grid;
pub mod maze_generator;
pub mod territory;

pub use cell::{Cell, Point};
pub use error::{MazeError, Result};
pub use grid::{CellView, Grid};
pub use maze_generator::{FrameSink, MazeGenerator};
pub use territory::MergeStrategy;
