//! Maze generation by territory growth
//!
//! Territories are grown from seed points in random order. A frontier cell
//! that touches a single territory on one side joins it, one that touches
//! the same territory on several sides becomes a wall, and one that touches
//! several territories fuses them. Finally territories turn into paths.

use itertools::Itertools;
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cell::{Cell, Point};
use crate::error::{MazeError, Result};
use crate::grid::{CellView, Grid};
use crate::territory::{DisjointSet, MergeStrategy};

/// Receiver of generation snapshots, e.g. for animations
pub trait FrameSink {
    fn save_frame<V: CellView>(&mut self, maze: &V) -> anyhow::Result<()>;
}

/// Discards all frames
impl FrameSink for () {
    fn save_frame<V: CellView>(&mut self, _maze: &V) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Territory-growing maze generator
pub struct MazeGenerator<R: Rng = StdRng> {
    random: R,
    grid: Grid,
    /// Frontier cells waiting to be processed, in no particular order
    queue: Vec<Point>,
    /// Seed points of the current run; territory ids are indices here
    points: Vec<Point>,
    strategy: MergeStrategy,
    territories: DisjointSet,
}

impl MazeGenerator<StdRng> {
    /// Generator with its own random source
    ///
    /// With `seed` set the result is reproducible, otherwise the random
    /// source is seeded from system entropy.
    pub fn seeded(width: usize, height: usize, seed: Option<u64>) -> Result<Self> {
        let random = if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        };
        Self::new(width, height, random)
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Snapshots of the blank grid, for animations
    pub const INITIAL_FRAMES: usize = 10;
    /// Snapshots right after seeding
    pub const SEEDED_FRAMES: usize = 10;
    /// Snapshots of the finished maze
    pub const FINAL_FRAMES: usize = 20;

    /// Create generator for a `width` x `height` maze
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(width: usize, height: usize, random: R) -> Result<Self> {
        Ok(Self {
            random,
            grid: Grid::new(width, height)?,
            queue: vec![],
            points: vec![],
            strategy: MergeStrategy::default(),
            territories: DisjointSet::new(),
        })
    }

    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Raw grid; with [MergeStrategy::UnionFind] territory ids are not
    /// resolved, query the generator itself for representative ids.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Seed points of the current run, caller supplied points first
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cells waiting in the frontier queue
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    /// Clear the grid, the frontier queue and the seed points
    pub fn reset(&mut self) {
        self.grid.clear();
        self.queue.clear();
        self.points.clear();
        self.territories.clear();
    }

    /// Number of random seed points added on top of the caller's points
    pub fn random_seed_count(&self) -> usize {
        (self.grid.width() / 10) * (self.grid.height() / 10)
    }

    /// Place seed points and queue their surroundings
    ///
    /// `points` are placed first, followed by [Self::random_seed_count]
    /// random points. Each point gets a territory id equal to its index;
    /// adjacent seeds are merged right away.
    ///
    /// Returns error without touching the grid, if any of `points` lies
    /// outside the maze.
    pub fn seed(&mut self, points: &[Point]) -> Result<()> {
        for &point in points {
            self.check_seed_point(point)?;
        }

        let mut points = points.to_vec();
        for _ in 0..self.random_seed_count() {
            points.push(Point {
                x: self.random.gen_range(0..self.grid.width()),
                y: self.random.gen_range(0..self.grid.height()),
            });
        }
        debug!(
            "Seeding {} points ({} random)",
            points.len(),
            self.random_seed_count()
        );

        let first_id = self.points.len();
        for (offset, &point) in points.iter().enumerate() {
            let id = first_id + offset;
            self.grid.set(point, Cell::Territory(id));
            self.territories.make_set(id);

            let neighbours: Vec<Point> = self.grid.neighbours(point).collect();
            for neighbour in neighbours {
                match self.territory_at(neighbour) {
                    Some(other) if other != id => self.merge(other, id),
                    _ => (),
                }
            }
        }

        for &point in &points {
            self.mark_adjacent(point);
        }
        self.points.extend(points);
        Ok(())
    }

    /// Process one random frontier cell
    ///
    /// Returns the processed location, or `None` when the queue is empty.
    pub fn step(&mut self) -> Option<Point> {
        if self.queue.is_empty() {
            return None;
        }
        let idx = self.random.gen_range(0..self.queue.len());
        let point = self.queue.swap_remove(idx);

        // Claimed by a seed placed after it was queued
        if self.grid.cell_at(point) != Cell::Frontier {
            return Some(point);
        }

        let neighbours: Vec<Point> = self.grid.neighbours(point).collect();
        let touching: Vec<usize> = neighbours
            .into_iter()
            .filter_map(|neighbour| self.territory_at(neighbour))
            .collect();
        let unique: Vec<usize> = touching.iter().copied().unique().collect();

        match unique.as_slice() {
            // Queued cells always border a territory
            [] => self.grid.set(point, Cell::Wall),
            // Opening this cell would close a loop inside the territory
            [_] if touching.len() > 1 => self.grid.set(point, Cell::Wall),
            [id] => {
                self.grid.set(point, Cell::Territory(*id));
                self.mark_adjacent(point);
            }
            [first, others @ ..] => {
                self.grid.set(point, Cell::Territory(*first));
                self.mark_adjacent(point);
                for &other in others {
                    self.merge(other, *first);
                }
            }
        }
        Some(point)
    }

    /// Process frontier cells until the queue is empty
    pub fn grow(&mut self) {
        while self.step().is_some() {}
    }

    /// Turn territories into paths and everything unclaimed into walls
    pub fn finalize(&mut self) {
        self.queue.clear();
        self.grid.map_cells(|cell| match cell {
            Cell::Territory(_) | Cell::Path => Cell::Path,
            Cell::Empty | Cell::Frontier | Cell::Wall => Cell::Wall,
        });
        let (paths, walls) = self.grid.stats();
        debug!("Finalized maze: {} paths, {} walls", paths, walls);
    }

    /// Generate a new maze layout connecting `start` to `end`
    ///
    /// Returns error before any work is done, if either point lies outside
    /// the maze.
    pub fn generate(&mut self, start: Point, end: Point) -> Result<()> {
        self.check_seed_point(start)?;
        self.check_seed_point(end)?;

        self.reset();
        self.seed(&[start, end])?;
        self.grow();
        self.finalize();
        Ok(())
    }

    /// Generate a new maze layout, sending snapshots of the process to `sink`
    ///
    /// The blank grid is repeated [Self::INITIAL_FRAMES] times, the seeded
    /// grid [Self::SEEDED_FRAMES] times, followed by one frame per growth
    /// step and [Self::FINAL_FRAMES] frames of the finished maze.
    pub fn generate_recorded<S: FrameSink>(
        &mut self,
        start: Point,
        end: Point,
        sink: &mut S,
    ) -> anyhow::Result<()> {
        self.check_seed_point(start)?;
        self.check_seed_point(end)?;

        self.reset();
        self.save_frames(sink, Self::INITIAL_FRAMES)?;
        self.seed(&[start, end])?;
        self.save_frames(sink, Self::SEEDED_FRAMES)?;
        while self.step().is_some() {
            sink.save_frame(&*self)?;
        }
        self.finalize();
        self.save_frames(sink, Self::FINAL_FRAMES)
    }

    fn save_frames<S: FrameSink>(&self, sink: &mut S, count: usize) -> anyhow::Result<()> {
        for _ in 0..count {
            sink.save_frame(self)?;
        }
        Ok(())
    }

    fn check_seed_point(&self, point: Point) -> Result<()> {
        if self.grid.contains(point) {
            Ok(())
        } else {
            Err(MazeError::InvalidSeedPoint {
                point,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }

    /// Representative territory id of the cell at `point`
    fn territory_at(&mut self, point: Point) -> Option<usize> {
        let id = self.grid.cell_at(point).territory()?;
        Some(match self.strategy {
            MergeStrategy::Relabel => id,
            MergeStrategy::UnionFind => self.territories.find(id),
        })
    }

    /// Fuse territory `from` into territory `into`
    fn merge(&mut self, from: usize, into: usize) {
        trace!("Merging territory {} into {}", from, into);
        match self.strategy {
            MergeStrategy::Relabel => self
                .grid
                .replace(Cell::Territory(from), Cell::Territory(into)),
            MergeStrategy::UnionFind => self.territories.union_into(from, into),
        }
    }

    /// Queue all empty neighbours of `point` as frontier
    fn mark_adjacent(&mut self, point: Point) {
        let neighbours: Vec<Point> = self.grid.neighbours(point).collect();
        for neighbour in neighbours {
            if self.grid.cell_at(neighbour) == Cell::Empty {
                self.grid.set(neighbour, Cell::Frontier);
                self.queue.push(neighbour);
            }
        }
    }
}

/// Cell states with territory ids resolved to their representative
impl<R: Rng> CellView for MazeGenerator<R> {
    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn cell_at(&self, point: Point) -> Cell {
        match self.grid.cell_at(point) {
            Cell::Territory(id) => Cell::Territory(self.territories.root(id)),
            cell => cell,
        }
    }
}

impl<R: Rng> std::fmt::Display for MazeGenerator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_text())
    }
}
