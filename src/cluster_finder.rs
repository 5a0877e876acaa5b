use std::collections::VecDeque;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Connected group of asteroid cells found by one traversal
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Cluster {
    seed: Point2<usize>,
    cells: Vec<Point2<usize>>,
}

impl Cluster {
    /// cell the traversal started from
    pub fn seed(&self) -> &Point2<usize> {
        &self.seed
    }

    /// cells in the order they were dequeued
    pub fn cells(&self) -> &Vec<Point2<usize>> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Partitions the marked cells of a grid into 8-connected clusters
#[derive(Debug, Clone, Default)]
pub struct ClusterFinder;

impl ClusterFinder {
    pub fn new() -> Self {
        Self
    }

    /// Returns the size of each cluster in discovery order
    pub fn find_clusters(&self, grid: &mut Grid) -> Vec<usize> {
        self.find(grid).iter().map(Cluster::len).collect()
    }

    /// Breadth first traversal seeded from every unvisited marked cell in
    /// row-major order.
    ///
    /// A cell is flagged as visited right before it is enqueued, not after it is
    /// dequeued, so a cell reachable from several queued cells enters the queue once.
    pub fn find(&self, grid: &mut Grid) -> Vec<Cluster> {
        let seeds: Vec<Point2<usize>> = grid.marked_cells().map(|c| *c.position()).collect();
        let mut queue = VecDeque::with_capacity(seeds.len());
        let mut clusters = vec![];

        for seed in seeds {
            if grid.cell_at(&seed).visited() {
                continue;
            }

            grid.visit(&seed);
            queue.push_back(seed);

            let mut cells = vec![];
            while let Some(current) = queue.pop_front() {
                cells.push(current);
                for neighbor in grid.marked_neighbors_of(&current) {
                    grid.visit(&neighbor);
                    queue.push_back(neighbor);
                }
            }

            clusters.push(Cluster { seed, cells });
        }

        clusters
    }
}
