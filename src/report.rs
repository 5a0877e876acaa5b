use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Summary of one analysis pass
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub width: usize,
    pub height: usize,
    /// number of asteroid cells in the grid
    pub marked: usize,
    /// cluster sizes, ascending
    pub sizes: Vec<usize>,
    pub largest: Option<usize>,
}

impl Report {
    pub fn new(grid: &Grid, sizes: Vec<usize>) -> Self {
        let sizes = sizes.into_iter().sorted().collect_vec();
        let largest = sizes.last().copied();
        Self {
            width: grid.width(),
            height: grid.height(),
            marked: grid.marked_count(),
            sizes,
            largest,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.largest {
            Some(largest) => {
                writeln!(
                    f,
                    "Found asteroids of length: [{}]",
                    self.sizes.iter().join(", ")
                )?;
                write!(f, "Largest: {}", largest)
            }
            None => write!(f, "No asteroids were found."),
        }
    }
}
