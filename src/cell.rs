use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One position of the grid
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Point2<usize>,
    marked: bool,
    visited: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize, marked: bool) -> Self {
        Self {
            position: Point2::new(x, y),
            marked,
            visited: false,
        }
    }

    pub fn x(&self) -> usize {
        self.position.x
    }

    pub fn y(&self) -> usize {
        self.position.y
    }

    pub fn position(&self) -> &Point2<usize> {
        &self.position
    }

    /// true if the cell holds an asteroid
    pub fn marked(&self) -> bool {
        self.marked
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use super::Cell;

    #[test]
    fn accessors_expose_position() {
        let mut cell = Cell::new(3, 7, true);
        assert_eq!(*cell.position(), Point2::new(3, 7));
        assert_eq!((cell.x(), cell.y()), (3, 7));
        assert!(cell.marked());
        assert!(!cell.visited());
        cell.visit();
        assert!(cell.visited());
    }
}
