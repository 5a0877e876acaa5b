use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;

use crate::{cell::Cell, error::ShapeError};

/// character marking an asteroid cell unless told otherwise
pub const DEFAULT_MARKER: char = '%';

//                  |
//      (-1,-1)*  (0,-1)  *(1,-1)
//                  |
//  ----(-1, 0)*----+----*(1, 0)----
//                  |
//      (-1, 1)*  (0, 1)  *(1, 1)
//                  |
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Rectangular field of cells stored in row-major order
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    marker: char,
    cells: Vec<Cell>,
    /// flat indices of marked cells, row-major
    marked: Vec<usize>,
}

impl Grid {
    /// Builds a grid from lines using [`DEFAULT_MARKER`].
    ///
    /// All lines must be of the same length, e.g.
    /// ```
    /// use asteroid_field::prelude::Grid;
    ///
    /// let grid = Grid::from_lines(&[
    ///     "................",
    ///     "....%.......%...",
    ///     "....%%..........",
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.width(), 16);
    /// assert_eq!(grid.marked_count(), 4);
    /// ```
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, ShapeError> {
        Self::from_lines_with_marker(lines, DEFAULT_MARKER)
    }

    /// Builds a grid where `marker` denotes an asteroid cell.
    /// An empty input yields a 0x0 grid.
    pub fn from_lines_with_marker<S: AsRef<str>>(
        lines: &[S],
        marker: char,
    ) -> Result<Self, ShapeError> {
        let width = lines
            .first()
            .map(|line| line.as_ref().chars().count())
            .unwrap_or(0);
        let height = lines.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut marked = vec![];

        for (y, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ShapeError::new(y, width, found));
            }

            for (x, c) in line.chars().enumerate() {
                let is_marked = c == marker;
                if is_marked {
                    marked.push(cells.len());
                }
                cells.push(Cell::new(x, y, is_marked));
            }
        }

        Ok(Self {
            width,
            height,
            marker,
            cells,
            marked,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Marked cells in row-major order (y first, then x)
    pub fn marked_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.marked.iter().map(|&i| &self.cells[i])
    }

    fn index(&self, position: &Point2<usize>) -> usize {
        position.y * self.width + position.x
    }

    /// Returns the cell at `position`.
    /// Panics when `position` is outside of the grid.
    pub fn cell_at(&self, position: &Point2<usize>) -> &Cell {
        &self.cells[self.index(position)]
    }

    /// Flags the cell at `position` as visited
    pub fn visit(&mut self, position: &Point2<usize>) {
        let i = self.index(position);
        self.cells[i].visit();
    }

    /// Positions around `position` holding an asteroid that is not visited yet.
    ///
    /// The visited flag is read at call time, and the result follows the fixed
    /// order `(1,0),(1,1),(0,1),(-1,1),(-1,0),(-1,-1),(0,-1),(1,-1)`.
    pub fn marked_neighbors_of(&self, position: &Point2<usize>) -> Vec<Point2<usize>> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|(dx, dy)| {
                let x = position.x.checked_add_signed(*dx)?;
                let y = position.y.checked_add_signed(*dy)?;
                if x < self.width && y < self.height {
                    Some(Point2::new(x, y))
                } else {
                    None
                }
            })
            .filter(|p| {
                let cell = self.cell_at(p);
                cell.marked() && !cell.visited()
            })
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        Self::from_lines(&lines)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for cell in &self.cells[y * self.width..(y + 1) * self.width] {
                if cell.marked() {
                    write!(f, "[{}]", self.marker)?;
                } else {
                    write!(f, " . ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use super::Grid;

    #[test]
    fn marked_cells_are_row_major() {
        let grid = Grid::from_lines(&[".%.%", "%...", "..%."]).unwrap();
        let order: Vec<(usize, usize)> = grid.marked_cells().map(|c| (c.x(), c.y())).collect();
        assert_eq!(order, vec![(1, 0), (3, 0), (0, 1), (2, 2)]);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn mismatched_lines_fail() {
        let err = Grid::from_lines(&["%....", "..%...", "....."]).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.expected, 5);
        assert_eq!(err.found, 6);
    }

    #[test]
    fn shorter_line_fails() {
        let err = Grid::from_lines(&["%%%", "%%%", "%%"]).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.found, 2);
    }

    #[test]
    fn empty_input_is_empty_grid() {
        let lines: [&str; 0] = [];
        let grid = Grid::from_lines(&lines).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.marked_count(), 0);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn custom_marker() {
        let grid = Grid::from_lines_with_marker(&["#%", "%#"], '#').unwrap();
        assert_eq!(grid.marker(), '#');
        assert!(grid.cell_at(&Point2::new(0, 0)).marked());
        assert!(!grid.cell_at(&Point2::new(1, 0)).marked());
        assert_eq!(grid.marked_count(), 2);
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let grid = Grid::from_lines(&["%%%", "%%%", "%%%"]).unwrap();
        let neighbors = grid.marked_neighbors_of(&Point2::new(1, 1));
        assert_eq!(
            neighbors,
            vec![
                Point2::new(2, 1),
                Point2::new(2, 2),
                Point2::new(1, 2),
                Point2::new(0, 2),
                Point2::new(0, 1),
                Point2::new(0, 0),
                Point2::new(1, 0),
                Point2::new(2, 0),
            ]
        );
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = Grid::from_lines(&["%%", "%%"]).unwrap();
        let corner = grid.marked_neighbors_of(&Point2::new(0, 0));
        assert_eq!(
            corner,
            vec![Point2::new(1, 0), Point2::new(1, 1), Point2::new(0, 1)]
        );
        let opposite = grid.marked_neighbors_of(&Point2::new(1, 1));
        assert_eq!(
            opposite,
            vec![Point2::new(0, 1), Point2::new(0, 0), Point2::new(1, 0)]
        );
    }

    #[test]
    fn neighbors_skip_empty_and_visited() {
        let mut grid = Grid::from_lines(&["%.%", ".%.", "..%"]).unwrap();
        let center = Point2::new(1, 1);
        assert_eq!(grid.marked_neighbors_of(&center).len(), 3);

        grid.visit(&Point2::new(2, 2));
        assert_eq!(
            grid.marked_neighbors_of(&center),
            vec![Point2::new(0, 0), Point2::new(2, 0)]
        );
        assert!(grid.cell_at(&Point2::new(2, 2)).visited());
    }

    #[test]
    fn lonely_cell_has_no_neighbors() {
        let grid = Grid::from_lines(&["...", ".%.", "..."]).unwrap();
        assert!(grid.marked_neighbors_of(&Point2::new(1, 1)).is_empty());
    }

    #[test]
    fn parse_from_str() {
        let grid: Grid = "%.\n.%\n".parse().unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.marked_count(), 2);
        assert!("%.\n.%%".parse::<Grid>().is_err());
    }

    #[test]
    fn display_brackets_marked_cells() {
        let grid = Grid::from_lines(&["%.", ".%"]).unwrap();
        assert_eq!(grid.to_string(), "[%] . \n . [%]\n");
    }

    #[test]
    fn display_keeps_blank_rows() {
        let grid = Grid::from_lines(&["", ""]).unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "\n\n");
    }
}
