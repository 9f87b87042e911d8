use crate::types::Line;
use serde::Serialize;

/// One table cell spanning `[x, x + width) × [y, y + height)` in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellRect {
    /// Index into the row coordinates (`ys`).
    pub row: usize,
    /// Index into the column coordinates (`xs`).
    pub col: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Sorted grid-line coordinates and the cells between consecutive pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    /// Vertical grid-line positions (columns), ascending.
    pub xs: Vec<i32>,
    /// Horizontal grid-line positions (rows), ascending.
    pub ys: Vec<i32>,
    /// Cells in row-major order.
    pub cells: Vec<CellRect>,
}

impl GridLayout {
    /// Build the layout from final horizontal and vertical families.
    pub fn from_families(horizontal: &[Line], vertical: &[Line]) -> Self {
        Self::from_coordinates(rho_coordinates(vertical), rho_coordinates(horizontal))
    }

    /// Build the layout from raw coordinates; both axes are sorted here.
    ///
    /// Fewer than two coordinates on either axis yields no cells.
    pub fn from_coordinates(mut xs: Vec<i32>, mut ys: Vec<i32>) -> Self {
        xs.sort_unstable();
        ys.sort_unstable();
        let mut cells = Vec::with_capacity(xs.len().saturating_sub(1) * ys.len().saturating_sub(1));
        for (row, yw) in ys.windows(2).enumerate() {
            for (col, xw) in xs.windows(2).enumerate() {
                cells.push(CellRect {
                    row,
                    col,
                    x: xw[0],
                    y: yw[0],
                    width: xw[1] - xw[0],
                    height: yw[1] - yw[0],
                });
            }
        }
        Self { xs, ys, cells }
    }

    pub fn rows(&self) -> usize {
        self.ys.len().saturating_sub(1)
    }

    pub fn cols(&self) -> usize {
        self.xs.len().saturating_sub(1)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellRect> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.cells.get(row * self.cols() + col)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Integer pixel coordinates of the lines' `rho`, truncated and sorted.
pub fn rho_coordinates(lines: &[Line]) -> Vec<i32> {
    let mut coords: Vec<i32> = lines.iter().map(|l| l.rho as i32).collect();
    coords.sort_unstable();
    coords
}
