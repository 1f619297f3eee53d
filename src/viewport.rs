//! Mapping between play-field units and terminal cells.

use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field_width: f32,
    pub field_height: f32,
}

/// A rectangle snapped to the terminal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field_width: f32, field_height: f32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            field_width,
            field_height,
        }
    }

    fn sx(&self) -> f32 {
        self.cols as f32 / self.field_width
    }

    fn sy(&self) -> f32 {
        self.rows as f32 / self.field_height
    }

    /// Cell containing the field point, clamped onto the screen.
    pub fn to_cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x * self.sx()).floor().clamp(0.0, (self.cols - 1) as f32);
        let row = (y * self.sy()).floor().clamp(0.0, (self.rows - 1) as f32);
        (col as u16, row as u16)
    }

    /// Centre of a cell in field units.  Used for mouse clicks.
    pub fn to_field(&self, col: u16, row: u16) -> (f32, f32) {
        (
            cell_centre(col, self.cols, self.field_width),
            cell_centre(row, self.rows, self.field_height),
        )
    }

    /// Snap a field rectangle to the cells whose centres lie inside it, so
    /// every drawn cell maps back into the rectangle through `to_field`.
    /// Always at least one cell in each direction so small items stay
    /// visible.
    pub fn to_cells(&self, rect: &Rect) -> CellRect {
        let (col, width) = span(rect.x, rect.w, self.cols, self.field_width);
        let (row, height) = span(rect.y, rect.h, self.rows, self.field_height);
        CellRect {
            col,
            row,
            width,
            height,
        }
    }
}

fn cell_centre(index: u16, cells: u16, field: f32) -> f32 {
    (index as f32 + 0.5) * field / cells as f32
}

/// First cell and cell count covering the half-open range `[lo, lo + len)`
/// along one axis.
fn span(lo: f32, len: f32, cells: u16, field: f32) -> (u16, u16) {
    let hi = lo + len;
    let last = cells - 1;
    let guess = (lo * cells as f32 / field - 0.5).ceil();
    let mut start = guess.clamp(0.0, last as f32) as u16;

    // Settle float noise against the exact centre test.
    while start > 0 && cell_centre(start - 1, cells, field) >= lo {
        start -= 1;
    }
    while start < last && cell_centre(start, cells, field) < lo {
        start += 1;
    }

    let mut end = start;
    while end < cells && cell_centre(end, cells, field) < hi {
        end += 1;
    }
    (start, (end - start).max(1))
}
