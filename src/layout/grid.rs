//! Row-major 3-column grid of problem cells.
//!
//! Cell `i` lands in row `i / 3`, column `i % 3`. A short last row keeps
//! blank slots so columns stay aligned. Spacers separate rows (none after
//! the last); every sixth row is followed by a taller spacer so a natural
//! page break gets some breathing room.

use crate::constants::{GRID_COLUMNS, ROWS_PER_SECTION};
use crate::style::SheetStyle;

use super::cell::ProblemCell;
use super::DrawOp;

/// One grid row; `None` slots render nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
    pub slots: [Option<ProblemCell>; GRID_COLUMNS],
    height: f32,
    column_width: f32,
}

impl GridRow {
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.column_width * GRID_COLUMNS as f32
    }

    /// Draw with the row's top edge at `top`, centered in a frame that starts
    /// at `frame_left` and is `frame_width` wide. Cells are top-aligned and
    /// horizontally centered in their column.
    pub fn draw(&self, frame_left: f32, frame_width: f32, top: f32) -> Vec<DrawOp> {
        let grid_left = frame_left + (frame_width - self.width()) / 2.0;
        let inset = (self.column_width - ProblemCell::width()) / 2.0;
        let mut ops = Vec::new();
        for (col, slot) in self.slots.iter().enumerate() {
            if let Some(cell) = slot {
                let left = grid_left + col as f32 * self.column_width + inset;
                ops.extend(cell.draw(left, top));
            }
        }
        ops
    }
}

/// A grid row or the vertical gap after one.
#[derive(Clone, Debug, PartialEq)]
pub enum GridItem {
    Row(GridRow),
    Spacer(f32),
}

/// Number of grid rows needed for `cells` problems.
pub fn row_count(cells: usize) -> usize {
    cells.div_ceil(GRID_COLUMNS)
}

/// Arrange cells into rows interleaved with spacers.
pub fn build_grid(cells: Vec<ProblemCell>, style: &SheetStyle) -> Vec<GridItem> {
    let rows = row_count(cells.len());
    let mut items = Vec::with_capacity(rows * 2);
    let mut cells = cells.into_iter();

    for i in 0..rows {
        let slots: [Option<ProblemCell>; GRID_COLUMNS] = std::array::from_fn(|_| cells.next());
        items.push(GridItem::Row(GridRow {
            slots,
            height: style.problem_row_height,
            column_width: style.grid_column_width,
        }));

        if i + 1 < rows {
            let height = if (i + 1) % ROWS_PER_SECTION == 0 {
                style.section_spacer_height
            } else {
                style.spacer_row_height
            };
            items.push(GridItem::Spacer(height));
        }
    }
    items
}
