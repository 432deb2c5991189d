//! "Name / Score" header row at the top of the first page.

use crate::constants::{CELL_PADDING_Y, NAME_PLACEHOLDER, SCORE_PLACEHOLDER};
use crate::style::SheetStyle;
use crate::types::{FontFace, Rgb, TextRun};

use super::{centered_baseline, push_runs, DrawOp};

/// Two left-aligned placeholders, each in half of the frame width.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderRow {
    cells: [TextRun; 2],
    font_size: f32,
    column_width: f32,
}

impl HeaderRow {
    pub fn new(style: &SheetStyle) -> Self {
        let run = |text: &str| TextRun::new(text, Rgb::BLACK, FontFace::TimesRoman);
        Self {
            cells: [run(NAME_PLACEHOLDER), run(SCORE_PLACEHOLDER)],
            font_size: style.header_font_size,
            column_width: style.geometry.frame_width() / 2.0,
        }
    }

    pub fn height(&self) -> f32 {
        self.font_size * 1.2 + 2.0 * CELL_PADDING_Y
    }

    pub fn draw(&self, left: f32, top: f32) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(self.cells.len());
        let baseline = centered_baseline(top, self.height(), self.font_size);
        for (col, run) in self.cells.iter().enumerate() {
            let x = left + col as f32 * self.column_width;
            push_runs(&mut ops, std::slice::from_ref(run), x, baseline, self.font_size);
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_cells_split_the_frame() {
        let style = SheetStyle::default();
        let header = HeaderRow::new(&style);
        let ops = header.draw(60.0, 732.0);
        assert_eq!(ops.len(), 2);
        let xs: Vec<f32> = ops
            .iter()
            .map(|op| match op {
                DrawOp::Text { x, .. } => *x,
                DrawOp::Rule { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![60.0, 60.0 + 246.0]);
    }

    #[test]
    fn test_header_text_is_vertically_inside_row() {
        let header = HeaderRow::new(&SheetStyle::default());
        for op in header.draw(60.0, 732.0) {
            if let DrawOp::Text { y, run, .. } = op {
                assert!(y < 732.0 && y > 732.0 - header.height());
                assert!(run.text.starts_with("Name:") || run.text.starts_with("Score:"));
            }
        }
    }
}
