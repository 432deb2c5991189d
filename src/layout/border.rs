//! Colorful florette border drawn around every page.
//!
//! The florette repeats along all four margins with a step of 1.5 × its
//! advance width. Colors cycle through the 8-entry border palette by position;
//! the horizontal run (top + bottom) and the vertical run (left + right) each
//! start at palette index 0.

use crate::constants::{
    BORDER_HORIZONTAL_OFFSET, BORDER_LEFT_OFFSET, BORDER_RIGHT_OFFSET, BORDER_STEP_FACTOR,
};
use crate::metrics::{string_width, FLORETTE_CODE};
use crate::style::{PageGeometry, SheetStyle};
use crate::types::{FontFace, Rgb, TextRun};

use super::flow::PageDecorator;
use super::{DrawOp, Page};

pub struct FloretteBorder {
    palette: [Rgb; 8],
    size: f32,
    symbol_width: f32,
}

impl FloretteBorder {
    pub fn new(style: &SheetStyle) -> Self {
        let size = style.border_symbol_size;
        Self {
            palette: style.border_palette,
            size,
            symbol_width: string_width(
                &FLORETTE_CODE.to_string(),
                FontFace::ZapfDingbats,
                size,
            ),
        }
    }

    pub fn symbol_width(&self) -> f32 {
        self.symbol_width
    }

    pub fn step(&self) -> f32 {
        self.symbol_width * BORDER_STEP_FACTOR
    }

    /// X positions for the top and bottom runs.
    pub fn horizontal_positions(&self, g: &PageGeometry) -> Vec<f32> {
        let w = self.symbol_width;
        let end = g.width - g.right_margin + w / 2.0;
        positions(g.left_margin - w / 2.0, end, self.step())
    }

    /// Y positions for the left and right runs.
    pub fn vertical_positions(&self, g: &PageGeometry) -> Vec<f32> {
        let end = g.height - g.top_margin + self.symbol_width;
        positions(g.bottom_margin, end, self.step())
    }

    fn glyph(&self, index: usize, x: f32, y: f32) -> DrawOp {
        let color = self.palette[index % self.palette.len()];
        DrawOp::Text {
            x,
            y,
            size: self.size,
            run: TextRun::new(FLORETTE_CODE.to_string(), color, FontFace::ZapfDingbats),
        }
    }
}

fn positions(start: f32, end: f32, step: f32) -> Vec<f32> {
    let mut out = Vec::new();
    if step <= 0.0 {
        return out;
    }
    let mut current = start;
    while current < end {
        out.push(current);
        current += step;
    }
    out
}

impl PageDecorator for FloretteBorder {
    fn decorate(&self, page: &mut Page, g: &PageGeometry) {
        let top_y = g.height - g.top_margin + BORDER_HORIZONTAL_OFFSET;
        let bottom_y = g.bottom_margin - BORDER_HORIZONTAL_OFFSET;
        for (i, x) in self.horizontal_positions(g).into_iter().enumerate() {
            page.ops.push(self.glyph(i, x, top_y));
            page.ops.push(self.glyph(i, x, bottom_y));
        }

        let left_x = g.left_margin - BORDER_LEFT_OFFSET;
        let right_x = g.width - g.right_margin + BORDER_RIGHT_OFFSET;
        for (i, y) in self.vertical_positions(g).into_iter().enumerate() {
            page.ops.push(self.glyph(i, left_x, y));
            page.ops.push(self.glyph(i, right_x, y));
        }
    }
}
