//! A single problem cell: numerals on the left, tally bars on the right.
//!
//! ```text
//!      7 | { |||||||    }
//!  +   3 | { |||        }
//!  ------
//! ```
//!
//! Each operand is drawn in its palette color, both as a numeral and as
//! bars. Brackets, padding and the operator stay in the neutral color.

use crate::constants::{
    ANSWER_PADDING, ANSWER_RULE_WIDTH, BAR_CHAR, BAR_COLUMN_WIDTH, BAR_LEADING, BAR_WIDTH_CHARS,
    CELL_PADDING_X, CELL_PADDING_Y, NUMERAL_COLUMN_WIDTH,
};
use crate::metrics::runs_width;
use crate::style::SheetStyle;
use crate::types::{FontFace, Operator, Problem, Rgb, TextRun};

use super::{centered_baseline, push_runs, DrawOp};

/// Bracketed tally bars for `value`: `"{ "`, `value` colored bars, spaces up
/// to [`BAR_WIDTH_CHARS`], `" }"`.
pub fn bar_runs(value: u8, color: Rgb, neutral: Rgb) -> Vec<TextRun> {
    let bars = (value as usize).min(BAR_WIDTH_CHARS);
    let padding = BAR_WIDTH_CHARS - bars;
    if bars == 0 {
        return vec![TextRun::new(
            format!("{{ {} }}", " ".repeat(BAR_WIDTH_CHARS)),
            neutral,
            FontFace::Courier,
        )];
    }
    vec![
        TextRun::new("{ ", neutral, FontFace::Courier),
        TextRun::new(BAR_CHAR.to_string().repeat(bars), color, FontFace::Courier),
        TextRun::new(format!("{} }}", " ".repeat(padding)), neutral, FontFace::Courier),
    ]
}

/// Number of bar glyphs in a run list.
pub fn bar_count(runs: &[TextRun]) -> usize {
    runs.iter()
        .flat_map(|r| r.text.chars())
        .filter(|&c| c == BAR_CHAR)
        .count()
}

/// One stacked row of a cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellRow {
    pub numeral: Vec<TextRun>,
    pub bars: Vec<TextRun>,
    pub padding_bottom: f32,
}

impl CellRow {
    fn content_height(numeral_size: f32) -> f32 {
        (numeral_size * 1.2).max(BAR_LEADING)
    }

    pub fn height(&self, numeral_size: f32) -> f32 {
        CELL_PADDING_Y + Self::content_height(numeral_size) + CELL_PADDING_Y + self.padding_bottom
    }
}

/// Layout unit for one problem. Always placed whole.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemCell {
    pub index: usize,
    pub problem: Problem,
    pub top: CellRow,
    pub bottom: CellRow,
    numeral_size: f32,
    bar_size: f32,
    neutral: Rgb,
}

impl ProblemCell {
    pub fn new(index: usize, problem: Problem, operator: Operator, style: &SheetStyle) -> Self {
        let (top_color, bottom_color) = style.problem_colors(index);
        let numeral = |text: String, color: Rgb| TextRun::new(text, color, FontFace::TimesRoman);

        let top = CellRow {
            numeral: vec![numeral(problem.top.to_string(), top_color)],
            bars: bar_runs(problem.top, top_color, style.neutral),
            padding_bottom: 0.0,
        };
        let bottom = CellRow {
            numeral: vec![
                numeral(format!("{} ", operator.symbol()), style.neutral),
                numeral(problem.bottom.to_string(), bottom_color),
            ],
            bars: bar_runs(problem.bottom, bottom_color, style.neutral),
            padding_bottom: ANSWER_PADDING,
        };

        Self {
            index,
            problem,
            top,
            bottom,
            numeral_size: style.numeral_font_size,
            bar_size: style.bar_font_size,
            neutral: style.neutral,
        }
    }

    pub fn width() -> f32 {
        NUMERAL_COLUMN_WIDTH + BAR_COLUMN_WIDTH
    }

    pub fn height(&self) -> f32 {
        self.top.height(self.numeral_size) + self.bottom.height(self.numeral_size)
    }

    /// Draw with the cell's top-left corner at `(left, top)`.
    pub fn draw(&self, left: f32, top: f32) -> Vec<DrawOp> {
        let mut ops = Vec::new();
        let mut row_top = top;
        for row in [&self.top, &self.bottom] {
            let content_top = row_top - CELL_PADDING_Y;
            let content_height = CellRow::content_height(self.numeral_size);

            let numeral_y = centered_baseline(content_top, content_height, self.numeral_size);
            let numeral_right = left + NUMERAL_COLUMN_WIDTH - CELL_PADDING_X;
            let numeral_x = numeral_right - runs_width(&row.numeral, self.numeral_size);
            push_runs(&mut ops, &row.numeral, numeral_x, numeral_y, self.numeral_size);

            let bar_y = centered_baseline(content_top, content_height, self.bar_size);
            let bar_x = left + NUMERAL_COLUMN_WIDTH + CELL_PADDING_X;
            push_runs(&mut ops, &row.bars, bar_x, bar_y, self.bar_size);

            row_top -= row.height(self.numeral_size);
        }

        // Answer rule under the operand block, numeral column only; the
        // bottom row's extra padding sits below it.
        let rule_y = row_top + self.bottom.padding_bottom;
        ops.push(DrawOp::Rule {
            x1: left,
            y1: rule_y,
            x2: left + NUMERAL_COLUMN_WIDTH,
            y2: rule_y,
            width: ANSWER_RULE_WIDTH,
            color: self.neutral,
        });
        ops
    }
}
