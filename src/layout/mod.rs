//! Worksheet layout: turns a problem list into a paginated display list.
//!
//! Layout never touches PDF objects. It produces a [`Document`]: one [`Page`]
//! per printed page, each holding positioned [`DrawOp`]s plus a record of the
//! blocks placed on it. The [`crate::pdf`] backend serializes the display list;
//! tests inspect it directly.
//!
//! ## Composition order
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | 1 | [`border`] | florette border, drawn on every page before content |
//! | 2 | [`header`] | "Name / Score" row + spacer |
//! | 3 | [`cell`] | two stacked rows per problem: numeral + bracketed bars |
//! | 4 | [`grid`] | 3-column rows with spacers |
//! | 5 | [`flow`] | pagination; rows never split across pages |
//!
//! Coordinates are PDF points with the origin at the bottom-left corner.

pub mod border;
pub mod cell;
pub mod flow;
pub mod grid;
pub mod header;

use crate::constants::{DOCUMENT_TITLE, HEADER_SPACER};
use crate::error::WorksheetError;
use crate::style::SheetStyle;
use crate::types::{Operator, Problem, Rgb, TextRun};

use self::border::FloretteBorder;
use self::cell::ProblemCell;
use self::flow::{Block, Flow};
use self::grid::{build_grid, GridItem};
use self::header::HeaderRow;

/// A positioned drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Text run with its baseline starting at `(x, y)`.
    Text {
        x: f32,
        y: f32,
        size: f32,
        run: TextRun,
    },
    /// Straight stroked line.
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

/// What kind of block was placed on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Spacer,
    /// A grid row; `filled` counts the non-blank slots.
    GridRow { filled: usize },
}

/// A block as placed by the flow engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedBlock {
    pub kind: BlockKind,
    pub top: f32,
    pub height: f32,
}

/// One output page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub ops: Vec<DrawOp>,
    pub blocks: Vec<PlacedBlock>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    pub fn grid_rows(&self) -> impl Iterator<Item = &PlacedBlock> {
        self.blocks
            .iter()
            .filter(|b| matches!(b.kind, BlockKind::GridRow { .. }))
    }

    pub fn has_header(&self) -> bool {
        self.blocks.iter().any(|b| b.kind == BlockKind::Header)
    }

    /// All text drawn on the page, one entry per run.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { run, .. } => Some(run),
            DrawOp::Rule { .. } => None,
        })
    }
}

/// A laid-out worksheet, ready for a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn grid_row_count(&self) -> usize {
        self.pages.iter().map(|p| p.grid_rows().count()).sum()
    }

    /// Non-blank cells across every grid row.
    pub fn cell_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| p.grid_rows())
            .map(|b| match b.kind {
                BlockKind::GridRow { filled } => filled,
                _ => 0,
            })
            .sum()
    }

    /// Grid row fill counts in reading order, e.g. `[3, 3, 1]`.
    pub fn grid_shape(&self) -> Vec<usize> {
        self.pages
            .iter()
            .flat_map(|p| p.grid_rows())
            .filter_map(|b| match b.kind {
                BlockKind::GridRow { filled } => Some(filled),
                _ => None,
            })
            .collect()
    }
}

/// Lay out the header and problem grid for `problems`.
///
/// Every page gets the florette border before any content is placed on it.
pub fn layout_worksheet(
    problems: &[Problem],
    operator: Operator,
    style: &SheetStyle,
) -> Result<Document, WorksheetError> {
    let border = FloretteBorder::new(style);
    let mut flow = Flow::new(style, &border);

    flow.place(Block::Header(HeaderRow::new(style)))?;
    flow.place(Block::Spacer(HEADER_SPACER))?;

    let cells: Vec<ProblemCell> = problems
        .iter()
        .enumerate()
        .map(|(i, &problem)| ProblemCell::new(i, problem, operator, style))
        .collect();

    for item in build_grid(cells, style) {
        match item {
            GridItem::Row(row) => flow.place(Block::Row(row))?,
            GridItem::Spacer(height) => flow.place(Block::Spacer(height))?,
        }
    }

    let pages = flow.finish();
    tracing::debug!(
        problems = problems.len(),
        pages = pages.len(),
        "worksheet laid out"
    );

    Ok(Document {
        title: DOCUMENT_TITLE.to_string(),
        width: style.geometry.width,
        height: style.geometry.height,
        pages,
    })
}

/// Baseline that vertically centers a line of `size` text in a box.
pub(crate) fn centered_baseline(box_top: f32, box_height: f32, size: f32) -> f32 {
    // Roughly half the cap height below the box's midline.
    box_top - box_height / 2.0 - size * 0.35
}

/// Emit `runs` left to right starting at `x`.
pub(crate) fn push_runs(ops: &mut Vec<DrawOp>, runs: &[TextRun], x: f32, y: f32, size: f32) {
    let mut cursor = x;
    for run in runs {
        ops.push(DrawOp::Text {
            x: cursor,
            y,
            size,
            run: run.clone(),
        });
        cursor += crate::metrics::string_width(&run.text, run.font, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_set::generate;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn layout(operator: Operator, count: usize, seed: u64) -> Document {
        let mut rng = SmallRng::seed_from_u64(seed);
        let problems = generate(operator, count, &mut rng).unwrap();
        layout_worksheet(&problems, operator, &SheetStyle::default()).unwrap()
    }

    #[test]
    fn test_one_page_sheet() {
        let doc = layout(Operator::Add, 18, 1);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].has_header());
        assert_eq!(doc.grid_row_count(), 6);
        assert_eq!(doc.cell_count(), 18);
    }

    #[test]
    fn test_two_page_sheet() {
        let doc = layout(Operator::Subtract, 36, 2);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.grid_row_count(), 12);
        assert_eq!(doc.pages[0].grid_rows().count(), 6);
        assert_eq!(doc.pages[1].grid_rows().count(), 6);
        assert!(!doc.pages[1].has_header());
    }

    #[test]
    fn test_partial_last_row_shape() {
        let doc = layout(Operator::Add, 7, 3);
        assert_eq!(doc.grid_shape(), vec![3, 3, 1]);
    }

    #[test]
    fn test_empty_problem_list_still_has_header() {
        let doc = layout_worksheet(&[], Operator::Add, &SheetStyle::default()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].has_header());
        assert_eq!(doc.grid_row_count(), 0);
    }

    #[test]
    fn test_push_runs_advances_cursor() {
        let mut ops = Vec::new();
        let runs = vec![
            TextRun::new("{ ", Rgb::BLACK, crate::types::FontFace::Courier),
            TextRun::new("||", Rgb::RED, crate::types::FontFace::Courier),
        ];
        push_runs(&mut ops, &runs, 100.0, 50.0, 10.0);
        match &ops[1] {
            DrawOp::Text { x, .. } => assert!((x - 112.0).abs() < 1e-4),
            other => panic!("unexpected op {other:?}"),
        }
    }
}
