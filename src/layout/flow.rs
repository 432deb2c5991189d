//! Frame-based pagination.
//!
//! Blocks are stacked top to bottom inside the page frame. When the next
//! block does not fit the space left, the flow starts a new page and runs the
//! page decorator on it before placing anything. Header and grid rows are
//! atomic; a spacer that does not fit is dropped and only forces the break.

use crate::error::WorksheetError;
use crate::style::{PageGeometry, SheetStyle};

use super::grid::GridRow;
use super::header::HeaderRow;
use super::{BlockKind, Page, PlacedBlock};

/// Tolerance for accumulated float error when comparing heights.
const FIT_EPSILON: f32 = 1e-3;

/// Per-page hook invoked before any content is placed on the page.
pub trait PageDecorator {
    fn decorate(&self, page: &mut Page, geometry: &PageGeometry);
}

/// Anything the flow can stack.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Header(HeaderRow),
    Spacer(f32),
    Row(GridRow),
}

impl Block {
    pub fn height(&self) -> f32 {
        match self {
            Block::Header(h) => h.height(),
            Block::Spacer(h) => *h,
            Block::Row(r) => r.height(),
        }
    }

    fn kind(&self) -> BlockKind {
        match self {
            Block::Header(_) => BlockKind::Header,
            Block::Spacer(_) => BlockKind::Spacer,
            Block::Row(r) => BlockKind::GridRow { filled: r.filled() },
        }
    }
}

pub struct Flow<'a, D: PageDecorator + ?Sized> {
    geometry: PageGeometry,
    decorator: &'a D,
    finished: Vec<Page>,
    current: Page,
    cursor: f32,
    break_pending: bool,
}

impl<'a, D: PageDecorator + ?Sized> Flow<'a, D> {
    pub fn new(style: &SheetStyle, decorator: &'a D) -> Self {
        let geometry = style.geometry;
        Self {
            geometry,
            decorator,
            finished: Vec::new(),
            current: Self::decorated_page(decorator, &geometry, 1),
            cursor: geometry.frame_top(),
            break_pending: false,
        }
    }

    fn decorated_page(decorator: &D, geometry: &PageGeometry, number: usize) -> Page {
        let mut page = Page::new(number);
        decorator.decorate(&mut page, geometry);
        page
    }

    fn new_page(&mut self) {
        let next = Self::decorated_page(self.decorator, &self.geometry, self.current.number + 1);
        self.finished.push(std::mem::replace(&mut self.current, next));
        self.cursor = self.geometry.frame_top();
        self.break_pending = false;
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.geometry.frame_bottom()
    }

    fn at_page_top(&self) -> bool {
        (self.cursor - self.geometry.frame_top()).abs() < FIT_EPSILON
    }

    /// Place `block`, breaking to a new page first when it does not fit.
    pub fn place(&mut self, block: Block) -> Result<(), WorksheetError> {
        let height = block.height();
        let frame_height = self.geometry.frame_height();
        if height > frame_height + FIT_EPSILON {
            return Err(WorksheetError::BlockTooTall {
                height,
                frame_height,
            });
        }

        if let Block::Spacer(_) = block {
            if self.break_pending || self.at_page_top() {
                return Ok(());
            }
            if height > self.remaining() + FIT_EPSILON {
                self.break_pending = true;
                return Ok(());
            }
        } else if self.break_pending || height > self.remaining() + FIT_EPSILON {
            self.new_page();
        }

        let top = self.cursor;
        let frame_left = self.geometry.frame_left();
        let frame_width = self.geometry.frame_width();
        let ops = match &block {
            Block::Header(h) => h.draw(frame_left, top),
            Block::Spacer(_) => Vec::new(),
            Block::Row(r) => r.draw(frame_left, frame_width, top),
        };

        self.current.ops.extend(ops);
        self.current.blocks.push(PlacedBlock {
            kind: block.kind(),
            top,
            height,
        });
        self.cursor -= height;
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    pub fn finish(mut self) -> Vec<Page> {
        self.finished.push(self.current);
        self.finished
    }
}
