//! Immutable sheet styling shared by every request.
//!
//! A [`SheetStyle`] is built once at startup and shared read-only (the server
//! keeps it in `Arc<AppState>`), so concurrent requests never contend over it.

use crate::constants::*;
use crate::types::Rgb;

/// Colors cycled along the border runs.
pub const BORDER_PALETTE: [Rgb; 8] = [
    Rgb::BLUE,
    Rgb::RED,
    Rgb::GREEN,
    Rgb::PURPLE,
    Rgb::ORANGE,
    Rgb::DARK_CYAN,
    Rgb::MAGENTA,
    Rgb::BROWN,
];

/// (top operand, bottom operand) colors, picked by problem index mod 4.
pub const PROBLEM_PALETTE: [(Rgb, Rgb); 4] = [
    (Rgb::BLUE, Rgb::RED),
    (Rgb::GREEN, Rgb::PURPLE),
    (Rgb::ORANGE, Rgb::DARK_CYAN),
    (Rgb::MAGENTA, Rgb::BROWN),
];

/// Page size and margins handed to page decorators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub frame_padding: f32,
}

impl PageGeometry {
    pub const LETTER: PageGeometry = PageGeometry {
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        left_margin: PAGE_MARGIN,
        right_margin: PAGE_MARGIN,
        top_margin: PAGE_MARGIN,
        bottom_margin: PAGE_MARGIN,
        frame_padding: FRAME_PADDING,
    };

    pub fn frame_left(&self) -> f32 {
        self.left_margin + self.frame_padding
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.left_margin - self.right_margin - 2.0 * self.frame_padding
    }

    /// Y coordinate of the first content line (PDF origin is bottom-left).
    pub fn frame_top(&self) -> f32 {
        self.height - self.top_margin - self.frame_padding
    }

    pub fn frame_bottom(&self) -> f32 {
        self.bottom_margin + self.frame_padding
    }

    pub fn frame_height(&self) -> f32 {
        self.frame_top() - self.frame_bottom()
    }
}

/// Palettes, sizes and geometry for one sheet layout.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetStyle {
    pub geometry: PageGeometry,
    pub border_palette: [Rgb; 8],
    pub problem_palette: [(Rgb, Rgb); 4],
    /// Color of brackets and the operator symbol.
    pub neutral: Rgb,
    pub border_symbol_size: f32,
    pub header_font_size: f32,
    pub numeral_font_size: f32,
    pub bar_font_size: f32,
    pub grid_column_width: f32,
    pub problem_row_height: f32,
    pub spacer_row_height: f32,
    pub section_spacer_height: f32,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::LETTER,
            border_palette: BORDER_PALETTE,
            problem_palette: PROBLEM_PALETTE,
            neutral: Rgb::BLACK,
            border_symbol_size: BORDER_SYMBOL_SIZE,
            header_font_size: HEADER_FONT_SIZE,
            numeral_font_size: NUMERAL_FONT_SIZE,
            bar_font_size: BAR_FONT_SIZE,
            grid_column_width: GRID_COLUMN_WIDTH,
            problem_row_height: PROBLEM_ROW_HEIGHT,
            spacer_row_height: SPACER_ROW_HEIGHT,
            section_spacer_height: SECTION_SPACER_HEIGHT,
        }
    }
}

impl SheetStyle {
    /// Color pair for the problem at sequence position `index`.
    pub fn problem_colors(&self, index: usize) -> (Rgb, Rgb) {
        self.problem_palette[index % self.problem_palette.len()]
    }

    /// Border color at run position `index`.
    pub fn border_color(&self, index: usize) -> Rgb {
        self.border_palette[index % self.border_palette.len()]
    }
}
