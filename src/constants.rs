//! Sheet constants: operand range, problem counts, page geometry and layout sizes.
//!
//! All lengths are PDF points (1/72 in). The layout mirrors a US Letter page
//! with 0.75 in margins and a content frame inset by [`FRAME_PADDING`]:
//!
//! | Region | Value |
//! |--------|-------|
//! | Page | 612 × 792 pt |
//! | Margins | 54 pt on every side |
//! | Frame | 492 × 672 pt, top edge at 732 pt |
//! | Grid | 3 columns × 172.8 pt, rows 72 pt |

/// One inch in points.
pub const INCH: f32 = 72.0;

/// Smallest operand printed on a sheet.
pub const OPERAND_MIN: u8 = 0;

/// Largest operand printed on a sheet. Bars are padded to this width.
pub const OPERAND_MAX: u8 = 10;

/// Number of distinct (top, bottom) pairs under addition: 11 × 11.
pub const ADDITION_UNIVERSE: usize = 121;

/// Number of (top, bottom) pairs with top ≥ bottom: 11 · 12 / 2.
pub const SUBTRACTION_UNIVERSE: usize = 66;

/// Problems printed per requested page.
pub const PROBLEMS_PER_PAGE: usize = 18;

// ── Page geometry ───────────────────────────────────────────────────

/// US Letter width.
pub const PAGE_WIDTH: f32 = 8.5 * INCH;

/// US Letter height.
pub const PAGE_HEIGHT: f32 = 11.0 * INCH;

/// Margin on every side of the page.
pub const PAGE_MARGIN: f32 = 0.75 * INCH;

/// Inset between the margins and the flowable content.
pub const FRAME_PADDING: f32 = 6.0;

// ── Border decoration ───────────────────────────────────────────────

/// Point size of the border florette.
pub const BORDER_SYMBOL_SIZE: f32 = 14.0;

/// Border step as a multiple of the florette advance width.
pub const BORDER_STEP_FACTOR: f32 = 1.5;

/// Vertical offset of the top/bottom border runs outside the margin.
pub const BORDER_HORIZONTAL_OFFSET: f32 = 18.0;

/// Distance of the left border run to the left of the margin.
pub const BORDER_LEFT_OFFSET: f32 = 24.0;

/// Distance of the right border run to the right of the margin.
pub const BORDER_RIGHT_OFFSET: f32 = 12.0;

// ── Header ──────────────────────────────────────────────────────────

pub const HEADER_FONT_SIZE: f32 = 13.0;
pub const NAME_PLACEHOLDER: &str = "Name: ____________________";
pub const SCORE_PLACEHOLDER: &str = "Score: ____________________";

/// Space between the header row and the problem grid.
pub const HEADER_SPACER: f32 = 0.4 * INCH;

// ── Problem cells ───────────────────────────────────────────────────

/// Numeral column width inside a cell.
pub const NUMERAL_COLUMN_WIDTH: f32 = 0.6 * INCH;

/// Bar column width inside a cell.
pub const BAR_COLUMN_WIDTH: f32 = 1.7 * INCH;

pub const NUMERAL_FONT_SIZE: f32 = 17.0;
pub const BAR_FONT_SIZE: f32 = 13.0;
pub const BAR_LEADING: f32 = 14.0;

/// Total bar positions between the brackets, bars plus padding.
pub const BAR_WIDTH_CHARS: usize = OPERAND_MAX as usize;

pub const BAR_CHAR: char = '|';

/// Horizontal cell padding (left and right of each column).
pub const CELL_PADDING_X: f32 = 6.0;

/// Vertical cell padding above and below each stacked row.
pub const CELL_PADDING_Y: f32 = 3.0;

/// Extra padding under the answer rule, room for a handwritten answer.
pub const ANSWER_PADDING: f32 = 8.0;

/// Thickness of the answer rule.
pub const ANSWER_RULE_WIDTH: f32 = 1.0;

// ── Grid ────────────────────────────────────────────────────────────

pub const GRID_COLUMNS: usize = 3;
pub const GRID_COLUMN_WIDTH: f32 = 2.4 * INCH;
pub const PROBLEM_ROW_HEIGHT: f32 = 1.0 * INCH;
pub const SPACER_ROW_HEIGHT: f32 = 0.4 * INCH;

/// Spacer used after every [`ROWS_PER_SECTION`]th grid row.
pub const SECTION_SPACER_HEIGHT: f32 = 0.8 * INCH;
pub const ROWS_PER_SECTION: usize = 6;

// ── Document ────────────────────────────────────────────────────────

pub const DOCUMENT_TITLE: &str = "Visual Math Practice Sheet";
pub const DOWNLOAD_FILENAME: &str = "visual_math_sheet.pdf";
