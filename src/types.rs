//! Core data types: operators, page counts, problems, colors and text runs.
//!
//! A worksheet request is a [`WorksheetConfig`] (operator + page count). The
//! generator turns it into a `Vec<Problem>`, and layout describes every piece
//! of colored text as a [`TextRun`] instead of embedding markup in strings.

use std::fmt;
use std::str::FromStr;

use crate::constants::{OPERAND_MAX, OPERAND_MIN, PROBLEMS_PER_PAGE};
use crate::error::RequestError;

/// Arithmetic operator printed between the two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Whether `(top, bottom)` is a printable problem under this operator.
    /// Subtraction never produces a negative answer.
    pub fn allows(self, top: u8, bottom: u8) -> bool {
        match self {
            Operator::Add => true,
            Operator::Subtract => top >= bottom,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            other => Err(RequestError::InvalidOperation(other.to_string())),
        }
    }
}

/// Number of printed pages requested on the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageCount {
    #[default]
    One,
    Two,
}

impl PageCount {
    pub fn pages(self) -> usize {
        match self {
            PageCount::One => 1,
            PageCount::Two => 2,
        }
    }

    /// 18 problems per page.
    pub fn problem_count(self) -> usize {
        self.pages() * PROBLEMS_PER_PAGE
    }
}

impl TryFrom<u8> for PageCount {
    type Error = RequestError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PageCount::One),
            2 => Ok(PageCount::Two),
            other => Err(RequestError::InvalidPageCount(other.to_string())),
        }
    }
}

impl FromStr for PageCount {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| RequestError::InvalidPageCount(trimmed.to_string()))
            .and_then(PageCount::try_from)
    }
}

/// One practice problem: `top` written above `operator bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Problem {
    pub top: u8,
    pub bottom: u8,
}

impl Problem {
    pub fn new(top: u8, bottom: u8) -> Self {
        debug_assert!((OPERAND_MIN..=OPERAND_MAX).contains(&top));
        debug_assert!((OPERAND_MIN..=OPERAND_MAX).contains(&bottom));
        Self { top, bottom }
    }
}

/// Immutable per-request settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorksheetConfig {
    pub operator: Operator,
    pub page_count: PageCount,
}

impl WorksheetConfig {
    pub fn new(operator: Operator, page_count: PageCount) -> Self {
        Self {
            operator,
            page_count,
        }
    }

    pub fn target_problem_count(&self) -> usize {
        self.page_count.problem_count()
    }
}

/// RGB color with components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels, e.g. `Rgb::from_u8(0x00, 0x8b, 0x8b)`.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::from_u8(0x00, 0x80, 0x00);
    pub const PURPLE: Rgb = Rgb::from_u8(0x80, 0x00, 0x80);
    pub const ORANGE: Rgb = Rgb::from_u8(0xff, 0xa5, 0x00);
    pub const DARK_CYAN: Rgb = Rgb::from_u8(0x00, 0x8b, 0x8b);
    pub const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);
    pub const BROWN: Rgb = Rgb::from_u8(0xa5, 0x2a, 0x2a);
}

/// PDF base-14 fonts used on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    TimesRoman,
    Courier,
    ZapfDingbats,
}

/// A piece of text drawn in a single font and color.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub color: Rgb,
    pub font: FontFace,
}

impl TextRun {
    pub fn new(text: impl Into<String>, color: Rgb, font: FontFace) -> Self {
        Self {
            text: text.into(),
            color,
            font,
        }
    }
}

/// Concatenated text of a run list, ignoring styling.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
