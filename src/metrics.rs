//! Glyph advance widths for the base-14 fonts the sheet uses.
//!
//! Values are the Adobe AFM `WX` entries in 1/1000 em. Only the glyphs the
//! sheet actually prints are tabulated; anything else falls back to an
//! average width, which is only ever used for centering.

use crate::types::{FontFace, TextRun};

/// ZapfDingbats byte for the black florette (U+273F).
pub const FLORETTE_CODE: char = '_';

const ZAPF_FLORETTE_WIDTH: u16 = 759;

const TIMES_FALLBACK_WIDTH: u16 = 500;

fn times_roman_width(c: char) -> u16 {
    match c {
        ' ' => 250,
        '0'..='9' => 500,
        '+' => 564,
        '-' => 333,
        ':' => 278,
        '_' => 500,
        '|' => 200,
        '{' | '}' => 480,
        'N' => 722,
        'S' => 556,
        'a' | 'c' | 'e' => 444,
        'm' => 778,
        'o' => 500,
        'r' => 333,
        _ => TIMES_FALLBACK_WIDTH,
    }
}

fn zapf_dingbats_width(c: char) -> u16 {
    match c {
        ' ' => 278,
        FLORETTE_CODE => ZAPF_FLORETTE_WIDTH,
        _ => 1000,
    }
}

/// Advance width of one glyph in 1/1000 em.
pub fn glyph_width(c: char, font: FontFace) -> u16 {
    match font {
        FontFace::TimesRoman => times_roman_width(c),
        FontFace::Courier => 600,
        FontFace::ZapfDingbats => zapf_dingbats_width(c),
    }
}

/// Width of `text` set in `font` at `size` points.
pub fn string_width(text: &str, font: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c, font) as u32).sum();
    units as f32 * size / 1000.0
}

/// Width of a run list where every run is set at the same `size`.
pub fn runs_width(runs: &[TextRun], size: f32) -> f32 {
    runs.iter()
        .map(|run| string_width(&run.text, run.font, size))
        .sum()
}
