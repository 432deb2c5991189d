//! PDF backend: serializes a laid-out [`Document`] with `printpdf`.
//!
//! Only the base-14 fonts are used, so nothing is embedded and the output
//! stays small. Layout works in points; printpdf positions take millimetres.
//!
//! printpdf declares `/WinAnsiEncoding` on every builtin font. ZapfDingbats
//! has no glyphs under WinAnsi names, so after saving, the dingbat font
//! dictionary is rewritten to fall back to the font's built-in encoding,
//! where code 0x5F is the florette `a50`.

use std::io::BufWriter;

use printpdf::lopdf::{self, Object};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use crate::error::WorksheetError;
use crate::layout::{DrawOp, Document, Page};
use crate::types::{FontFace, Rgb};

const LAYER_NAME: &str = "Layer 1";
const SYMBOL_FONT: &[u8] = b"ZapfDingbats";

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn pdf_color(c: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(c.r, c.g, c.b, None))
}

fn pdf_error(e: printpdf::Error) -> WorksheetError {
    WorksheetError::Pdf(e.to_string())
}

fn lopdf_error(e: lopdf::Error) -> WorksheetError {
    WorksheetError::Pdf(e.to_string())
}

struct Fonts {
    times: IndirectFontRef,
    courier: IndirectFontRef,
    dingbats: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, WorksheetError> {
        Ok(Self {
            times: doc
                .add_builtin_font(BuiltinFont::TimesRoman)
                .map_err(pdf_error)?,
            courier: doc.add_builtin_font(BuiltinFont::Courier).map_err(pdf_error)?,
            dingbats: doc
                .add_builtin_font(BuiltinFont::ZapfDingbats)
                .map_err(pdf_error)?,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::TimesRoman => &self.times,
            FontFace::Courier => &self.courier,
            FontFace::ZapfDingbats => &self.dingbats,
        }
    }
}

fn draw_page(layer: &PdfLayerReference, fonts: &Fonts, page: &Page) {
    for op in &page.ops {
        match op {
            DrawOp::Text { x, y, size, run } => {
                if run.text.is_empty() {
                    continue;
                }
                layer.set_fill_color(pdf_color(run.color));
                layer.use_text(run.text.as_str(), *size, mm(*x), mm(*y), fonts.get(run.font));
            }
            DrawOp::Rule {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(*width);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(mm(*x1), mm(*y1)), false),
                        (Point::new(mm(*x2), mm(*y2)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

/// Render every page of `doc` into an in-memory PDF.
pub fn write_pdf(doc: &Document) -> Result<Vec<u8>, WorksheetError> {
    let width = mm(doc.width);
    let height = mm(doc.height);
    let (pdf, first_page, first_layer) = PdfDocument::new(&doc.title, width, height, LAYER_NAME);
    let fonts = Fonts::load(&pdf)?;

    for (i, page) in doc.pages.iter().enumerate() {
        let layer = if i == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = pdf.add_page(width, height, LAYER_NAME);
            pdf.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, &fonts, page);
    }

    let mut writer = BufWriter::new(Vec::new());
    pdf.save(&mut writer).map_err(pdf_error)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| WorksheetError::Io(e.into_error()))?;
    let bytes = use_builtin_symbol_encoding(&bytes)?;
    tracing::debug!(pages = doc.page_count(), bytes = bytes.len(), "pdf written");
    Ok(bytes)
}

fn is_symbol_font(object: &Object) -> bool {
    object
        .as_dict()
        .and_then(|dict| dict.get(b"BaseFont"))
        .and_then(Object::as_name)
        .is_ok_and(|name| name == SYMBOL_FONT)
}

/// Drop `/Encoding` from the ZapfDingbats font dictionary so glyph codes map
/// through the font's own encoding.
fn use_builtin_symbol_encoding(bytes: &[u8]) -> Result<Vec<u8>, WorksheetError> {
    let mut doc = lopdf::Document::load_mem(bytes).map_err(lopdf_error)?;
    for object in doc.objects.values_mut() {
        if !is_symbol_font(object) {
            continue;
        }
        if let Ok(dict) = object.as_dict_mut() {
            dict.remove(b"Encoding");
        }
    }

    let mut out = Vec::with_capacity(bytes.len());
    doc.save_to(&mut out).map_err(|e| WorksheetError::Pdf(e.to_string()))?;
    Ok(out)
}
