//! End-to-end sheet generation: configuration → problems → layout → PDF.

use rand::Rng;

use crate::error::WorksheetError;
use crate::layout::{layout_worksheet, Document};
use crate::pdf::write_pdf;
use crate::problem_set::generate;
use crate::style::SheetStyle;
use crate::types::{Operator, Problem, WorksheetConfig};

/// Render `problems` to PDF bytes.
pub fn render(
    problems: &[Problem],
    operator: Operator,
    style: &SheetStyle,
) -> Result<Vec<u8>, WorksheetError> {
    let doc = layout_worksheet(problems, operator, style)?;
    write_pdf(&doc)
}

/// Generate problems for `config` and lay them out without serializing.
///
/// The renderer is not invoked when the generator finds no problems.
pub fn plan_sheet<R: Rng + ?Sized>(
    config: &WorksheetConfig,
    style: &SheetStyle,
    rng: &mut R,
) -> Result<(Vec<Problem>, Document), WorksheetError> {
    let problems = generate(config.operator, config.target_problem_count(), rng)
        .ok_or(WorksheetError::EmptyProblemSet)?;
    let doc = layout_worksheet(&problems, config.operator, style)?;
    Ok((problems, doc))
}

/// Full pipeline for one request: returns the finished PDF.
pub fn build_sheet<R: Rng + ?Sized>(
    config: &WorksheetConfig,
    style: &SheetStyle,
    rng: &mut R,
) -> Result<Vec<u8>, WorksheetError> {
    let (problems, doc) = plan_sheet(config, style, rng)?;
    let bytes = write_pdf(&doc)?;
    tracing::info!(
        operator = %config.operator,
        pages_requested = config.page_count.pages(),
        problems = problems.len(),
        pages = doc.page_count(),
        bytes = bytes.len(),
        "worksheet generated"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageCount;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_plan_sheet_addition_one_page() {
        let config = WorksheetConfig::new(Operator::Add, PageCount::One);
        let mut rng = SmallRng::seed_from_u64(11);
        let (problems, doc) = plan_sheet(&config, &SheetStyle::default(), &mut rng).unwrap();
        assert_eq!(problems.len(), 18);
        assert_eq!(doc.cell_count(), 18);
        assert_eq!(doc.grid_row_count(), 6);
    }

    #[test]
    fn test_build_sheet_returns_pdf() {
        let config = WorksheetConfig::new(Operator::Subtract, PageCount::Two);
        let mut rng = SmallRng::seed_from_u64(12);
        let bytes = build_sheet(&config, &SheetStyle::default(), &mut rng).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_matches_layout() {
        let problems = [Problem::new(5, 5)];
        let bytes = render(&problems, Operator::Subtract, &SheetStyle::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
