//! Write a practice sheet straight to disk, without the web form.
//!
//! ```text
//! visual-math-render --operation - --pages 2 --seed 42 --output sheet.pdf
//! ```

use std::fs;

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use visual_math::constants::DOWNLOAD_FILENAME;
use visual_math::env_config;
use visual_math::style::SheetStyle;
use visual_math::types::{Operator, PageCount, WorksheetConfig};
use visual_math::worksheet::build_sheet;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a visual math practice sheet PDF")]
struct Args {
    /// Operation: "+" or "-"
    #[arg(long, default_value = "+", allow_hyphen_values = true)]
    operation: String,

    /// Number of pages (1 or 2)
    #[arg(short = 'n', long, default_value_t = 1)]
    pages: u8,

    /// Seed for a reproducible sheet (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file
    #[arg(short, long, default_value = DOWNLOAD_FILENAME)]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_config::init_tracing();
    let args = Args::parse();

    let operator: Operator = args.operation.parse()?;
    let page_count = PageCount::try_from(args.pages)?;
    let config = WorksheetConfig::new(operator, page_count);
    let style = SheetStyle::default();

    let bytes = match args.seed {
        Some(seed) => build_sheet(&config, &style, &mut SmallRng::seed_from_u64(seed))?,
        None => build_sheet(&config, &style, &mut rand::rng())?,
    };

    fs::write(&args.output, &bytes).with_context(|| format!("failed to write {}", args.output))?;
    tracing::info!(path = %args.output, bytes = bytes.len(), "sheet written");
    Ok(())
}
