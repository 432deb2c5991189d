//! # Visual Math — printable arithmetic practice sheets
//!
//! Generates addition/subtraction worksheets for numbers 0–10 as PDF. Each
//! problem shows colored numerals next to matching colored tally bars so
//! early learners can count along.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`problem_set`] | enumerate valid pairs, shuffle, take 18 per page |
//! | 2 | [`layout`] | header, 3-column grid, florette border, pagination |
//! | 3 | [`pdf`] | serialize the display list with printpdf |
//! | – | [`worksheet`] | ties the steps together for one request |
//! | – | [`server`] | axum form + `/generate` download endpoint |
//!
//! ## Problem universe
//!
//! Addition uses every pair (a, b) with a, b ∈ [0, 10] (121 pairs).
//! Subtraction keeps only a ≥ b (66 pairs) so answers are never negative.
//! Both cover the 36 problems of a two-page sheet without repeats.

pub mod constants;
pub mod env_config;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod problem_set;
pub mod server;
pub mod style;
pub mod types;
pub mod worksheet;
