// src/specs/mod.rs
//! # Page parsers
//!
//! Page-specific extraction. Each parser knows *where the ground truth lives
//! in the markup* for one page and how to pull it out robustly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a saved or fetched fragment. No I/O.
//! - **Selector use**: element ids and class markers come from
//!   `config::options::Selectors`, never inline literals.
//! - **Shape checks**: a table that disagrees with itself is a `SchemaError`,
//!   not a best-effort guess.
//!
//! ## What does **not** live here
//! - Decoding pick strings (`codec`) or any point math (`points`).
//! - Fetching pages, export formatting, console output.
//!
//! ## Typical call chain
//! ```text
//! cli → pipeline::process → specs::picks::extract
//!                         ↘  codec::decode_cell per cell
//!                         ↘  points::summarize per row
//! ```
//!
//! ## Testing notes
//! - Parsers are tested offline against literal markup (unit tests here,
//!   fixtures under `tests/fixtures/`).
pub mod picks;
