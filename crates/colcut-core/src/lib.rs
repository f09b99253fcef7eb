//! Column selection for comma-separated text.
//!
//! This crate turns a column specification such as `2,name,5-` into a list
//! of field indices and projects it onto every line of an input, streaming.
//!
//! # Features
//!
//! - **Line Splitting**: relaxed comma splitting where double quotes guard commas
//! - **Column Specifications**: 1-based or 0-based numbers, header names, and
//!   open, closed or reversed ranges
//! - **Projection**: header anchoring on the first line, empty cells for short rows
//!
//! # Example
//!
//! ```
//! use colcut_core::{CutOptions, Cutter};
//!
//! let cutter = Cutter::new(&CutOptions::one_based("age,name"))?;
//! let mut out = Vec::new();
//! cutter.cut("name,age\nAlice,30\n".as_bytes(), &mut out)?;
//! assert_eq!(out, b"age,name\n30,Alice\n");
//! # Ok::<(), colcut_core::CutError>(())
//! ```

mod cut;
mod error;
mod options;
mod spec;
mod split;

// === Error Types ===
pub use error::{CutError, EXIT_FAILURE, EXIT_USAGE, Result};

// === Options ===
pub use options::{CutOptions, HeaderMode, IndexBase, Source};

// === Specifications ===
pub use spec::{ColumnSpec, Selector, SpecToken};

// === Splitting ===
pub use split::{field_spans_into, split_fields};

// === Projection ===
pub use cut::{CutSummary, Cutter, cut_source};
