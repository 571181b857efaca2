//! bedside-core
//!
//! Shared vocabulary of the bedside scoring tool: observation value objects,
//! field ranges and boundary validation, risk levels, evaluation results and
//! the flat record row. No I/O lives here.

pub mod error;
pub mod models;
pub mod ranges;
pub mod validate;
