//! Step definitions, grouped by screen

pub mod detail;
pub mod list;
