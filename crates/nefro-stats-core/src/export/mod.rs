//! Spreadsheet and JSON export of the statistics report.

mod rows;
mod spreadsheet;

pub use rows::*;
pub use spreadsheet::*;
