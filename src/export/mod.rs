//! Export functionality for batch results.
//!
//! This module renders the in-memory result collection as a terminal table
//! and as downloadable CSV. Both views share one row shape so the file and
//! the screen always agree.

mod csv;
mod row;
mod table;

pub use csv::export_csv;
pub use row::ResultRow;
pub use table::render_table;
