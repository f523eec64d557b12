//! Row sources. Both normalize to the same shape: a table of string cells,
//! first row the header.

pub mod csv;
pub mod sheets;

/// One raw spreadsheet row.
pub type Row = Vec<String>;
