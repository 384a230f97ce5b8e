//! Spreadsheet reading
//!
//! Produces the raw, positional rows that the mapper consumes. Nothing here
//! knows about categories or header names.

pub mod cell;
pub mod reader;

pub use cell::RawRow;
pub use reader::read_spreadsheet;
