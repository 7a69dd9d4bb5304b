//! CSV parsing: line tokenization and record assembly.

mod line;
mod parser;

pub use line::tokenize_line;
pub use parser::parse_csv;
