// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing and encoding detection for the poem table

mod csv_parser;

pub use csv_parser::{CsvParser, CsvTable};
