pub mod use_cases;

pub use use_cases::corpus_cleaner::CorpusCleaner;
pub use use_cases::evaluation::EvaluationReport;
pub use use_cases::token_dataset::{DatasetPreparer, TokenSplit};
