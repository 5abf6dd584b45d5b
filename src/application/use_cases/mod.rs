pub mod corpus_cleaner;
pub mod corpus_statistics;
pub mod evaluation;
pub mod poem_normalizer;
pub mod token_dataset;
