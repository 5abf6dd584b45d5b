//! Poem corpus preparation for language-model training.
//!
//! - `clean`: normalize a raw poem CSV into a `title:`/`poem:` training corpus
//! - `prepare`: encode the corpus and split it into `u16` token arrays
//! - `evaluate`: character n-gram precision and repetition of generated text

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use app::run;
pub use application::use_cases::corpus_statistics::{
    ngram_counts, ngrams, trigram_precision, trigram_repetition, RepetitionScores,
};
pub use application::use_cases::poem_normalizer::{clean_body, clean_title, format_record};
