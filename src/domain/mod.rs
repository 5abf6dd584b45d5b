pub mod error;
pub mod pipeline_config;

// Poem corpus module
pub mod poem;
