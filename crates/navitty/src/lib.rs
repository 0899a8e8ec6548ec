pub mod app;
pub mod domain;
pub mod fuzzy;
pub mod infra;
pub mod ui;

pub mod runtime;

// Re-exports for convenience
pub use domain::candidate::Candidate;
pub use infra::logging;
