//! Resume template generation: content pools, placeholder substitution,
//! composition and batch generation, plus section text generation and resume
//! scoring, and the HTTP surface that serves them.

pub mod config;
pub mod content;
pub mod enrichment;
pub mod errors;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod templates;
