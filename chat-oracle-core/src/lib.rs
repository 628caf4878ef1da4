//! Chat-history-driven Markov prophecy generation library.
//!
//! This crate provides the complete oracle pipeline:
//! - Tokenization of raw chat messages into words and punctuation marks
//! - Order-N Markov transition table construction
//! - Bounded stochastic sampling with sentence-aware stopping rules
//! - Punctuation-aware rendering back into a readable sentence
//! - An orchestrator composing the pipeline plus narrow boundary traits
//!   for the surrounding chat system (message source, prophecy sink)
//!
//! The pipeline is request-scoped and pure apart from the injected random
//! source: nothing is persisted or shared between calls.

/// Oracle pipeline: tokenizer, chain builder, sampler, renderer,
/// orchestrator and the boundary traits.
pub mod oracle;
