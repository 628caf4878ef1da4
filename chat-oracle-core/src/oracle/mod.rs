//! Top-level module for the chat-history oracle.
//!
//! The oracle turns a bounded window of recent chat messages into a short
//! synthetic "prophecy" sentence:
//! - Tokenization with a word/punctuation grammar (`token`)
//! - Order-N transition table over the token stream (`chain`)
//! - Bounded Markov walk with terminal-token stopping (`sampler`)
//! - Re-assembly of tokens into readable text (`renderer`)
//! - Pipeline composition and metadata (`orchestrator`)
//! - Narrow contracts toward the surrounding chat system (`boundary`)

/// Tokenizer and token classification.
///
/// Splits message bodies into word tokens and single-character punctuation
/// tokens; classification is re-derived from literal values, no type tag.
pub mod token;

/// Order-N Markov transition table.
///
/// Maps each N-token window of the stream to the ordered multiset of
/// observed successors (frequency encoded by repetition).
pub mod chain;

/// Stochastic sequence generation.
///
/// Start-window selection with bounded retry, then a bounded walk over the
/// transition table with stop-on-terminal and stop-on-dead-end rules.
pub mod sampler;

/// Token-to-text rendering.
///
/// Capitalizes the opening token, attaches punctuation without a leading
/// space and closes the sentence with a period when needed.
pub mod renderer;

/// High-level pipeline composition.
///
/// Exposes the `Oracle` entry point, the `Prophecy` result type and the
/// tunable constants shared with the surrounding system.
pub mod orchestrator;

/// Contracts toward the excluded collaborators.
///
/// `MessageSource` supplies recent history, `ProphecySink` persists and
/// broadcasts the result; `consult` composes a full round trip.
pub mod boundary;
