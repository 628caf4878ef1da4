use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chain::TransitionTable;
use super::renderer::render;
use super::sampler::generate;
use super::token::tokenize;

/// Maximum number of recent messages considered per consultation. The
/// message source is responsible for applying this cap.
pub const MAX_HISTORY: usize = 300;

/// Maximum number of tokens in a generated prophecy.
pub const MAX_TOKENS: usize = 40;

/// Chain order used when the caller does not request one.
pub const DEFAULT_CHAIN_ORDER: usize = 2;

/// Username of the synthetic identity that authors prophecies.
pub const ORACLE_USERNAME: &str = "Oracle";

/// Answer given when the source window holds no usable tokens.
pub const SILENT_PROPHECY: &str = "The oracle is silent until more words are spoken.";

/// Descriptive metadata about one generation run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OracleMetadata {
	/// Messages in the considered window, including blank ones that
	/// contributed no tokens.
	pub messages_analyzed: usize,
	/// Distinct token literals across the whole input stream.
	pub unique_tokens: usize,
	/// Chain order actually used, after clamping.
	pub chain_order: usize,
}

/// A generated prophecy: the rendered sentence plus its metadata.
///
/// Constructed fresh per request, handed to the sink and never mutated
/// afterward.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Prophecy {
	pub text: String,
	pub metadata: OracleMetadata,
}

/// The oracle pipeline: tokenize, build the chain, sample, render.
///
/// # Responsibilities
/// - Clamp the requested chain order to what the token stream supports
/// - Handle the empty and degenerate-short streams without sampling
/// - Package the rendered sentence with its metadata
///
/// Each consultation is an independent pure computation over its inputs
/// plus one random draw sequence; the struct itself only holds tuning
/// values and no per-request state.
#[derive(Clone, Debug)]
pub struct Oracle {
	max_tokens: usize,
}

impl Default for Oracle {
	fn default() -> Self {
		Self { max_tokens: MAX_TOKENS }
	}
}

impl Oracle {
	/// Creates an oracle with the default token cap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an oracle with a custom output cap.
	pub fn with_max_tokens(max_tokens: usize) -> Self {
		Self { max_tokens }
	}

	/// Consults the oracle using the process-wide random source.
	///
	/// `messages` is the room's recent history in chronological order,
	/// capped by the caller at [`MAX_HISTORY`].
	pub fn ask<S: AsRef<str>>(&self, messages: &[S], requested_order: usize) -> Prophecy {
		self.ask_with_rng(messages, requested_order, &mut rand::rng())
	}

	/// Consults the oracle with an injected random source.
	///
	/// # Behavior
	/// - Zero tokens: answers [`SILENT_PROPHECY`] without sampling.
	/// - `requested_order` is clamped to `[1, max(1, token_count - 1)]`;
	///   out-of-range values are never rejected.
	/// - A stream no longer than the effective order cannot form a single
	///   transition window; the raw tokens are joined with spaces instead.
	/// - Otherwise: build the transition table, sample a bounded sequence
	///   and render it.
	pub fn ask_with_rng<S, R>(&self, messages: &[S], requested_order: usize, rng: &mut R) -> Prophecy
	where
		S: AsRef<str>,
		R: Rng + ?Sized,
	{
		let tokens = tokenize(messages);
		let unique_tokens = tokens
			.iter()
			.map(String::as_str)
			.collect::<HashSet<_>>()
			.len();

		let effective_order = requested_order
			.max(1)
			.min(tokens.len().saturating_sub(1).max(1));

		let text = if tokens.is_empty() {
			SILENT_PROPHECY.to_owned()
		} else if tokens.len() <= effective_order {
			tokens.join(" ")
		} else {
			let table = TransitionTable::build(&tokens, effective_order);
			let generated = generate(&tokens, effective_order, &table, self.max_tokens, rng);
			render(&generated)
		};

		Prophecy {
			text,
			metadata: OracleMetadata {
				messages_analyzed: messages.len(),
				unique_tokens,
				chain_order: effective_order,
			},
		}
	}
}
