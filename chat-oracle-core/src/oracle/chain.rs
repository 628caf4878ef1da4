use std::collections::HashMap;

/// Order-N Markov transition table over a token stream.
///
/// Each key is an N-token window that occurred in the stream and had a
/// successor; the value is every successor observed for that window, in
/// stream order, with duplicates retained. Sampling over the raw list is
/// therefore already frequency-weighted.
///
/// # Invariants
/// - `order >= 1`
/// - Every key corresponds to a window that occurred at least once
/// - Every successor list is non-empty
///
/// The table is built once per generation request and discarded afterward;
/// it is never persisted.
#[derive(Clone, Debug)]
pub struct TransitionTable {
	/// Number of tokens per state window.
	order: usize,
	/// Window -> observed successors (repetition encodes frequency).
	transitions: HashMap<Vec<String>, Vec<String>>,
}

impl TransitionTable {
	/// Builds the transition table for the given stream and chain order.
	///
	/// For every window `tokens[i..i + order]` with a following token, the
	/// follower `tokens[i + order]` is appended to that window's successor
	/// list. If `tokens.len() <= order` there is no valid window and the
	/// table is empty; the caller handles that case by emitting the raw
	/// token stream instead of sampling.
	///
	/// The caller is expected to pass an order already clamped to
	/// `[1, max(1, tokens.len() - 1)]`; the builder does not clamp.
	pub fn build(tokens: &[String], order: usize) -> Self {
		let mut transitions: HashMap<Vec<String>, Vec<String>> = HashMap::new();

		if tokens.len() > order {
			for window in tokens.windows(order + 1) {
				let (state, next) = window.split_at(order);
				transitions
					.entry(state.to_vec())
					.or_default()
					.push(next[0].clone());
			}
		}

		Self { order, transitions }
	}

	/// The chain order this table was built with.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns all observed successors for a state window, or `None` if the
	/// window never occurred with a follower. Equality is element-wise and
	/// order-sensitive.
	pub fn successors(&self, state: &[String]) -> Option<&[String]> {
		self.transitions.get(state).map(Vec::as_slice)
	}

	/// Number of distinct state windows in the table.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}
}
