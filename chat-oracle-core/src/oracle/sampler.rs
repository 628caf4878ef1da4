use rand::Rng;

use super::chain::TransitionTable;
use super::token::is_terminal;

/// Maximum number of uniform resamples when the candidate start window
/// contains a sentence terminal. Once exhausted, the last draw is accepted
/// as-is so pathological input (for example a stream of periods) can never
/// loop forever.
const START_STATE_RETRIES: usize = 10;

/// Generates a token sequence by walking the transition table.
///
/// The output is seeded with a randomly chosen `order`-length start window
/// from the source stream, then extended one token at a time:
/// 1. Look up the last `order` tokens of the output in the table.
/// 2. Stop if the window has no recorded successors.
/// 3. Draw one successor uniformly from the (repetition-weighted) list.
/// 4. Append it; stop immediately if it is a sentence terminal.
///
/// At most `max_tokens - order` extension steps are performed, so the
/// output never exceeds `max_tokens` tokens and always terminates.
///
/// # Notes
/// - The caller guarantees `tokens.len() > order` (the degenerate short
///   stream is handled upstream by emitting the raw tokens).
/// - The random source is passed in explicitly so tests can seed it.
pub fn generate<R: Rng + ?Sized>(
	tokens: &[String],
	order: usize,
	table: &TransitionTable,
	max_tokens: usize,
	rng: &mut R,
) -> Vec<String> {
	let mut generated = pick_starting_state(tokens, order, rng);

	for _ in 0..max_tokens.saturating_sub(order) {
		let state = &generated[generated.len() - order..];
		let Some(successors) = table.successors(state) else {
			break;
		};
		// Successor lists are non-empty by construction
		let next = successors[rng.random_range(0..successors.len())].clone();
		let terminal = is_terminal(&next);
		generated.push(next);
		if terminal {
			break;
		}
	}

	generated
}

/// Uniformly picks an `order`-length start window from the stream,
/// resampling up to [`START_STATE_RETRIES`] times while the candidate
/// contains a sentence terminal. The last draw is kept once retries run
/// out; that fallback is deliberate, not a failure.
fn pick_starting_state<R: Rng + ?Sized>(
	tokens: &[String],
	order: usize,
	rng: &mut R,
) -> Vec<String> {
	let max_start = tokens.len() - order;
	let mut start = rng.random_range(0..=max_start);

	let mut retries = 0;
	while retries < START_STATE_RETRIES
		&& tokens[start..start + order].iter().any(|t| is_terminal(t))
	{
		start = rng.random_range(0..=max_start);
		retries += 1;
	}

	tokens[start..start + order].to_vec()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn stream(tokens: &[&str]) -> Vec<String> {
		tokens.iter().map(|t| t.to_string()).collect()
	}

	fn contains_window(tokens: &[String], window: &[String]) -> bool {
		tokens.windows(window.len()).any(|w| w == window)
	}

	#[test]
	fn output_is_bounded_on_cyclic_chains() {
		// Every state has exactly one successor and the chain cycles forever
		let tokens = stream(&["a", "b", "a", "b", "a"]);
		let table = TransitionTable::build(&tokens, 1);

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let generated = generate(&tokens, 1, &table, 12, &mut rng);
			assert!(generated.len() <= 12);
			assert!(!generated.is_empty());
		}
	}

	#[test]
	fn stops_right_after_a_terminal_token() {
		// Whatever the start window, the walk must end on the period
		let tokens = stream(&["a", "b", "."]);
		let table = TransitionTable::build(&tokens, 1);

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let generated = generate(&tokens, 1, &table, 40, &mut rng);

			assert_eq!(generated.last().unwrap(), ".");
			assert_eq!(generated.iter().filter(|t| is_terminal(t)).count(), 1);
			assert!(generated.len() <= tokens.len());
		}
	}

	#[test]
	fn stops_when_a_state_has_no_successors() {
		let tokens = stream(&["one", "two", "three"]);
		let table = TransitionTable::build(&tokens, 2);

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let generated = generate(&tokens, 2, &table, 40, &mut rng);
			// Both possible walks dead-end within the source stream
			assert!(generated.len() <= 3);
			assert!(generated.len() >= 2);
		}
	}

	#[test]
	fn every_transition_in_the_output_was_observed() {
		let tokens = stream(&["we", "sow", "the", "wind", "and", "we", "reap", "the", "storm"]);
		let order = 2;
		let table = TransitionTable::build(&tokens, order);

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let generated = generate(&tokens, order, &table, 40, &mut rng);

			// The seed window comes straight from the source stream
			assert!(contains_window(&tokens, &generated[..order]));
			// Each extension step used an observed (state, successor) pair
			for window in generated.windows(order + 1) {
				assert!(contains_window(&tokens, window));
			}
		}
	}

	#[test]
	fn start_window_avoids_terminals_when_possible() {
		let tokens = stream(&["a", ".", "b", "c"]);
		let mut terminal_starts = 0;

		for seed in 0..100 {
			let mut rng = StdRng::seed_from_u64(seed);
			let start = pick_starting_state(&tokens, 1, &mut rng);
			if is_terminal(&start[0]) {
				terminal_starts += 1;
			}
		}

		// Ten retries make a terminal start vanishingly rare here
		assert!(terminal_starts < 5);
	}

	#[test]
	fn retry_exhaustion_accepts_a_terminal_window() {
		// Nothing but terminals: retries run out and the last draw is kept
		let tokens = stream(&[".", "!", "?"]);
		let table = TransitionTable::build(&tokens, 1);

		let mut rng = StdRng::seed_from_u64(7);
		let start = pick_starting_state(&tokens, 1, &mut rng);
		assert!(is_terminal(&start[0]));

		let generated = generate(&tokens, 1, &table, 40, &mut rng);
		assert!(!generated.is_empty());
		assert!(generated.len() <= 2);
	}
}
