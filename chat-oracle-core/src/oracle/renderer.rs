use super::token::{is_punctuation, is_terminal};

/// Joins generated tokens back into a readable sentence.
///
/// - The first token is emitted with its first character uppercased.
/// - Punctuation tokens attach directly to the previous token; every other
///   token is preceded by a single space.
/// - If the last token is not a sentence terminal, a closing `.` is added.
///
/// An empty sequence renders to an empty string; the orchestrator decides
/// on the fallback sentence before rendering is ever reached.
pub fn render(tokens: &[String]) -> String {
	let mut rendered = String::new();

	for token in tokens {
		if rendered.is_empty() {
			rendered.push_str(&capitalize(token));
		} else if is_punctuation(token) {
			rendered.push_str(token);
		} else {
			rendered.push(' ');
			rendered.push_str(token);
		}
	}

	if let Some(last) = tokens.last() {
		if !is_terminal(last) {
			rendered.push('.');
		}
	}

	rendered
}

/// Uppercases the first character, leaving the rest unchanged.
fn capitalize(token: &str) -> String {
	let mut chars = token.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
