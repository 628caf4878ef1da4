/// Punctuation marks kept as standalone single-character tokens.
pub const PUNCTUATION_TOKENS: [&str; 6] = [".", ",", "!", "?", ";", ":"];

/// Tokens that close a sentence and stop generation early.
pub const TERMINAL_TOKENS: [&str; 3] = [".", "!", "?"];

/// Returns true if the token ends a sentence (`.`, `!` or `?`).
pub fn is_terminal(token: &str) -> bool {
	TERMINAL_TOKENS.contains(&token)
}

/// Returns true if the token is one of the recognized punctuation marks.
pub fn is_punctuation(token: &str) -> bool {
	PUNCTUATION_TOKENS.contains(&token)
}

/// Characters that belong to a word token: letters, digits, underscore
/// and apostrophe (so contractions like "don't" stay one token).
fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == '\''
}

fn is_punctuation_char(c: char) -> bool {
	matches!(c, '.' | ',' | '!' | '?' | ';' | ':')
}

/// Tokenizes a batch of chat messages into one flat token stream.
///
/// Scans each message left to right: a run of word characters becomes one
/// token, each punctuation mark becomes its own single-character token and
/// every other character (whitespace, stray symbols) is discarded.
///
/// # Notes
/// - Messages that are empty or all-whitespace are skipped.
/// - Tokens from all messages are concatenated in message order; message
///   boundaries are not marked in the stream.
/// - Empty input yields an empty stream; there are no error conditions.
pub fn tokenize<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
	let mut tokens = Vec::new();
	for message in messages {
		let body = message.as_ref();
		if body.trim().is_empty() {
			continue;
		}

		let mut word = String::new();
		for c in body.chars() {
			if is_word_char(c) {
				word.push(c);
				continue;
			}
			if !word.is_empty() {
				tokens.push(std::mem::take(&mut word));
			}
			if is_punctuation_char(c) {
				tokens.push(c.to_string());
			}
		}
		if !word.is_empty() {
			tokens.push(word);
		}
	}
	tokens
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn tokenize_one(message: &str) -> Vec<String> {
		tokenize(&[message])
	}

	#[test]
	fn splits_words_and_punctuation() {
		assert_eq!(
			tokenize_one("Hello, world! How are you?"),
			vec!["Hello", ",", "world", "!", "How", "are", "you", "?"]
		);
	}

	#[test]
	fn keeps_apostrophes_underscores_and_digits_in_words() {
		assert_eq!(
			tokenize_one("don't touch my_var2; it's 42"),
			vec!["don't", "touch", "my_var2", ";", "it's", "42"]
		);
	}

	#[test]
	fn discards_unmatched_symbols() {
		assert_eq!(tokenize_one("a + b = (c)"), vec!["a", "b", "c"]);
	}

	#[test]
	fn skips_blank_messages() {
		assert_eq!(tokenize(&["", "   ", "\t\n", "ok"]), vec!["ok"]);
	}

	#[test]
	fn flattens_messages_in_order() {
		assert_eq!(
			tokenize(&["one two.", "three"]),
			vec!["one", "two", ".", "three"]
		);
	}

	#[test]
	fn empty_input_yields_empty_stream() {
		let none: [&str; 0] = [];
		assert!(tokenize(&none).is_empty());
	}

	#[test]
	fn terminal_tokens_are_punctuation() {
		for token in TERMINAL_TOKENS {
			assert!(is_punctuation(token));
			assert!(is_terminal(token));
		}
		assert!(!is_terminal(","));
		assert!(!is_terminal("word"));
	}

	proptest! {
		/// Every emitted token is either a run of word characters or exactly
		/// one punctuation mark, and tokens appear in source order.
		#[test]
		fn tokens_are_classified_and_ordered(input in ".*") {
			let tokens = tokenize_one(&input);
			let mut pos = 0;
			for token in &tokens {
				prop_assert!(!token.is_empty());
				let word = token.chars().all(is_word_char);
				let punctuation = token.chars().count() == 1 && is_punctuation(token);
				prop_assert!(word || punctuation);

				// Each token occurs in the source, after the previous one
				let found = input[pos..].find(token.as_str());
				prop_assert!(found.is_some());
				pos += found.unwrap() + token.len();
			}
		}
	}
}
