use std::collections::HashMap;

use chat_oracle_core::oracle::boundary::{MessageSource, ProphecySink};
use chat_oracle_core::oracle::orchestrator::{MAX_HISTORY, ORACLE_USERNAME, Prophecy};

/// One stored chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
	pub sender: String,
	pub body: String,
}

/// In-memory room/message store.
///
/// Stands in for the chat system's persistence layer: it records messages
/// per room in arrival order and plays both oracle boundary roles — the
/// message source (recent history, capped and chronological) and the
/// prophecy sink (stores the answer as a message from the oracle user).
#[derive(Default)]
pub struct RoomStore {
	rooms: HashMap<String, Vec<ChatMessage>>,
}

impl RoomStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a message to a room, creating the room on first use.
	pub fn say(&mut self, room: &str, sender: &str, body: &str) {
		self.rooms.entry(room.to_owned()).or_default().push(ChatMessage {
			sender: sender.to_owned(),
			body: body.to_owned(),
		});
	}

	/// Room names, sorted for stable listings.
	pub fn room_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.rooms.keys().cloned().collect();
		names.sort();
		names
	}

	/// Full history of a room, oldest first.
	pub fn history(&self, room: &str) -> Option<&[ChatMessage]> {
		self.rooms.get(room).map(Vec::as_slice)
	}
}

impl MessageSource for RoomStore {
	/// Returns the last [`MAX_HISTORY`] message bodies of the room in
	/// chronological order. An unknown room is an empty history, not an
	/// error — the oracle answers it with its silent fallback.
	fn load_recent_messages(&self, room: &str) -> Result<Vec<String>, String> {
		let messages = self.rooms.get(room).map(Vec::as_slice).unwrap_or(&[]);
		let start = messages.len().saturating_sub(MAX_HISTORY);
		Ok(messages[start..].iter().map(|m| m.body.clone()).collect())
	}
}

impl ProphecySink for RoomStore {
	fn deliver(&mut self, room: &str, prophecy: &Prophecy) -> Result<(), String> {
		self.say(room, ORACLE_USERNAME, &prophecy.text);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chat_oracle_core::oracle::boundary::consult;
	use chat_oracle_core::oracle::orchestrator::Oracle;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn history_is_capped_and_chronological() {
		let mut store = RoomStore::new();
		for i in 0..MAX_HISTORY + 5 {
			store.say("lobby", "ada", &format!("message {i}"));
		}

		let recent = store.load_recent_messages("lobby").unwrap();
		assert_eq!(recent.len(), MAX_HISTORY);
		assert_eq!(recent.first().unwrap(), "message 5");
		assert_eq!(recent.last().unwrap(), &format!("message {}", MAX_HISTORY + 4));
	}

	#[test]
	fn unknown_room_is_an_empty_history() {
		let store = RoomStore::new();
		assert!(store.load_recent_messages("nowhere").unwrap().is_empty());
		assert!(store.history("nowhere").is_none());
	}

	#[test]
	fn delivery_is_authored_by_the_oracle_user() {
		let mut store = RoomStore::new();
		store.say("lobby", "ada", "every storm runs out of rain.");

		let oracle = Oracle::new();
		let mut rng = StdRng::seed_from_u64(11);
		let prophecy = consult(&oracle, &mut store, "lobby", 2, &mut rng).unwrap();

		let history = store.history("lobby").unwrap();
		assert_eq!(history.len(), 2);
		assert_eq!(history[1].sender, ORACLE_USERNAME);
		assert_eq!(history[1].body, prophecy.text);
	}

	#[test]
	fn room_names_are_sorted() {
		let mut store = RoomStore::new();
		store.say("zeta", "ada", "hi");
		store.say("alpha", "lin", "hi");
		assert_eq!(store.room_names(), vec!["alpha", "zeta"]);
	}
}
