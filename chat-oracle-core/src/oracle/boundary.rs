use rand::Rng;

use super::orchestrator::{Oracle, Prophecy};

/// Supplies the recent history of a room, chronological oldest-to-newest
/// and capped at [`MAX_HISTORY`](super::orchestrator::MAX_HISTORY).
///
/// Implemented by the persistence layer; the oracle treats the returned
/// snapshot as immutable for the duration of one consultation.
pub trait MessageSource {
	fn load_recent_messages(&self, room: &str) -> Result<Vec<String>, String>;
}

/// Persists and broadcasts a prophecy as a message authored by the
/// synthetic oracle identity.
pub trait ProphecySink {
	fn deliver(&mut self, room: &str, prophecy: &Prophecy) -> Result<(), String>;
}

/// One full consultation round trip: load the room's recent history, ask
/// the oracle, hand the prophecy to the sink, and return it.
///
/// The store plays both boundary roles, which is the usual shape when a
/// single persistence layer backs the chat system. The only errors are the
/// store's own; the oracle itself cannot fail.
pub fn consult<T, R>(
	oracle: &Oracle,
	store: &mut T,
	room: &str,
	requested_order: usize,
	rng: &mut R,
) -> Result<Prophecy, String>
where
	T: MessageSource + ProphecySink + ?Sized,
	R: Rng + ?Sized,
{
	let messages = store.load_recent_messages(room)?;
	let prophecy = oracle.ask_with_rng(&messages, requested_order, rng);
	store.deliver(room, &prophecy)?;
	Ok(prophecy)
}
