use chat_oracle_core::oracle::boundary::{MessageSource, ProphecySink, consult};
use chat_oracle_core::oracle::orchestrator::{
    DEFAULT_CHAIN_ORDER, ORACLE_USERNAME, Oracle, Prophecy,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Minimal single-room store backing the demo: a list of (sender, body)
/// pairs playing both boundary roles.
struct DemoRoom {
    messages: Vec<(String, String)>,
}

impl MessageSource for DemoRoom {
    fn load_recent_messages(&self, _room: &str) -> Result<Vec<String>, String> {
        Ok(self.messages.iter().map(|(_, body)| body.clone()).collect())
    }
}

impl ProphecySink for DemoRoom {
    fn deliver(&mut self, _room: &str, prophecy: &Prophecy) -> Result<(), String> {
        self.messages
            .push((ORACLE_USERNAME.to_owned(), prophecy.text.clone()));
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A short scripted conversation, oldest to newest
    let mut room = DemoRoom {
        messages: [
            ("ada", "The river rises every spring, and every spring we are surprised."),
            ("lin", "Surprised? We built the dam for that."),
            ("ada", "The dam holds the water, not the surprise."),
            ("noa", "Then we should build a dam for the surprise!"),
            ("lin", "Every spring the same debate, every spring the same river."),
        ]
        .into_iter()
        .map(|(sender, body)| (sender.to_owned(), body.to_owned()))
        .collect(),
    };

    let oracle = Oracle::new();

    // Ask directly, without going through the boundary traits
    let bodies = room.load_recent_messages("demo")?;
    for i in 0..3 {
        let prophecy = oracle.ask(&bodies, DEFAULT_CHAIN_ORDER);
        println!("Prophecy {}: {}", i + 1, prophecy.text);
    }

    // Requesting an oversized order: the oracle clamps it instead of failing
    let prophecy = oracle.ask(&bodies, 50);
    println!(
        "Clamped run: order 50 requested, {} used ({} messages, {} unique tokens)",
        prophecy.metadata.chain_order,
        prophecy.metadata.messages_analyzed,
        prophecy.metadata.unique_tokens
    );

    // A seeded generator makes a run reproducible
    let mut rng = StdRng::seed_from_u64(42);
    let prophecy = oracle.ask_with_rng(&bodies, DEFAULT_CHAIN_ORDER, &mut rng);
    println!("Seeded run: {}", prophecy.text);

    // Full round trip through the boundary traits: the prophecy lands in
    // the room as a message authored by the oracle user
    consult(&oracle, &mut room, "demo", DEFAULT_CHAIN_ORDER, &mut rng)?;
    let (sender, body) = room.messages.last().ok_or("empty room")?;
    println!("{sender} said: {body}");

    Ok(())
}
