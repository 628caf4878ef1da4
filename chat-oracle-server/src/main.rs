use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};
use serde::Deserialize;

use chat_oracle_core::oracle::boundary::consult;
use chat_oracle_core::oracle::orchestrator::{DEFAULT_CHAIN_ORDER, Oracle};

mod store;
use store::RoomStore;

/// Query parameters for the `/v1/say` endpoint
#[derive(Deserialize)]
struct SayParams {
	room: String,
	sender: Option<String>,
	body: String,
}

/// Query parameters for the `/v1/oracle` endpoint
#[derive(Deserialize)]
struct OracleParams {
	room: String,
	order: Option<usize>, // defaults to 2, clamped to the token stream
}

#[derive(Deserialize)]
struct RoomQuery {
	room: String,
}

struct SharedData {
	oracle: Oracle,
	store: RoomStore,
}

/// HTTP PUT endpoint `/v1/say`
///
/// Records a chat message in a room, creating the room on first use.
#[put("/v1/say")]
async fn put_say(data: web::Data<Mutex<SharedData>>, query: web::Query<SayParams>) -> impl Responder {
	let room = query.room.trim();
	let body = query.body.trim();
	if room.is_empty() || body.is_empty() {
		return HttpResponse::BadRequest().body("Missing or empty room/body");
	}
	let sender = match &query.sender {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => "anonymous",
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Store lock failed"),
	};
	shared_data.store.say(room, sender, body);

	HttpResponse::Ok().body("Message recorded")
}

/// HTTP GET endpoint `/v1/oracle`
///
/// Consults the oracle over the room's recent history, stores the answer
/// in the room as a message from the oracle user, and returns the prophecy
/// (text plus metadata) as JSON. Out-of-range orders are clamped, never
/// rejected; an unknown or empty room yields the silent fallback.
#[get("/v1/oracle")]
async fn get_oracle(data: web::Data<Mutex<SharedData>>, query: web::Query<OracleParams>) -> impl Responder {
	let order = query.order.unwrap_or(DEFAULT_CHAIN_ORDER);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Store lock failed"),
	};
	let shared = &mut *shared_data;

	match consult(&shared.oracle, &mut shared.store, &query.room, order, &mut rand::rng()) {
		Ok(prophecy) => {
			log::info!(
				"oracle spoke in '{}': {} messages analyzed, order {}",
				query.room,
				prophecy.metadata.messages_analyzed,
				prophecy.metadata.chain_order
			);
			HttpResponse::Ok().json(prophecy)
		}
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

/// HTTP GET endpoint `/v1/history`
///
/// Returns the room's messages as "sender: body" lines, oldest first.
#[get("/v1/history")]
async fn get_history(data: web::Data<Mutex<SharedData>>, query: web::Query<RoomQuery>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Store lock failed"),
	};

	match shared_data.store.history(&query.room) {
		Some(messages) => {
			let lines: Vec<String> = messages
				.iter()
				.map(|m| format!("{}: {}", m.sender, m.body))
				.collect();
			HttpResponse::Ok().body(lines.join("\n"))
		}
		None => HttpResponse::NotFound().body("Room not found"),
	}
}

#[get("/v1/rooms")]
async fn get_rooms(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Store lock failed"),
	};
	HttpResponse::Ok().body(shared_data.store.room_names().join("\n"))
}

/// Main entry point for the server.
///
/// Wraps the in-memory room store and the oracle in a `Mutex` for thread
/// safety and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - CORS is permissive so a browser frontend can talk to it directly.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		oracle: Oracle::new(),
		store: RoomStore::new(),
	};
	let shared_store = web::Data::new(Mutex::new(shared_data));

	log::info!("chat-oracle server listening on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_store.clone())
			.service(put_say)
			.service(get_oracle)
			.service(get_history)
			.service(get_rooms)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
