use std::sync::Arc;

use college_search::db::establish_connection_pool;
use college_search::matching::{SearchService, SimilarityMatcher};
use college_search::models::config::ServerConfig;
use college_search::processing::{ZMQMessage, ZMQReply, handle_message};
use college_search::repository::DieselRepository;

fn encode(reply: &ZMQReply) -> Vec<u8> {
    serde_json::to_vec(reply).unwrap_or_else(|e| {
        log::error!("Failed to encode reply: {e}");
        br#"{"Error":"failed to encode reply"}"#.to_vec()
    })
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let matcher = match SimilarityMatcher::new(config.similarity_threshold, config.max_compare_len)
    {
        Ok(matcher) => matcher,
        Err(e) => {
            log::error!("Invalid matching configuration: {e}");
            std::process::exit(1);
        }
    };
    let search = Arc::new(SearchService::new(matcher));
    log::info!(
        "Matching with threshold {} and input limit {} characters",
        search.matcher().threshold(),
        search.matcher().max_len()
    );

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = Arc::new(DieselRepository::new(pool));

    let context = zmq::Context::new();
    let responder = match context.socket(zmq::REP) {
        Ok(socket) => socket,
        Err(e) => {
            log::error!("Cannot create zmq socket: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = responder.bind(&config.zmq_address) {
        log::error!("Cannot bind to {}: {e}", config.zmq_address);
        std::process::exit(1);
    }

    log::info!("Listening on {}", config.zmq_address);

    loop {
        let msg = match responder.recv_bytes(0) {
            Ok(msg) => msg,
            Err(e) => {
                log::error!("Failed to receive message: {e}");
                continue;
            }
        };

        // REP sockets must answer every request before the next recv
        let reply = match serde_json::from_slice::<ZMQMessage>(&msg) {
            Ok(parsed) => {
                let repo = Arc::clone(&repo);
                let search = Arc::clone(&search);
                // Requests are still handled one at a time; the blocking task
                // keeps diesel off the runtime and turns a panic into a reply
                tokio::task::spawn_blocking(move || handle_message(parsed, repo.as_ref(), &search))
                    .await
                    .unwrap_or_else(|e| {
                        log::error!("Request handler panicked: {e}");
                        ZMQReply::Error("internal error".to_string())
                    })
            }
            Err(e) => {
                log::error!("Failed to parse JSON: {e}");
                ZMQReply::Error(format!("invalid request: {e}"))
            }
        };

        if let Err(e) = responder.send(encode(&reply), 0) {
            log::error!("Failed to send reply: {e}");
        }
    }
}
