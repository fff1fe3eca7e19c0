//! Remote speaker control server.
//!
//! Serves the browser control page and accepts WebSocket control
//! connections. Received command strings are applied to the speaker model
//! and the resulting status text is pushed to every attached controller.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hibiki-server
//! cargo run --bin hibiki-server -- --host 127.0.0.1 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use tokio::sync::Mutex;

use hibiki_server::{
    domain::SpeakerState,
    infrastructure::{repository::InMemorySpeakerRepository, status_pusher::WebSocketStatusPusher},
    ui::Server,
    usecase::{
        AttachControllerUseCase, DetachControllerUseCase, DispatchCommandUseCase,
        GetSpeakerStateUseCase,
    },
};
use hibiki_shared::{
    DEFAULT_PORT,
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "hibiki-server")]
#[command(about = "Remote speaker control server over WebSocket", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. StatusPusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory speaker state)
    let clock = Arc::new(SystemClock);
    let state = Arc::new(Mutex::new(SpeakerState::new(clock.now_millis())));
    tracing::info!("Speaker state initialized");
    let repository = Arc::new(InMemorySpeakerRepository::new(state));

    // 2. Create StatusPusher (WebSocket implementation)
    let controllers = Arc::new(Mutex::new(HashMap::new()));
    let status_pusher = Arc::new(WebSocketStatusPusher::new(controllers));

    // 3. Create UseCases
    let attach_controller_usecase = Arc::new(AttachControllerUseCase::new(
        repository.clone(),
        status_pusher.clone(),
        clock.clone(),
    ));
    let detach_controller_usecase = Arc::new(DetachControllerUseCase::new(status_pusher.clone()));
    let dispatch_command_usecase = Arc::new(DispatchCommandUseCase::new(
        repository.clone(),
        status_pusher.clone(),
        clock.clone(),
    ));
    let get_speaker_state_usecase =
        Arc::new(GetSpeakerStateUseCase::new(repository.clone(), clock));

    // 4. Create and run the server
    let server = Server::new(
        attach_controller_usecase,
        detach_controller_usecase,
        dispatch_command_usecase,
        get_speaker_state_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
