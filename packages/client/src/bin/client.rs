//! CLI control client for the hibiki remote speaker.
//!
//! Connects to the control server over WebSocket and sends command strings
//! from stdin. Incoming status text is displayed in a status panel. The
//! session is one-shot: when the connection ends, the process exits without
//! reconnecting.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hibiki-client
//! cargo run --bin hibiki-client -- --url ws://192.168.1.20:8085/
//! ```

use clap::Parser;

use hibiki_client::run_control_session;
use hibiki_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hibiki-client")]
#[command(about = "CLI control client for the hibiki remote speaker", long_about = None)]
struct Args {
    /// WebSocket URL of the control server
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8085/")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run a single session; the session ending is final
    if let Err(e) = run_control_session(&args.url).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
