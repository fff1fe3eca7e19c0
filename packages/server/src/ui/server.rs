//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    AttachControllerUseCase, DetachControllerUseCase, DispatchCommandUseCase,
    GetSpeakerStateUseCase,
};

use super::{
    handler::{
        http::{get_state, health_check, serve_script, serve_stylesheet},
        websocket::control_endpoint,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Remote speaker control server
///
/// Serves the control page and the WebSocket control endpoint from the same
/// root path.
pub struct Server {
    /// AttachControllerUseCase（コントローラ接続のユースケース）
    attach_controller_usecase: Arc<AttachControllerUseCase>,
    /// DetachControllerUseCase（コントローラ切断のユースケース）
    detach_controller_usecase: Arc<DetachControllerUseCase>,
    /// DispatchCommandUseCase（コマンド実行のユースケース）
    dispatch_command_usecase: Arc<DispatchCommandUseCase>,
    /// GetSpeakerStateUseCase（スピーカー状態取得のユースケース）
    get_speaker_state_usecase: Arc<GetSpeakerStateUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        attach_controller_usecase: Arc<AttachControllerUseCase>,
        detach_controller_usecase: Arc<DetachControllerUseCase>,
        dispatch_command_usecase: Arc<DispatchCommandUseCase>,
        get_speaker_state_usecase: Arc<GetSpeakerStateUseCase>,
    ) -> Self {
        Self {
            attach_controller_usecase,
            detach_controller_usecase,
            dispatch_command_usecase,
            get_speaker_state_usecase,
        }
    }

    /// Run the control server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 8085)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(
        self,
        host: String,
        port: u16,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app_state = Arc::new(AppState {
            attach_controller_usecase: self.attach_controller_usecase,
            detach_controller_usecase: self.detach_controller_usecase,
            dispatch_command_usecase: self.dispatch_command_usecase,
            get_speaker_state_usecase: self.get_speaker_state_usecase,
        });

        // Define handlers
        let app = Router::new()
            // 制御ページ兼 WebSocket エンドポイント（同一パス）
            .route("/", get(control_endpoint))
            // 静的アセット
            .route("/css/style.css", get(serve_stylesheet))
            .route("/script/script.js", get(serve_script))
            // HTTP API
            .route("/api/health", get(health_check))
            .route("/api/state", get(get_state))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Speaker control server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Control page: http://{}/", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
