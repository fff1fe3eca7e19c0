//! Shared application state for the axum handlers.

use std::sync::Arc;

use crate::usecase::{
    AttachControllerUseCase, DetachControllerUseCase, DispatchCommandUseCase,
    GetSpeakerStateUseCase,
};

/// Shared application state
pub struct AppState {
    /// AttachControllerUseCase（コントローラ接続のユースケース）
    pub attach_controller_usecase: Arc<AttachControllerUseCase>,
    /// DetachControllerUseCase（コントローラ切断のユースケース）
    pub detach_controller_usecase: Arc<DetachControllerUseCase>,
    /// DispatchCommandUseCase（コマンド実行のユースケース）
    pub dispatch_command_usecase: Arc<DispatchCommandUseCase>,
    /// GetSpeakerStateUseCase（スピーカー状態取得のユースケース）
    pub get_speaker_state_usecase: Arc<GetSpeakerStateUseCase>,
}
