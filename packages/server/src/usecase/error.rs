//! UseCase 層のエラー型

use thiserror::Error;

/// コントローラ接続時のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachControllerError {
    /// スピーカーの状態が取得できない
    #[error("speaker state is unavailable")]
    StateUnavailable,
}

/// コマンド実行時のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchCommandError {
    /// スピーカーの状態が取得できない
    #[error("speaker state is unavailable")]
    StateUnavailable,

    /// ステータスのブロードキャストに失敗
    #[error("failed to broadcast status: {0}")]
    BroadcastFailed(String),
}

/// スピーカー状態取得時のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetSpeakerStateError {
    /// スピーカーの状態が取得できない
    #[error("speaker state is unavailable")]
    StateUnavailable,
}
