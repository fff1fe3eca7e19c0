//! StatusPusher trait 定義
//!
//! スピーカーの状態テキストを接続中のコントローラへ送るためのインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::ControllerId;

/// コントローラごとの送信チャネル
///
/// WebSocket の書き込みタスクへステータステキストを渡すチャネル。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// ステータス送信時のエラー
#[derive(Debug, Error)]
pub enum StatusPushError {
    /// 指定されたコントローラが接続されていない
    #[error("controller '{0}' is not attached")]
    ControllerNotFound(String),

    /// チャネルへの送信に失敗
    #[error("failed to push status: {0}")]
    PushFailed(String),
}

/// ステータス通知の抽象化
///
/// UseCase 層はこの trait に依存し、WebSocket の詳細には依存しない。
#[async_trait]
pub trait StatusPusher: Send + Sync {
    /// コントローラを登録
    async fn attach(&self, controller_id: ControllerId, sender: PusherChannel);

    /// コントローラを登録解除
    async fn detach(&self, controller_id: &ControllerId);

    /// 特定のコントローラへステータステキストを送信
    async fn push_to(
        &self,
        controller_id: &ControllerId,
        text: &str,
    ) -> Result<(), StatusPushError>;

    /// 接続中の全コントローラへステータステキストを送信
    ///
    /// 一部のコントローラへの送信失敗は許容する（ログに残して続行）。
    async fn broadcast(&self, text: &str) -> Result<(), StatusPushError>;
}
