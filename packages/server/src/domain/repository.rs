//! Repository trait 定義
//!
//! ドメイン層が必要とするスピーカー状態へのアクセスを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;

use hibiki_shared::command::Command;

use super::{SpeakerState, StatusReport};

/// Repository 操作のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// スピーカーの状態が取得できない
    #[error("speaker state is unavailable")]
    Unavailable,
}

/// Speaker Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には
/// 依存しない。コマンドの適用は状態の読み書きと不可分なので、Repository が
/// アトミックに行う。
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// 現在のスピーカー状態のスナップショットを取得
    async fn get_state(&self) -> Result<SpeakerState, RepositoryError>;

    /// コマンドを適用し、結果のステータスを返す
    async fn apply_command(
        &self,
        command: Command,
        now_millis: i64,
    ) -> Result<StatusReport, RepositoryError>;
}
