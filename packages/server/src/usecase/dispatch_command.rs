//! UseCase: コマンド実行処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DispatchCommandUseCase::execute() メソッド
//! - コマンド適用とステータスのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - コマンドがスピーカー状態に正しく反映されることを確認
//! - 適用結果のステータステキストが全コントローラへ通知されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：コマンド適用とブロードキャスト
//! - 異常系：ブロードキャスト失敗

use std::sync::Arc;

use crate::domain::{SpeakerRepository, StatusPusher, StatusReport};
use hibiki_shared::{command::Command, time::Clock};

use super::error::DispatchCommandError;

/// コマンド実行のユースケース
pub struct DispatchCommandUseCase {
    /// Repository（スピーカー状態へのアクセスの抽象化）
    repository: Arc<dyn SpeakerRepository>,
    /// StatusPusher（ステータス通知の抽象化）
    status_pusher: Arc<dyn StatusPusher>,
    /// Clock（現在時刻の抽象化）
    clock: Arc<dyn Clock>,
}

impl DispatchCommandUseCase {
    pub fn new(
        repository: Arc<dyn SpeakerRepository>,
        status_pusher: Arc<dyn StatusPusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            status_pusher,
            clock,
        }
    }

    /// コマンド実行を実行
    ///
    /// # Arguments
    ///
    /// * `command` - 適用するコマンド
    ///
    /// # Returns
    ///
    /// * `Ok(StatusReport)` - 適用結果のステータス（ブロードキャスト済み）
    /// * `Err(DispatchCommandError)` - 適用またはブロードキャストの失敗
    pub async fn execute(&self, command: Command) -> Result<StatusReport, DispatchCommandError> {
        let now_millis = self.clock.now_millis();

        // 1. Repository 経由でコマンドを適用
        let report = self
            .repository
            .apply_command(command, now_millis)
            .await
            .map_err(|_| DispatchCommandError::StateUnavailable)?;

        // 2. 結果のステータスを全コントローラへブロードキャスト
        self.status_pusher
            .broadcast(&report.text)
            .await
            .map_err(|e| DispatchCommandError::BroadcastFailed(e.to_string()))?;

        Ok(report)
    }
}
