//! UseCase: コントローラ接続処理
//!
//! 新しく接続したコントローラを StatusPusher に登録し、現在のスピーカー
//! 状態のステータス行をそのコントローラへ送信します。接続直後から
//! コントローラのステータスパネルに最新の状態が表示されます。

use std::sync::Arc;

use crate::domain::{ControllerId, PusherChannel, SpeakerRepository, StatusPusher, StatusReport};
use hibiki_shared::time::Clock;

use super::error::AttachControllerError;

/// コントローラ接続のユースケース
pub struct AttachControllerUseCase {
    /// Repository（スピーカー状態へのアクセスの抽象化）
    repository: Arc<dyn SpeakerRepository>,
    /// StatusPusher（ステータス通知の抽象化）
    status_pusher: Arc<dyn StatusPusher>,
    /// Clock（現在時刻の抽象化）
    clock: Arc<dyn Clock>,
}

impl AttachControllerUseCase {
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

    /// コントローラ接続を実行
    ///
    /// # Arguments
    ///
    /// * `controller_id` - 接続したコントローラの ID
    /// * `sender` - このコントローラへの送信チャネル
    ///
    /// # Returns
    ///
    /// * `Ok(StatusReport)` - 接続時に送信したステータス
    /// * `Err(AttachControllerError)` - 状態の取得に失敗
    pub async fn execute(
        &self,
        controller_id: ControllerId,
        sender: PusherChannel,
    ) -> Result<StatusReport, AttachControllerError> {
        // 1. StatusPusher に登録
        self.status_pusher.attach(controller_id, sender).await;

        // 2. 現在の状態からステータス行を作成
        let state = self
            .repository
            .get_state()
            .await
            .map_err(|_| AttachControllerError::StateUnavailable)?;
        let report = StatusReport::new(state.status_line(self.clock.now_millis()));

        // 3. 接続したコントローラへ送信（失敗しても接続自体は成立させる）
        if let Err(e) = self.status_pusher.push_to(&controller_id, &report.text).await {
            tracing::warn!(
                "Failed to push initial status to controller '{}': {}",
                controller_id,
                e
            );
        }

        Ok(report)
    }
}
