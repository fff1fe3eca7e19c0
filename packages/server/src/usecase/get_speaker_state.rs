//! UseCase: スピーカー状態取得処理
//!
//! HTTP API（`GET /api/state`）のためのスナップショット取得。ペアリング
//! 受付の残り判定に使えるよう、取得時刻も合わせて返します。

use std::sync::Arc;

use crate::domain::{SpeakerRepository, SpeakerState};
use hibiki_shared::time::Clock;

use super::error::GetSpeakerStateError;

/// スピーカー状態取得のユースケース
pub struct GetSpeakerStateUseCase {
    /// Repository（スピーカー状態へのアクセスの抽象化）
    repository: Arc<dyn SpeakerRepository>,
    /// Clock（現在時刻の抽象化）
    clock: Arc<dyn Clock>,
}

impl GetSpeakerStateUseCase {
    pub fn new(repository: Arc<dyn SpeakerRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 現在のスピーカー状態のスナップショットと取得時刻（unix millis）を取得
    pub async fn execute(&self) -> Result<(SpeakerState, i64), GetSpeakerStateError> {
        let state = self
            .repository
            .get_state()
            .await
            .map_err(|_| GetSpeakerStateError::StateUnavailable)?;
        Ok((state, self.clock.now_millis()))
    }
}
