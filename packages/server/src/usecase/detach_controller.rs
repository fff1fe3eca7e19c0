//! UseCase: コントローラ切断処理
//!
//! ソケットが閉じたコントローラを StatusPusher から登録解除します。
//! 再接続の追跡やセッションの永続化は行いません。

use std::sync::Arc;

use crate::domain::{ControllerId, StatusPusher};

/// コントローラ切断のユースケース
pub struct DetachControllerUseCase {
    /// StatusPusher（ステータス通知の抽象化）
    status_pusher: Arc<dyn StatusPusher>,
}

impl DetachControllerUseCase {
    pub fn new(status_pusher: Arc<dyn StatusPusher>) -> Self {
        Self { status_pusher }
    }

    /// コントローラ切断を実行
    pub async fn execute(&self, controller_id: ControllerId) {
        self.status_pusher.detach(&controller_id).await;
        tracing::info!("Controller '{}' detached", controller_id);
    }
}
