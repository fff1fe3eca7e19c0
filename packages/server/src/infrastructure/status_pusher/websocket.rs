//! WebSocket を使った StatusPusher 実装
//!
//! ## 責務
//!
//! - 接続中のコントローラの `UnboundedSender` を管理
//! - コントローラへのステータステキスト送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket 接続の受付と sender の生成は UI 層
//! （`src/ui/handler/websocket.rs`）で行われます。この実装は生成された
//! sender を受け取り、送信にのみ使用します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ControllerId, PusherChannel, StatusPushError, StatusPusher};

/// WebSocket を使った StatusPusher 実装
pub struct WebSocketStatusPusher {
    /// 接続中のコントローラの sender マップ
    controllers: Arc<Mutex<HashMap<ControllerId, PusherChannel>>>,
}

impl WebSocketStatusPusher {
    pub fn new(controllers: Arc<Mutex<HashMap<ControllerId, PusherChannel>>>) -> Self {
        Self { controllers }
    }
}

#[async_trait]
impl StatusPusher for WebSocketStatusPusher {
    async fn attach(&self, controller_id: ControllerId, sender: PusherChannel) {
        let mut controllers = self.controllers.lock().await;
        controllers.insert(controller_id, sender);
        tracing::debug!("Controller '{}' attached to StatusPusher", controller_id);
    }

    async fn detach(&self, controller_id: &ControllerId) {
        let mut controllers = self.controllers.lock().await;
        controllers.remove(controller_id);
        tracing::debug!("Controller '{}' detached from StatusPusher", controller_id);
    }

    async fn push_to(
        &self,
        controller_id: &ControllerId,
        text: &str,
    ) -> Result<(), StatusPushError> {
        let controllers = self.controllers.lock().await;

        if let Some(sender) = controllers.get(controller_id) {
            sender
                .send(text.to_string())
                .map_err(|e| StatusPushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed status to controller '{}'", controller_id);
            Ok(())
        } else {
            Err(StatusPushError::ControllerNotFound(
                controller_id.to_string(),
            ))
        }
    }

    async fn broadcast(&self, text: &str) -> Result<(), StatusPushError> {
        let controllers = self.controllers.lock().await;

        for (controller_id, sender) in controllers.iter() {
            // ブロードキャストでは一部の送信失敗を許容
            if let Err(e) = sender.send(text.to_string()) {
                tracing::warn!(
                    "Failed to push status to controller '{}': {}",
                    controller_id,
                    e
                );
            } else {
                tracing::debug!("Broadcasted status to controller '{}'", controller_id);
            }
        }

        Ok(())
    }
}
