//! インメモリの SpeakerRepository 実装
//!
//! スピーカーの状態は単一のプロセス内にしか存在しないため、永続化は
//! 行わず `Arc<Mutex<SpeakerState>>` で保持します。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, SpeakerRepository, SpeakerState, StatusReport};
use hibiki_shared::command::Command;

/// インメモリの SpeakerRepository 実装
pub struct InMemorySpeakerRepository {
    state: Arc<Mutex<SpeakerState>>,
}

impl InMemorySpeakerRepository {
    pub fn new(state: Arc<Mutex<SpeakerState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl SpeakerRepository for InMemorySpeakerRepository {
    async fn get_state(&self) -> Result<SpeakerState, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.clone())
    }

    async fn apply_command(
        &self,
        command: Command,
        now_millis: i64,
    ) -> Result<StatusReport, RepositoryError> {
        let mut state = self.state.lock().await;
        Ok(state.apply(command, now_millis))
    }
}
