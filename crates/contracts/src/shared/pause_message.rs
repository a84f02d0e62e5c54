//! Сообщение host → iframe для паузы/возобновления игры.
//!
//! Wire shape: `{"type": "PAUSE_GAME", "payload": true, "version": 1}`.
//! Проверяет сообщение сам документ в iframe: он игнорирует чужой `type`,
//! не-boolean `payload` и `version` больше поддерживаемой.

use serde::{Deserialize, Serialize};

pub const PAUSE_MESSAGE_VERSION: u32 = 1;

fn default_version() -> u32 {
    PAUSE_MESSAGE_VERSION
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameMessage {
    #[serde(rename = "PAUSE_GAME")]
    PauseGame {
        /// `true` — поставить на паузу, `false` — продолжить
        payload: bool,
        #[serde(default = "default_version")]
        version: u32,
    },
}

impl FrameMessage {
    pub fn pause(paused: bool) -> Self {
        FrameMessage::PauseGame {
            payload: paused,
            version: PAUSE_MESSAGE_VERSION,
        }
    }

    pub fn is_paused(&self) -> bool {
        match self {
            FrameMessage::PauseGame { payload, .. } => *payload,
        }
    }
}
