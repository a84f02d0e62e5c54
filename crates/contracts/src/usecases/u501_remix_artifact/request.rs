use crate::domain::a001_game_artifact::ModelVariant;
use serde::{Deserialize, Serialize};

/// Запрос на модификацию текущего артефакта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemixRequest {
    /// Активный вариант: определяет удалённую модель и исходный промпт
    pub variant: ModelVariant,

    /// Текущая разметка артефакта целиком
    pub html: String,

    /// Инструкция пользователя на естественном языке
    pub instruction: String,
}

impl RemixRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.html.trim().is_empty() {
            return Err("Artifact markup is empty".to_string());
        }
        if self.instruction.trim().is_empty() {
            return Err("Remix instruction is empty".to_string());
        }
        Ok(())
    }
}
