use serde::{Deserialize, Serialize};

/// Результат remix: новая разметка, готовая к показу в iframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemixResponse {
    pub html: String,

    /// Модель, фактически выполнившая запрос
    pub model: String,
}
