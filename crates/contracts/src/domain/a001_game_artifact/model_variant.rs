use serde::{Deserialize, Serialize};

/// Вариант модели, которым был сгенерирован артефакт
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    Gemini2p5,
    #[default]
    Gemini3,
}

impl ModelVariant {
    /// Код варианта (используется в API и ключах iframe)
    pub fn code(&self) -> &'static str {
        match self {
            ModelVariant::Gemini2p5 => "gemini2p5",
            ModelVariant::Gemini3 => "gemini3",
        }
    }

    /// Подпись кнопки переключения
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelVariant::Gemini2p5 => "v2.5 Lite",
            ModelVariant::Gemini3 => "v3.0 Void",
        }
    }

    /// Относительный путь статического артефакта
    pub fn artifact_path(&self) -> &'static str {
        match self {
            ModelVariant::Gemini2p5 => "./init/gemini2p5.html",
            ModelVariant::Gemini3 => "./init/gemini3.html",
        }
    }

    /// Идентификатор удалённой модели для remix
    pub fn remote_model_id(&self) -> &'static str {
        match self {
            ModelVariant::Gemini2p5 => "gemini-2.5-pro",
            ModelVariant::Gemini3 => "gemini-3-pro-preview",
        }
    }

    pub fn all() -> Vec<ModelVariant> {
        vec![ModelVariant::Gemini2p5, ModelVariant::Gemini3]
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
