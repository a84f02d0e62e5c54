//! Game Artifact Domain Module
//!
//! Артефакт — HTML/JS исходник игры, сгенерированный моделью.
//! Включает варианты моделей, промпты генерации и переписывание base path.

pub mod model_variant;
pub mod prompts;
pub mod rewrite;

pub use model_variant::ModelVariant;
pub use rewrite::{
    ensure_remix_base_tag, inject_base_tag, strip_code_fences, BASE_PATH, BASE_TAG,
    ERROR_PLACEHOLDER,
};
