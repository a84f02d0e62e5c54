//! Промпты, которыми были сгенерированы статические артефакты.
//!
//! Показываются в окне метаданных и уходят в remix-запрос как исходное ТЗ.

use super::ModelVariant;
use once_cell::sync::Lazy;

pub const PROMPT_BASE: &str = r#"
Create a sophisticated, 3D runner game "Curator's Run" contained in a single HTML file using Three.js.
The Design Philosophy is "**Void Nautical**" mapped to "**Editorial Brutalism**".

### 1. Visual Identity (The "Mare Incognita" System)
*   **Palette:** Background is **Void Black / Deep Ocean** (#050510).
*   **Environment:**
    *   **Sky:** Infinite Void with **Milky Way** particle system (White/Blue stars).
    *   **Sea:** Deep Navy/Black water with Silver reflections.
    *   **Underlay:** A **Blueprint Constellation Map** must be visible *beneath* the water surface.
    *   **CRITICAL:** Do NOT use external images. Generate the map texture procedurally (CanvasTexture) with dark background and thin white/cyan lines.
*   **Player:** A **Lego-style Voxel Pirate Ship**.
    *   Constructed from primitive BoxGeometries.
    *   Blue Hull, White Deck, Red Trim, Black Mast, White Square Sails.
    *   **CRITICAL:** Ensure Shadow Maps are correctly sized so the ship does not have "box artifacts" or clipped shadows around it.

### 2. Game Assets (The Curator's Artifacts)
*   **Tier 1 (The Magnum Opus):** Dodecahedron (10 Points).
*   **Tier 2 (The Exhibition):** Box (5 Points).
*   **Tier 3 (The Sketch):** Tetrahedron (2 Points).

**Color Mapping:**
*   **Institution:** Deep Royal Blue (#28317C)
*   **Academic:** Silver (#E5E5E5)
*   **Discourse:** White Wireframe (#FFFFFF)
*   **Network:** Azure Blue (#3B82F6)

### 3. Core Logic: The Chronos Gates
*   Eras: 10s -> 20s -> 30s.
*   End of Era: Spawn 3 "Chronos Gates" (Wooden Frames) with canvas text labels.
*   Gate Choices: SCANDAL vs ELITE (10s), EXPULSION vs ACCLAIM (20s), HIATUS vs MUSEUM (30s).

### 4. UI (Editorial HUD)
*   Display "Era", "Score", and "Trajectory Path" using serif fonts on dark backgrounds.
"#;

static PROMPT_GEMINI2P5: Lazy<String> = Lazy::new(|| {
    format!(
        "{}\n\n(Generated by Gemini 2.5 Pro - Optimized for Mobile Performance)",
        PROMPT_BASE
    )
});

static PROMPT_GEMINI3: Lazy<String> = Lazy::new(|| {
    format!(
        "{}\n\n(Generated by Gemini 3 Pro - High Fidelity Shaders, Lego Ship Model, Void Lighting)",
        PROMPT_BASE
    )
});

/// Исходный промпт генерации для варианта
pub fn generation_prompt(variant: ModelVariant) -> &'static str {
    match variant {
        ModelVariant::Gemini2p5 => PROMPT_GEMINI2P5.as_str(),
        ModelVariant::Gemini3 => PROMPT_GEMINI3.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_share_base_and_differ_by_suffix() {
        let lite = generation_prompt(ModelVariant::Gemini2p5);
        let void = generation_prompt(ModelVariant::Gemini3);
        assert!(lite.starts_with(PROMPT_BASE));
        assert!(void.starts_with(PROMPT_BASE));
        assert!(lite.ends_with("Optimized for Mobile Performance)"));
        assert!(void.contains("Gemini 3 Pro"));
    }
}
