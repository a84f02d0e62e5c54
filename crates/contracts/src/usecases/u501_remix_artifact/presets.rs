/// Готовая инструкция для remix, предлагаемая в модальном окне
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemixPreset {
    pub instruction: &'static str,
    pub description: &'static str,
}

pub const REMIX_PRESETS: [RemixPreset; 3] = [
    RemixPreset {
        instruction: "Hard Mode: Stormy Abyss",
        description: "Violent waves and lightning",
    },
    RemixPreset {
        instruction: "Visual: Red Alert",
        description: "Emergency aesthetics",
    },
    RemixPreset {
        instruction: "Mechanic: 2x Speed",
        description: "High velocity career",
    },
];
