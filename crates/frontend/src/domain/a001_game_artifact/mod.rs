//! Game Artifact: загрузка статического артефакта и его показ в iframe.

pub mod api;
pub mod ui;
