pub mod a001_game_artifact;
