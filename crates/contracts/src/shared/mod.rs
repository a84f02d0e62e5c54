pub mod pause_message;
