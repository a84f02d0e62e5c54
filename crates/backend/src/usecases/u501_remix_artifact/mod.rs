pub mod executor;

pub use executor::{RemixError, RemixExecutor};
