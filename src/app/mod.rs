pub mod cli;
pub mod logging;
pub mod pipeline;

pub use pipeline::{RunOutcome, execute};
