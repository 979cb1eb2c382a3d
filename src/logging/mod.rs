//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;

pub use logger::{DRY_RUN_TARGET, Logger, STAGE_TARGET};
pub use subscriber::init_subscriber;

#[cfg(test)]
pub(crate) use subscriber::capture;
