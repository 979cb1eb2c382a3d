//! Hexxa theme installer.
//!
//! Installs the bundled Hexxa Xcode color theme and, when missing, the
//! JetBrains Mono font family it is designed around.
//!
//! The crate is organised into four layers:
//!
//! - **[`cli`]**: parse command-line options into [`config::Options`]
//! - **[`resources`]**: bundle lookup and filesystem helpers
//! - **[`tasks`]**: font provisioning and theme installation
//! - **[`commands`]**: run the tasks in order and report the outcome
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod resources;
pub mod tasks;
