//! CLI library components for colcut.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod plan;
