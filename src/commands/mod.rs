//! Command implementations for the gamelogs CLI

pub mod config;
pub mod gamelogs;
