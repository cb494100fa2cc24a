//! MySportsFeeds Player Gamelogs Client
//!
//! A small Rust client for the MySportsFeeds "pull" API's daily player
//! gamelogs feed, plus the CLI built on top of it.
//!
//! ## Features
//!
//! - **Option Validation**: Required URL parts are checked in a fixed order
//! - **Cache Busting**: Every request carries a fresh `YYYYMMDDHHMMSS` token
//! - **Automatic Retry**: Transient failures are retried with backoff
//! - **Typed Errors**: Each failure reports the HTTP status it came with
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msf_gamelogs::{Config, Service};
//!
//! # async fn example() -> msf_gamelogs::Result<()> {
//! let config = Config::load()?.with_season("2018-2019-regular");
//! let service = Service::new(config)?;
//!
//! let mut options = service.new_daily_player_gamelogs_options();
//! options.date = "20180907".to_string();
//! options.week = "1".to_string();
//! options.team = "NE".to_string();
//!
//! let result = service.daily_player_gamelogs(&options).await?;
//! println!("{} gamelogs (HTTP {})", result.mapping.gamelogs.len(), result.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Settings are read from `~/.config/msf-gamelogs/config.json` and can be
//! overridden per variable:
//! ```bash
//! export MSF_SEASON=2018-2019-regular
//! export MSF_AUTHORIZATION="Basic <token>"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod msf;

// Re-export commonly used types
pub use config::{config_path, Config};
pub use error::{MsfError, Result};
pub use msf::{
    DailyPlayerGamelogsOptions, GameLogIo, Gamelogs, RequestOutcome, Service,
};
