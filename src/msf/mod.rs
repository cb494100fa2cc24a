//! MySportsFeeds pull API client.

pub mod gamelogs;
pub mod service;
pub mod types;

pub use gamelogs::{
    build_daily_player_gamelogs_uri, validate_daily_player_gamelogs_uri,
    DailyPlayerGamelogsOptions, Gamelogs, RequestOutcome,
};
pub use service::Service;
pub use types::GameLogIo;
