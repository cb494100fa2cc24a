//! Gamelogs command implementation

use crate::{
    cli::{
        types::{GameDate, Week},
        GamelogFilters,
    },
    msf::{types::GameLog, DailyPlayerGamelogsOptions, Service},
    Result,
};

/// Parameters for the gamelogs command
#[derive(Debug)]
pub struct GamelogsParams {
    pub date: GameDate,
    pub week: Week,
    pub season: Option<String>,
    pub filters: GamelogFilters,
    pub as_json: bool,
}

/// Fill the per-call fields of `options` from command parameters.
pub fn apply_params(options: &mut DailyPlayerGamelogsOptions, params: &GamelogsParams) {
    options.date = params.date.to_string();
    options.week = params.week.to_string();
    if let Some(season) = &params.season {
        options.season = season.clone();
    }

    let filters = &params.filters;
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    options.team = text(&filters.team);
    options.player = text(&filters.player);
    options.position = text(&filters.position);
    options.game = text(&filters.game);
    options.stats = text(&filters.stats);
    options.sort = text(&filters.sort);
    options.offset = filters.offset.map(|v| v.to_string()).unwrap_or_default();
    options.limit = filters.limit.map(|v| v.to_string()).unwrap_or_default();
    options.force = filters.force.map(|v| v.to_string()).unwrap_or_default();
}

/// One text line per gamelog: `Matt Ryan  QB  ATL  game 45287`
pub fn format_gamelog_line(log: &GameLog) -> String {
    format!(
        "{:<24} {:<4} {:<4} game {}",
        log.player.full_name(),
        log.player.position.as_deref().unwrap_or("-"),
        log.team.abbreviation.as_deref().unwrap_or("-"),
        log.game.id
    )
}

/// Handle the gamelogs command
pub async fn handle_gamelogs(service: &Service, params: GamelogsParams) -> Result<()> {
    let mut options = service.new_daily_player_gamelogs_options();
    apply_params(&mut options, &params);

    // tarpaulin::skip - HTTP call, tested via integration tests
    let result = service.daily_player_gamelogs(&options).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&result.mapping)?);
        return Ok(());
    }

    if result.mapping.is_empty() {
        println!("No gamelogs for {} (week {})", params.date, params.week);
        return Ok(());
    }

    for log in &result.mapping.gamelogs {
        println!("{}", format_gamelog_line(log));
    }
    if let Some(updated) = &result.mapping.last_updated_on {
        println!("Last updated: {}", updated);
    }

    Ok(())
}
