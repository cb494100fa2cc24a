//! Daily player gamelogs endpoint
//!
//! `GET {url}/{version}/pull/{sport}/{season}/date/{date}/week/{week}/player_gamelogs.{format}`
//!
//! Optional filters are appended to the query string verbatim. Values are not
//! URL-encoded, so callers must pass tokens that are already safe in a URL
//! (team abbreviations, ids, comma lists).

use tracing::{debug, error, info};

use crate::{
    core::http::{authorization_header_map, cache_buster},
    msf::{service::Service, types::GameLogIo},
    MsfError, Result,
};



/// Options for the daily player gamelogs endpoint.
///
/// Every field up to `format` is required; the rest are optional filters and
/// are only sent when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyPlayerGamelogsOptions {
    // URL parts
    pub url: String,
    pub version: String,
    pub sport: String,
    pub season: String,
    /// YYYYMMDD
    pub date: String,
    /// 1-40
    pub week: String,
    pub format: String,

    // Optional URL params
    pub team: String,
    pub player: String,
    pub position: String,
    pub game: String,
    pub stats: String,
    pub sort: String,
    pub offset: String,
    pub limit: String,
    pub force: String,
}

impl DailyPlayerGamelogsOptions {
    /// Required URL parts in the order they are validated.
    fn required(&self) -> [(&'static str, &str); 7] {
        [
            ("URL", self.url.as_str()),
            ("Version", self.version.as_str()),
            ("Sport", self.sport.as_str()),
            ("Season", self.season.as_str()),
            ("Date", self.date.as_str()),
            ("Week", self.week.as_str()),
            ("Format", self.format.as_str()),
        ]
    }

    /// Query parameters in the order they are appended.
    fn optional_params(&self) -> [(&'static str, &str); 9] {
        [
            ("team", self.team.as_str()),
            ("player", self.player.as_str()),
            ("position", self.position.as_str()),
            ("game", self.game.as_str()),
            ("stats", self.stats.as_str()),
            ("sort", self.sort.as_str()),
            ("offset", self.offset.as_str()),
            ("limit", self.limit.as_str()),
            ("force", self.force.as_str()),
        ]
    }
}

/// Check that every required URL part is present, reporting the first one missing.
pub fn validate_daily_player_gamelogs_uri(options: &DailyPlayerGamelogsOptions) -> Result<()> {
    for (field, value) in options.required() {
        if value.is_empty() {
            return Err(MsfError::MissingOption { field });
        }
    }
    Ok(())
}

/// Build the request URI for already validated options.
pub fn build_daily_player_gamelogs_uri(
    options: &DailyPlayerGamelogsOptions,
    cachebuster: &str,
) -> String {
    let mut uri = format!(
        "{}/{}/pull/{}/{}/date/{}/week/{}/player_gamelogs.{}?cachebuster={}",
        options.url,
        options.version,
        options.sport,
        options.season,
        options.date,
        options.week,
        options.format,
        cachebuster
    );

    for (key, value) in options.optional_params() {
        if !value.is_empty() {
            uri.push_str(&format!("&{}={}", key, value));
        }
    }

    uri
}

/// Successful response: the decoded feed and the HTTP status it came with.
#[derive(Debug, Clone, PartialEq)]
pub struct Gamelogs {
    pub mapping: GameLogIo,
    pub status: u16,
}

/// Flattened view of a call: mapping, status code and error, if any.
///
/// The mapping is empty whenever `error` is set; `status` is 0 when no
/// response was received.
#[derive(Debug)]
pub struct RequestOutcome {
    pub mapping: GameLogIo,
    pub status: u16,
    pub error: Option<MsfError>,
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status)
    }
}

impl From<Result<Gamelogs>> for RequestOutcome {
    fn from(result: Result<Gamelogs>) -> Self {
        match result {
            Ok(Gamelogs { mapping, status }) => Self {
                mapping,
                status,
                error: None,
            },
            Err(e) => Self {
                mapping: GameLogIo::default(),
                status: e.status_code(),
                error: Some(e),
            },
        }
    }
}

impl Service {
    /// Options with the URL parts from configuration already filled in.
    ///
    /// Date, week and the optional filters are left for the caller.
    pub fn new_daily_player_gamelogs_options(&self) -> DailyPlayerGamelogsOptions {
        DailyPlayerGamelogsOptions {
            url: self.config.base_url.clone(),
            version: self.config.version.clone(),
            sport: self.config.sport.clone(),
            season: self.config.season.clone(),
            format: self.config.format.clone(),
            ..DailyPlayerGamelogsOptions::default()
        }
    }

    /// Fetch player gamelogs for one date and week.
    ///
    /// # Errors
    ///
    /// - `MissingOption` if a required URL part is empty
    /// - `ClientRequest` if the URI can't be turned into a request
    /// - `Transport` if the request fails after retries
    /// - `HttpStatus` for a status outside 200-299
    /// - `Body` if the connection drops while the body is being read
    /// - `Decode` if the body isn't a valid gamelogs document
    pub async fn daily_player_gamelogs(
        &self,
        options: &DailyPlayerGamelogsOptions,
    ) -> Result<Gamelogs> {
        validate_daily_player_gamelogs_uri(options)?;

        let uri = build_daily_player_gamelogs_uri(options, &cache_buster());
        debug!(uri = %uri, "DailyPlayerGamelogs API Call");

        let headers = authorization_header_map(&self.config.authorization)?;
        let request = self
            .client()
            .inner()
            .get(&uri)
            .headers(headers)
            .build()
            .map_err(|e| {
                error!(uri = %uri, "client: could not create request: {}", e);
                MsfError::ClientRequest(e)
            })?;

        let response = self.client().execute(request).await.map_err(|e| {
            error!(uri = %uri, "client: error making http request: {}", e);
            MsfError::Transport(e)
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            error!(
                uri = %uri,
                status,
                "client: something went wrong making the get request for DailyPlayerGamelogs"
            );
            return Err(MsfError::HttpStatus { status });
        }

        info!(uri = %uri, status, "DailyPlayerGamelogs Status Code: {}", status);

        let body = response.bytes().await.map_err(|e| {
            error!(uri = %uri, status, "client: error reading response body: {}", e);
            MsfError::Body { status, source: e }
        })?;

        let mapping = serde_json::from_slice::<GameLogIo>(&body).map_err(|e| {
            error!(
                uri = %uri,
                status,
                "client: error decoding response for DailyPlayerGamelogs: {}", e
            );
            MsfError::Decode { status, source: e }
        })?;

        Ok(Gamelogs { mapping, status })
    }
}
