use std::time::Duration;
use crate::errors::LookupError;

pub const DEFAULT_LASTFM_URL: &str = "https://ws.audioscrobbler.com";
pub const DEFAULT_LYRICS_URL: &str = "https://makeitpersonal.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Settings shared by both resolvers. Built once per process and handed
/// to [`crate::lookup::LyricsClient::new`].
#[derive(Clone, Debug)]
pub struct Config {
  pub api_key: String,
  pub lastfm_base_url: String,
  pub lyrics_base_url: String,
  pub timeout: Duration,
}

impl Config {
  pub fn new(api_key: &str) -> Result<Self, LookupError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
      return Err(LookupError::Config("last.fm API key cannot be empty".to_owned()));
    }

    Ok(Self {
      api_key: api_key.to_owned(),
      lastfm_base_url: DEFAULT_LASTFM_URL.to_owned(),
      lyrics_base_url: DEFAULT_LYRICS_URL.to_owned(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    })
  }

  pub fn with_lastfm_url(mut self, url: &str) -> Self {
    self.lastfm_base_url = url.trim_end_matches('/').to_owned();
    self
  }

  pub fn with_lyrics_url(mut self, url: &str) -> Self {
    self.lyrics_base_url = url.trim_end_matches('/').to_owned();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}
