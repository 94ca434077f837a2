use crate::{
  config::Config,
  entities::now_playing::Lookup,
  errors::LookupError,
  fetcher::Fetcher,
  providers::{lastfm::LastfmProvider, makeitpersonal::MakeItPersonalProvider},
};

/// Both resolvers over one shared HTTP client.
#[derive(Clone, Debug)]
pub struct LyricsClient {
  lastfm: LastfmProvider,
  lyrics: MakeItPersonalProvider,
}

impl LyricsClient {
  pub fn new(config: &Config) -> Result<Self, LookupError> {
    let fetcher = Fetcher::new(config)?;

    Ok(Self {
      lastfm: LastfmProvider::new(fetcher.clone(), config),
      lyrics: MakeItPersonalProvider::new(fetcher, config),
    })
  }

  /// Username check, then now-playing lookup, then lyrics lookup. The first
  /// failing step ends the lookup, so no lyrics request is sent unless a
  /// track is currently playing.
  pub async fn resolve_and_fetch(&self, username: &str) -> Result<Lookup, LookupError> {
    let username = username.trim();
    if username.is_empty() {
      return Err(LookupError::MissingUsername);
    }

    let now_playing = self.lastfm.now_playing(username).await?;
    tracing::info!(
      message = "found current track",
      username = username,
      artist = now_playing.artist,
      track = now_playing.track,
    );

    let lyrics = self.lyrics
      .retrieve_lyrics(&now_playing.artist, &now_playing.track)
      .await;

    Ok(Lookup { now_playing, lyrics })
  }
}
