use crate::{config::Config, entities::lyrics::LyricsResult, fetcher::Fetcher};

/// Plain-text lyrics lookup by artist and title.
#[derive(Clone, Debug)]
pub struct MakeItPersonalProvider {
  fetcher: Fetcher,
  base_url: String,
}

impl MakeItPersonalProvider {
  pub fn new(fetcher: Fetcher, config: &Config) -> Self {
    Self {
      fetcher,
      base_url: config.lyrics_base_url.to_owned(),
    }
  }

  pub fn lyrics_url(&self, artist: &str, track: &str) -> String {
    format!(
      "{}/lyrics?artist={}&title={}",
      self.base_url,
      urlencoding::encode(artist),
      urlencoding::encode(track),
    )
  }

  /// Never fails: a transport error yields empty lyrics, the same as an
  /// empty body.
  pub async fn retrieve_lyrics(&self, artist: &str, track: &str) -> LyricsResult {
    let url = self.lyrics_url(artist, track);
    match self.fetcher.get_text(&url).await {
      Ok(body) => LyricsResult::from_body(&body),
      Err(err) => {
        tracing::warn!(
          message = "couldn't get lyrics",
          url = url.as_str(),
          artist = artist,
          track = track,
          error = err.to_string(),
        );
        LyricsResult::from_body("")
      },
    }
  }
}
