use crate::{
  config::Config,
  entities::{now_playing::NowPlaying, recent_tracks::RecentTracksBody},
  errors::LookupError,
  fetcher::Fetcher,
};

const RECENT_TRACKS_METHOD: &str = "user.getrecenttracks";

/// Resolves the track a last.fm user is scrobbling right now.
#[derive(Clone, Debug)]
pub struct LastfmProvider {
  fetcher: Fetcher,
  base_url: String,
  api_key: String,
}

impl LastfmProvider {
  pub fn new(fetcher: Fetcher, config: &Config) -> Self {
    Self {
      fetcher,
      base_url: config.lastfm_base_url.to_owned(),
      api_key: config.api_key.to_owned(),
    }
  }

  pub fn recent_tracks_url(&self, username: &str) -> String {
    format!(
      "{}/2.0/?method={}&api_key={}&format=json&limit=1&user={}",
      self.base_url,
      RECENT_TRACKS_METHOD,
      urlencoding::encode(&self.api_key),
      urlencoding::encode(username),
    )
  }

  pub async fn now_playing(&self, username: &str) -> Result<NowPlaying, LookupError> {
    let body = self.fetcher
      .get_text(&self.recent_tracks_url(username))
      .await
      .map_err(|source| LookupError::Transport { what: "user data", source })?;

    parse_now_playing(&body, username)
  }
}

pub fn parse_now_playing(body: &str, username: &str) -> Result<NowPlaying, LookupError> {
  let body: RecentTracksBody = serde_json::from_str(body)
    .map_err(|e| LookupError::UnexpectedResponse(e.to_string()))?;

  let recent_tracks = match (body.recenttracks, body.error) {
    (Some(recent_tracks), _) => recent_tracks,
    (None, Some(code)) => {
      return Err(LookupError::Service {
        code,
        message: body.message.unwrap_or_default(),
      });
    },
    (None, None) => {
      return Err(LookupError::UnexpectedResponse("missing recenttracks".to_owned()));
    },
  };

  let current = recent_tracks.track
    .into_first()
    .ok_or_else(|| LookupError::UnexpectedResponse("empty track list".to_owned()))?;

  if !current.is_now_playing() {
    return Err(LookupError::NoCurrentTrack { username: username.to_owned() });
  }

  Ok(NowPlaying {
    artist: current.artist.text,
    track: current.name,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const PLAYING: &str = r##"{
    "recenttracks": {
      "track": [
        {
          "artist": { "mbid": "", "#text": "Daft Punk" },
          "name": "One More Time",
          "album": { "mbid": "", "#text": "Discovery" },
          "@attr": { "nowplaying": "true" }
        },
        {
          "artist": { "mbid": "", "#text": "Justice" },
          "name": "D.A.N.C.E.",
          "date": { "uts": "1700000000", "#text": "14 Nov 2023, 22:13" }
        }
      ],
      "@attr": { "user": "testuser", "page": "1", "perPage": "1", "totalPages": "1", "total": "1" }
    }
  }"##;

  #[test]
  fn builds_recent_tracks_url() {
    let config = Config::new("abc123").unwrap().with_lastfm_url("http://lastfm.test/");
    let provider = LastfmProvider::new(Fetcher::new(&config).unwrap(), &config);
    assert_eq!(
      provider.recent_tracks_url("dj bob/2"),
      "http://lastfm.test/2.0/?method=user.getrecenttracks&api_key=abc123&format=json&limit=1&user=dj%20bob%2F2",
    );
  }

  #[test]
  fn extracts_artist_and_track_exactly() {
    let now_playing = parse_now_playing(PLAYING, "testuser").unwrap();
    assert_eq!(now_playing, NowPlaying {
      artist: "Daft Punk".to_owned(),
      track: "One More Time".to_owned(),
    });
  }

  #[test]
  fn not_playing_is_reported() {
    let body = r##"{"recenttracks":{"track":[{"artist":{"#text":"Justice"},"name":"D.A.N.C.E.","@attr":{"nowplaying":"false"}}]}}"##;
    let err = parse_now_playing(body, "testuser").unwrap_err();
    assert!(matches!(err, LookupError::NoCurrentTrack { ref username } if username == "testuser"));

    let body = r##"{"recenttracks":{"track":[{"artist":{"#text":"Justice"},"name":"D.A.N.C.E."}]}}"##;
    let err = parse_now_playing(body, "testuser").unwrap_err();
    assert!(matches!(err, LookupError::NoCurrentTrack { .. }));
  }

  #[test]
  fn empty_track_list_is_unexpected() {
    let err = parse_now_playing(r#"{"recenttracks":{"track":[]}}"#, "testuser").unwrap_err();
    assert!(matches!(err, LookupError::UnexpectedResponse(_)));
  }

  #[test]
  fn malformed_payloads_are_unexpected() {
    for body in ["", "not json", "{}", r#"{"recenttracks":{"track":[{"name":"no artist"}]}}"#] {
      let err = parse_now_playing(body, "testuser").unwrap_err();
      assert!(matches!(err, LookupError::UnexpectedResponse(_)), "body: {:?}", body);
    }
  }

  #[test]
  fn service_errors_are_typed() {
    let err = parse_now_playing(r#"{"error":10,"message":"Invalid API key"}"#, "testuser").unwrap_err();
    assert!(matches!(err, LookupError::Service { code: 10, ref message } if message == "Invalid API key"));
  }
}
