use std::fmt;
use serde::Serialize;
use super::lyrics::LyricsResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NowPlaying {
  pub artist: String,
  pub track: String,
}

impl fmt::Display for NowPlaying {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {}", self.artist, self.track)
  }
}

/// Result of one full lookup: what the user is playing and the lyrics text
/// the lyrics service returned for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lookup {
  pub now_playing: NowPlaying,
  pub lyrics: LyricsResult,
}
