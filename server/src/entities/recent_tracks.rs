use serde::Deserialize;

/// Body of `user.getrecenttracks`. On failure last.fm answers with
/// `{ "error": <code>, "message": <text> }` instead of `recenttracks`.
#[derive(Debug, Deserialize)]
pub struct RecentTracksBody {
  pub recenttracks: Option<RecentTracks>,
  pub error: Option<i64>,
  pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecentTracks {
  #[serde(default)]
  pub track: OneOrMany<RecentTrack>,
}

/// last.fm collapses single-element lists into a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  Many(Vec<T>),
  One(T),
}

impl<T> Default for OneOrMany<T> {
  fn default() -> Self {
    OneOrMany::Many(Vec::new())
  }
}

impl<T> OneOrMany<T> {
  pub fn into_first(self) -> Option<T> {
    match self {
      OneOrMany::Many(items) => items.into_iter().next(),
      OneOrMany::One(item) => Some(item),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct RecentTrack {
  pub artist: TextNode,
  pub name: String,
  #[serde(rename = "@attr")]
  pub attr: Option<TrackAttr>,
}

#[derive(Debug, Deserialize)]
pub struct TextNode {
  #[serde(rename = "#text")]
  pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TrackAttr {
  pub nowplaying: Option<String>,
}

impl RecentTrack {
  pub fn is_now_playing(&self) -> bool {
    self.attr
      .as_ref()
      .and_then(|attr| attr.nowplaying.as_deref())
      .map(|flag| {
        let flag = flag.trim();
        flag.eq_ignore_ascii_case("true") || flag == "1"
      })
      .unwrap_or(false)
  }
}
