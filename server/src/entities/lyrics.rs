use std::fmt;

/// Text returned by the lyrics service, trimmed. It may just as well be the
/// service's own "not found" message; nothing here tells the two apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LyricsResult(String);

impl LyricsResult {
  pub fn from_body(body: &str) -> Self {
    Self(body.trim().to_owned())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for LyricsResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
