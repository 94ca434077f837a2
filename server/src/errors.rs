use axum::{
  response::{IntoResponse, Response},
  http::StatusCode,
};
use thiserror::Error;

/// Every way a now-playing lookup can stop early.
#[derive(Error, Debug)]
pub enum LookupError {
  #[error("Missing last.fm username")]
  MissingUsername,

  #[error("Couldn't get {what}")]
  Transport {
    what: &'static str,
    #[source]
    source: reqwest::Error,
  },

  #[error("last.fm error {code}: {message}")]
  Service { code: i64, message: String },

  #[error("Unexpected response shape: {0}")]
  UnexpectedResponse(String),

  #[error("No current track for user {username}")]
  NoCurrentTrack { username: String },

  #[error("Configuration error: {0}")]
  Config(String),
}

impl LookupError {
  // last.fm error 6 is "User not found"
  const LASTFM_USER_NOT_FOUND: i64 = 6;

  pub fn status_code(&self) -> StatusCode {
    match self {
      LookupError::MissingUsername => StatusCode::BAD_REQUEST,
      LookupError::NoCurrentTrack { .. } => StatusCode::NOT_FOUND,
      LookupError::Service { code, .. } if *code == Self::LASTFM_USER_NOT_FOUND => StatusCode::NOT_FOUND,
      LookupError::Service { .. } => StatusCode::BAD_GATEWAY,
      LookupError::Transport { .. } => StatusCode::BAD_GATEWAY,
      LookupError::UnexpectedResponse(_) => StatusCode::BAD_GATEWAY,
      LookupError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

pub enum ApiError {
  LookupError(LookupError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::LookupError(err) => {
        let status_code = err.status_code();
        if status_code.is_server_error() {
          tracing::error!(message = "lookup failed", error = err.to_string(), status_code = status_code.as_u16());
        } else {
          tracing::info!(message = "lookup stopped", reason = err.to_string(), status_code = status_code.as_u16());
        }
        (status_code, format!("{}\n", err)).into_response()
      },
    }
  }
}

impl From<LookupError> for ApiError {
  fn from(err: LookupError) -> Self {
    ApiError::LookupError(err)
  }
}
