use axum::{extract::{Query, State}, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::{entities::now_playing::Lookup, errors::ApiError, utils::process_param, AppState};

#[derive(Deserialize)]
pub struct QueryParams {
  username: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingResponse {
  artist: String,
  track: String,
  lyrics: String,
}

pub async fn route(Query(params): Query<QueryParams>, State(state): State<Arc<AppState>>) -> Result<Json<NowPlayingResponse>, ApiError> {
  let username = process_param(params.username.as_deref()).unwrap_or_default();
  let lookup = state.client.resolve_and_fetch(&username).await?;

  Ok(Json(create_response(lookup)))
}

fn create_response(lookup: Lookup) -> NowPlayingResponse {
  NowPlayingResponse {
    lyrics: lookup.lyrics.as_str().to_owned(),
    artist: lookup.now_playing.artist,
    track: lookup.now_playing.track,
  }
}
