use axum::{extract::{Query, State}, response::Html};
use serde::Deserialize;
use std::sync::Arc;
use crate::{errors::ApiError, output::render_pre, utils::process_param, AppState};

#[derive(Deserialize)]
pub struct QueryParams {
  username: Option<String>,
}

pub async fn route(Query(params): Query<QueryParams>, State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
  let username = process_param(params.username.as_deref()).unwrap_or_default();
  let lookup = state.client.resolve_and_fetch(&username).await?;

  Ok(Html(render_pre(&lookup)))
}
