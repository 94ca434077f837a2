use crate::{config::Config, errors::LookupError, utils::redact_api_key};

/// Plain GET-and-read-body over a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct Fetcher {
  client: reqwest::Client,
}

impl Fetcher {
  pub fn new(config: &Config) -> Result<Self, LookupError> {
    let version = env!("CARGO_PKG_VERSION");
    let client = reqwest::Client::builder()
      .connect_timeout(config.timeout)
      .timeout(config.timeout)
      .user_agent(format!("nowlyrics/{}", version))
      .build()
      .map_err(|e| LookupError::Config(format!("cannot build HTTP client: {}", e)))?;

    Ok(Self { client })
  }

  /// Returns the response body whatever the status code is. Only transport
  /// failures (connect errors, timeouts, broken bodies) are errors.
  pub async fn get_text(&self, url: &str) -> reqwest::Result<String> {
    tracing::debug!(message = "sending request", url = redact_api_key(url));

    let response = self.client.get(url).send().await?;
    let status_code = response.status().as_u16();
    let body = response.text().await?;

    tracing::debug!(
      message = "received response",
      url = redact_api_key(url),
      status_code = status_code,
      length = body.len(),
    );

    Ok(body)
  }
}
