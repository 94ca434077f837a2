/// Trims a query parameter and drops it when nothing is left.
pub fn process_param(param: Option<&str>) -> Option<String> {
  param
    .map(|value| value.trim())
    .filter(|value| !value.is_empty())
    .map(|value| value.to_owned())
}

pub fn redact_api_key(url: &str) -> String {
  let Ok(mut parsed) = reqwest::Url::parse(url) else {
    return url.to_owned();
  };
  if !parsed.query_pairs().any(|(key, _)| key == "api_key") {
    return url.to_owned();
  }

  let pairs: Vec<(String, String)> = parsed
    .query_pairs()
    .map(|(key, value)| {
      let value = if key == "api_key" { "REDACTED".to_owned() } else { value.into_owned() };
      (key.into_owned(), value)
    })
    .collect();
  parsed.query_pairs_mut().clear().extend_pairs(pairs);

  parsed.to_string()
}
