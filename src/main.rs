use std::{io::Write, process::ExitCode, time::Duration};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use server::{config, output::render_plain, serve, Config, LookupError, LyricsClient};

/// Print the lyrics of the track a last.fm user is listening to right now.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
  /// The last.fm username to look up
  #[arg(value_name = "USERNAME")]
  username: Option<String>,

  #[command(flatten)]
  upstream: UpstreamArgs,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Serve lookups over HTTP (`GET /?username=...`)
  Serve {
    /// The port you want the server to bind to.
    #[arg(short, long, value_name = "PORT", env = "NOWLYRICS_PORT")]
    port: u16,
  },
}

#[derive(Args)]
struct UpstreamArgs {
  /// last.fm API key
  #[arg(long, global = true, value_name = "KEY", env = "LASTFM_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Base URL of the last.fm API
  #[arg(long, global = true, value_name = "URL", env = "LASTFM_URL", default_value = config::DEFAULT_LASTFM_URL)]
  lastfm_url: String,

  /// Base URL of the lyrics service
  #[arg(long, global = true, value_name = "URL", env = "LYRICS_URL", default_value = config::DEFAULT_LYRICS_URL)]
  lyrics_url: String,

  /// Connect and request timeout, in seconds
  #[arg(long, global = true, value_name = "SECS", env = "NOWLYRICS_TIMEOUT", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
  timeout: u64,
}

impl UpstreamArgs {
  fn to_config(&self) -> Result<Config, LookupError> {
    Ok(
      Config::new(self.api_key.as_deref().unwrap_or_default())?
        .with_lastfm_url(&self.lastfm_url)
        .with_lyrics_url(&self.lyrics_url)
        .with_timeout(Duration::from_secs(self.timeout))
    )
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  dotenvy::dotenv().ok();
  let cli = Cli::parse();
  server::init_tracing();

  match run(cli, &mut std::io::stdout()).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::debug!(message = "lookup failed", error = format!("{:#}", err));
      eprintln!("{}", err);
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
  match cli.command {
    Some(Commands::Serve { port }) => {
      serve(port, &cli.upstream.to_config()?).await?;
    },
    None => {
      let username = cli.username.as_deref().map(str::trim).unwrap_or_default();
      if username.is_empty() {
        return Err(LookupError::MissingUsername.into());
      }

      let client = LyricsClient::new(&cli.upstream.to_config()?)?;
      let lookup = client.resolve_and_fetch(username).await?;
      write!(out, "{}", render_plain(&lookup))?;
    },
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::{routing::get, Router};

  const NOW_PLAYING: &str = r##"{"recenttracks":{"track":[{"artist":{"#text":"Daft Punk"},"name":"One More Time","@attr":{"nowplaying":"true"}}]}}"##;

  async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });
    base_url
  }

  async fn run_captured(args: &[&str]) -> (Result<()>, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let result = run(cli, &mut out).await;
    (result, String::from_utf8(out).unwrap())
  }

  #[tokio::test]
  async fn missing_username_is_reported_not_a_usage_error() {
    for args in [&["nowlyrics", "--api-key", "k"][..], &["nowlyrics", "--api-key", "k", "  "][..], &["nowlyrics"][..]] {
      let (result, out) = run_captured(args).await;
      let err = result.unwrap_err();
      assert!(matches!(err.downcast_ref::<LookupError>(), Some(LookupError::MissingUsername)));
      assert_eq!(err.to_string(), "Missing last.fm username");
      assert!(out.is_empty());
    }
  }

  #[test]
  fn username_is_optional_positional() {
    let cli = Cli::try_parse_from(["nowlyrics"]).unwrap();
    assert!(cli.username.is_none());
    assert!(cli.command.is_none());

    let cli = Cli::try_parse_from(["nowlyrics", "testuser"]).unwrap();
    assert_eq!(cli.username.as_deref(), Some("testuser"));
  }

  #[test]
  fn serve_accepts_upstream_flags_on_either_side() {
    for args in [
      &["nowlyrics", "--api-key", "k", "serve", "--port", "1"][..],
      &["nowlyrics", "serve", "--port", "1", "--api-key", "k"][..],
    ] {
      let cli = Cli::try_parse_from(args).unwrap();
      assert!(matches!(cli.command, Some(Commands::Serve { port: 1 })));
      assert_eq!(cli.upstream.api_key.as_deref(), Some("k"));
    }
  }

  #[test]
  fn upstream_flags_build_config() {
    let cli = Cli::try_parse_from([
      "nowlyrics",
      "--api-key", "k",
      "--lastfm-url", "http://127.0.0.1:1/",
      "--lyrics-url", "http://127.0.0.1:2",
      "--timeout", "2",
      "testuser",
    ]).unwrap();
    let config = cli.upstream.to_config().unwrap();
    assert_eq!(config.api_key, "k");
    assert_eq!(config.lastfm_base_url, "http://127.0.0.1:1");
    assert_eq!(config.lyrics_base_url, "http://127.0.0.1:2");
    assert_eq!(config.timeout, Duration::from_secs(2));
  }

  #[tokio::test]
  async fn prints_track_and_lyrics() {
    let lastfm_url = spawn(Router::new().route("/2.0/", get(|| async { NOW_PLAYING }))).await;
    let lyrics_url = spawn(Router::new().route("/lyrics", get(|| async { "Hello\nWorld\n  " }))).await;

    let (result, out) = run_captured(&[
      "nowlyrics",
      "--api-key", "k",
      "--lastfm-url", &lastfm_url,
      "--lyrics-url", &lyrics_url,
      "testuser",
    ]).await;

    result.unwrap();
    assert_eq!(out, "Daft Punk - One More Time\n\nHello\nWorld\n");
  }

  #[tokio::test]
  async fn lookup_errors_leave_stdout_empty() {
    let lastfm_url = spawn(Router::new().route("/2.0/", get(|| async { r#"{"error":6,"message":"User not found"}"# }))).await;

    let (result, out) = run_captured(&["nowlyrics", "--api-key", "k", "--lastfm-url", &lastfm_url, "nobody"]).await;

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<LookupError>(), Some(LookupError::Service { code: 6, .. })));
    assert!(out.is_empty());
  }
}
