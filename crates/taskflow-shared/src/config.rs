use serde::{
  Deserialize,
  Serialize
};
use thiserror::Error;

use crate::routes::ApiRoute;

pub const CONFIG_STORAGE_KEY: &str =
  "taskflow.client_config";

const MAX_NOTICE_DURATION_MS: u32 =
  60_000;
const MAX_ENTRANCE_DELAY_MS: u32 =
  2_000;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(
    "malformed client config: {0}"
  )]
  Parse(#[from] serde_json::Error),
  #[error(
    "invalid client config: {0}"
  )]
  Invalid(String)
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct ClientConfig {
  /// Prefix for every request path.
  /// Empty means the page origin.
  pub api_base:           String,
  pub notice_duration_ms: u32,
  pub notice_limit:       usize,
  pub entrance_delay_ms:  u32
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base:           String::new(),
      notice_duration_ms: 5_000,
      notice_limit:       3,
      entrance_delay_ms:  50
    }
  }
}

impl ClientConfig {
  pub fn from_json(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let parsed: Self =
      serde_json::from_str(raw)?;
    parsed.validated()
  }

  /// Where the collection is fetched
  /// from under this config.
  pub fn tasks_url(&self) -> String {
    ApiRoute::ListTasks
      .url(&self.api_base)
  }

  fn validated(
    mut self
  ) -> Result<Self, ConfigError> {
    if self.notice_limit == 0 {
      return Err(
        ConfigError::Invalid(
          "notice_limit must be at \
           least 1"
            .to_string()
        )
      );
    }

    let base = self.api_base.trim();
    if base.contains(char::is_whitespace)
    {
      return Err(
        ConfigError::Invalid(format!(
          "api_base contains \
           whitespace: {base:?}"
        ))
      );
    }
    self.api_base = base
      .trim_end_matches('/')
      .to_string();

    if self.notice_duration_ms
      > MAX_NOTICE_DURATION_MS
    {
      tracing::warn!(
        requested = self.notice_duration_ms,
        max = MAX_NOTICE_DURATION_MS,
        "clamping notice duration"
      );
      self.notice_duration_ms =
        MAX_NOTICE_DURATION_MS;
    }
    self.entrance_delay_ms = self
      .entrance_delay_ms
      .min(MAX_ENTRANCE_DELAY_MS);

    Ok(self)
  }
}
