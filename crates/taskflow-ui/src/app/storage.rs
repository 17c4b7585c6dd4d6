use taskflow_shared::config::{
  CONFIG_STORAGE_KEY,
  ClientConfig
};

pub fn load_client_config()
-> ClientConfig {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(CONFIG_STORAGE_KEY)
        .ok()
        .flatten()
    });

  let Some(raw) = stored else {
    tracing::debug!(
      "no stored client config; using \
       defaults"
    );
    return ClientConfig::default();
  };

  match ClientConfig::from_json(&raw) {
    | Ok(config) => {
      tracing::debug!(
        "loaded client config from \
         local storage"
      );
      config
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing client config \
         from local storage"
      );
      ClientConfig::default()
    }
  }
}
