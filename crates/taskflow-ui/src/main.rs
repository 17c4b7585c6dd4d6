mod api;
mod app;
mod components;

use std::rc::Rc;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let config = app::load_client_config();
  tracing::info!(
    api_base = %config.api_base,
    tasks_url = %config.tasks_url(),
    notice_limit = config.notice_limit,
    "starting TaskFlow frontend"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps {
      config: Rc::new(config)
    }
  )
  .render();
}
