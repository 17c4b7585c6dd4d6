use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorViewProps {
  pub reason: String
}

fn reload_page() {
  tracing::info!(
    "reloading page after fetch \
     failure"
  );
  let Some(window) = web_sys::window()
  else {
    tracing::error!(
      "no window available for reload"
    );
    return;
  };
  if let Err(err) =
    window.location().reload()
  {
    tracing::error!(error = ?err, "page reload failed");
  }
}

#[function_component(ErrorView)]
pub fn error_view(
  props: &ErrorViewProps
) -> Html {
  let on_reload =
    Callback::from(|_: MouseEvent| {
      reload_page();
    });

  html! {
      <div class="page centered">
          <div class="card pad-xl error-card">
              <div class="error-icon">{ "!" }</div>
              <h2>{ "Something went wrong" }</h2>
              <p class="muted">
                  { "We couldn't load your tasks. Please try refreshing the page." }
              </p>
              <p class="muted small" title={props.reason.clone()}>{ &props.reason }</p>
              <button class="btn primary" onclick={on_reload} data-testid="button-refresh">
                  { "Refresh Page" }
              </button>
          </div>
      </div>
  }
}
