use gloo::timers::callback::Timeout;
use taskflow_shared::notice::{
  NoticeQueue,
  QueuedNotice
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with
};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
  pub notices:     NoticeQueue,
  pub duration_ms: u32,
  pub on_dismiss:  Callback<u64>
}

#[function_component(Toaster)]
pub fn toaster(
  props: &ToasterProps
) -> Html {
  html! {
      <div class="toaster" aria-live="polite">
          {
              for props.notices.iter().cloned().map(|item| {
                  let key = item.id.to_string();
                  html! {
                      <Toast
                          key={key}
                          item={item}
                          duration_ms={props.duration_ms}
                          on_dismiss={props.on_dismiss.clone()}
                      />
                  }
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
  item:        QueuedNotice,
  duration_ms: u32,
  on_dismiss:  Callback<u64>
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
  let id = props.item.id;

  {
    let on_dismiss =
      props.on_dismiss.clone();
    let duration = props.duration_ms;
    use_effect_with(id, move |id| {
      let id = *id;
      let timer =
        Timeout::new(duration, move || {
          on_dismiss.emit(id)
        });
      move || drop(timer)
    });
  }

  let notice = &props.item.notice;
  let class = if notice.is_destructive()
  {
    "toast destructive"
  } else {
    "toast"
  };
  let on_close = {
    let on_dismiss =
      props.on_dismiss.clone();
    Callback::from(move |_: MouseEvent| {
      on_dismiss.emit(id)
    })
  };

  html! {
      <div class={class} role="status">
          <div class="toast-body">
              <div class="toast-title">{ notice.title }</div>
              <div class="toast-description">{ notice.description }</div>
          </div>
          <button class="toast-close" onclick={on_close} aria-label="Dismiss">
              { "✕" }
          </button>
      </div>
  }
}
