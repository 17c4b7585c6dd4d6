use taskflow_shared::draft::can_submit;
use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub value:     String,
  pub pending:   bool,
  pub on_input:  Callback<String>,
  pub on_submit: Callback<()>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let on_input = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };
  let on_submit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
      }
    )
  };
  let submit_enabled =
    can_submit(&props.value, props.pending);

  html! {
      <form class="task-form" onsubmit={on_submit}>
          <div class="task-input-wrap">
              <input
                  type="text"
                  class="task-input"
                  placeholder="What needs to be done?"
                  value={props.value.clone()}
                  oninput={on_input}
                  disabled={props.pending}
                  data-testid="input-task-title"
              />
              <span class="task-input-hint">{ "Press Enter" }</span>
          </div>
          <button
              type="submit"
              class="btn primary"
              disabled={!submit_enabled}
              data-testid="button-add-task"
          >
              <span class="btn-icon">{ "+" }</span>
              <span class="btn-label">{ "Add Task" }</span>
          </button>
      </form>
  }
}
