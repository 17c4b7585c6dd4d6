use gloo::timers::callback::Timeout;
use taskflow_shared::{
  TaskDto,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub task:              TaskDto,
  pub toggling:          bool,
  pub deleting:          bool,
  pub entrance_delay_ms: u32,
  pub on_toggle:         Callback<TaskDto>,
  pub on_delete:         Callback<TaskId>
}

fn card_class(
  visible: bool,
  deleting: bool,
  completed: bool
) -> String {
  let mut class = vec!["card", "task-card"];
  class.push(if visible {
    "entered"
  } else {
    "entering"
  });
  if deleting {
    class.push("deleting");
  }
  if completed {
    class.push("completed");
  }
  class.join(" ")
}

#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let visible = use_state(|| false);

  {
    let visible = visible.clone();
    let delay = props.entrance_delay_ms;
    use_effect_with((), move |_| {
      // Dropping the handle cancels the
      // timer if the item unmounts first.
      let timer = Timeout::new(
        delay,
        move || visible.set(true)
      );
      move || drop(timer)
    });
  }

  let task = &props.task;
  let id = task.id.clone();
  let completed = task.completed;

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let task = task.clone();
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(task.clone())
    })
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = id.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(id.clone())
    })
  };

  html! {
      <div
          class={card_class(*visible, props.deleting, completed)}
          data-testid={format!("card-task-{id}")}
      >
          <button
              class={if props.toggling { "toggle busy" } else { "toggle" }}
              onclick={on_toggle}
              disabled={props.toggling}
              aria-label={if completed { "Mark as incomplete" } else { "Mark as complete" }}
              data-testid={format!("button-toggle-{id}")}
          >
              <span class={if completed { "check on" } else { "check" }}>
                  { if completed { "✓" } else { "" } }
              </span>
          </button>
          <span
              class={if completed { "task-title done" } else { "task-title" }}
              data-testid={format!("text-task-title-{id}")}
          >
              { &task.title }
          </span>
          <button
              class="btn ghost delete"
              onclick={on_delete}
              disabled={props.deleting}
              aria-label="Delete task"
              data-testid={format!("button-delete-{id}")}
          >
              { "✕" }
          </button>
      </div>
  }
}
