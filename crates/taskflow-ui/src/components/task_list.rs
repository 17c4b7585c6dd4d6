use taskflow_shared::{
  TaskDto,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskItem;

/// A task with its in-flight flags, in
/// display order.
#[derive(Clone, PartialEq)]
pub struct TaskRowState {
  pub task:     TaskDto,
  pub toggling: bool,
  pub deleting: bool
}

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:              Vec<TaskRowState>,
  pub entrance_delay_ms: u32,
  pub on_toggle:         Callback<TaskDto>,
  pub on_delete:         Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.task.id.to_string();
                  html! {
                      <TaskItem
                          key={key}
                          task={row.task}
                          toggling={row.toggling}
                          deleting={row.deleting}
                          entrance_delay_ms={props.entrance_delay_ms}
                          on_toggle={props.on_toggle.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
