//! Values derived from the fetched task
//! collection. Recomputed on every
//! render, never stored.

use crate::TaskDto;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskStats {
  pub total:      usize,
  pub completed:  usize,
  pub active:     usize,
  pub percentage: usize
}

impl TaskStats {
  pub fn from_tasks(
    tasks: &[TaskDto]
  ) -> Self {
    let total = tasks.len();
    let completed = tasks
      .iter()
      .filter(|task| task.completed)
      .count();

    Self {
      total,
      completed,
      active: total - completed,
      percentage: completion_percentage(
        completed, total
      )
    }
  }
}

/// `completed / total` as a percentage,
/// rounded half up. Zero for an empty
/// collection.
pub fn completion_percentage(
  completed: usize,
  total: usize
) -> usize {
  if total == 0 {
    return 0;
  }
  (completed * 200 + total)
    / (total * 2)
}

/// Active tasks first, then completed
/// ones, each group in collection
/// order.
pub fn display_order(
  tasks: &[TaskDto]
) -> Vec<&TaskDto> {
  let (active, completed): (
    Vec<&TaskDto>,
    Vec<&TaskDto>
  ) = tasks
    .iter()
    .partition(|task| !task.completed);

  active
    .into_iter()
    .chain(completed)
    .collect()
}
