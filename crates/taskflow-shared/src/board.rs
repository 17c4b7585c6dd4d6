//! Client-side board state: the last
//! fetched collection, per-item busy
//! flags and the invalidation
//! generation that drives refetches.
//!
//! Mutations never touch the collection
//! directly. A successful mutation bumps
//! the generation; the fetch routine
//! watches it and replaces the
//! collection wholesale.

use std::collections::BTreeSet;

use tracing::{
  debug,
  warn
};

use crate::busy::MutationClaims;
use crate::draft;
use crate::notice::Notice;
use crate::view::{
  self,
  TaskStats
};
use crate::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch
};

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub enum FetchState {
  #[default]
  Loading,
  Failed(String),
  Ready(Vec<TaskDto>)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
  Create,
  Toggle {
    id:        TaskId,
    completed: bool
  },
  Delete {
    id: TaskId
  }
}

impl Mutation {
  pub fn label(&self) -> &'static str {
    match self {
      | Self::Create => "create",
      | Self::Toggle {
        ..
      } => "toggle",
      | Self::Delete {
        ..
      } => "delete"
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Outcome {
  Succeeded,
  Failed
}

impl Outcome {
  pub fn of<T, E>(
    result: &Result<T, E>
  ) -> Self {
    if result.is_ok() {
      Self::Succeeded
    } else {
      Self::Failed
    }
  }
}

/// What the UI does once a mutation
/// finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
  pub notice:      Notice,
  pub invalidate:  bool,
  pub clear_draft: bool
}

pub fn settle(
  mutation: &Mutation,
  outcome: Outcome
) -> Settlement {
  let succeeded =
    outcome == Outcome::Succeeded;
  let notice = match (mutation, succeeded)
  {
    | (Mutation::Create, true) => {
      Notice::task_added()
    }
    | (Mutation::Create, false) => {
      Notice::add_failed()
    }
    | (
      Mutation::Toggle {
        completed: true,
        ..
      },
      true
    ) => Notice::task_completed(),
    | (
      Mutation::Toggle {
        completed: false,
        ..
      },
      true
    ) => Notice::task_reopened(),
    | (
      Mutation::Toggle {
        ..
      },
      false
    ) => Notice::update_failed(),
    | (
      Mutation::Delete {
        ..
      },
      true
    ) => Notice::task_deleted(),
    | (
      Mutation::Delete {
        ..
      },
      false
    ) => Notice::delete_failed()
  };

  Settlement {
    notice,
    invalidate: succeeded,
    clear_draft: succeeded
      && *mutation == Mutation::Create
  }
}

/// Fetch results carry the generation
/// the request was issued under so a
/// late response from an older fetch
/// cannot overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
  Loaded {
    generation: u64,
    tasks:      Vec<TaskDto>
  },
  LoadFailed {
    generation: u64,
    reason:     String
  },
  Dispatched(Mutation),
  Settled(Mutation, Outcome)
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct Board {
  fetch:      FetchState,
  claims:     MutationClaims,
  generation: u64
}

impl Board {
  pub fn apply(
    &mut self,
    event: BoardEvent
  ) {
    match event {
      | BoardEvent::Loaded {
        generation,
        tasks
      } => {
        if self.is_stale(generation) {
          return;
        }
        let tasks = dedupe_by_id(tasks);
        debug!(
          total = tasks.len(),
          generation,
          "task collection loaded"
        );
        self.fetch =
          FetchState::Ready(tasks);
      }
      | BoardEvent::LoadFailed {
        generation,
        reason
      } => {
        if self.is_stale(generation) {
          return;
        }
        warn!(%reason, generation, "task collection failed to load");
        self.fetch =
          FetchState::Failed(reason);
      }
      | BoardEvent::Dispatched(
        mutation
      ) => {
        if !self.claims.claim(&mutation)
        {
          debug!(
            mutation = mutation.label(),
            "ignoring dispatch for a \
             mutation already in flight"
          );
        }
      }
      | BoardEvent::Settled(
        mutation,
        outcome
      ) => {
        let settlement =
          settle(&mutation, outcome);
        self.claims.release(&mutation);
        if settlement.invalidate {
          self.generation = self
            .generation
            .saturating_add(1);
        }
        debug!(
          mutation = mutation.label(),
          ?outcome,
          generation = self.generation,
          "mutation settled"
        );
      }
    }
  }

  fn is_stale(
    &self,
    generation: u64
  ) -> bool {
    let stale =
      generation < self.generation;
    if stale {
      debug!(
        generation,
        current = self.generation,
        "dropping response from a \
         superseded fetch"
      );
    }
    stale
  }

  pub fn fetch(&self) -> &FetchState {
    &self.fetch
  }

  /// The last fetched collection, empty
  /// until the first load succeeds.
  pub fn tasks(&self) -> &[TaskDto] {
    match &self.fetch {
      | FetchState::Ready(tasks) => {
        tasks
      }
      | _ => &[]
    }
  }

  pub fn stats(&self) -> TaskStats {
    TaskStats::from_tasks(self.tasks())
  }

  pub fn ordered(&self) -> Vec<&TaskDto> {
    view::display_order(self.tasks())
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn is_creating(&self) -> bool {
    self.claims.is_creating()
  }

  pub fn is_toggling(
    &self,
    id: &TaskId
  ) -> bool {
    self.claims.is_toggling(id)
  }

  pub fn is_deleting(
    &self,
    id: &TaskId
  ) -> bool {
    self.claims.is_deleting(id)
  }

  pub fn plan_create(
    &self,
    raw_title: &str
  ) -> Option<(Mutation, TaskCreate)> {
    if self.is_creating() {
      return None;
    }
    draft::create_request(raw_title)
      .map(|request| {
        (Mutation::Create, request)
      })
  }

  pub fn plan_toggle(
    &self,
    task: &TaskDto
  ) -> Option<(Mutation, TaskPatch)> {
    if self.is_toggling(&task.id) {
      return None;
    }
    let patch = task.toggled();
    Some((
      Mutation::Toggle {
        id:        task.id.clone(),
        completed: patch.completed
      },
      patch
    ))
  }

  pub fn plan_delete(
    &self,
    id: &TaskId
  ) -> Option<Mutation> {
    if self.is_deleting(id) {
      return None;
    }
    Some(Mutation::Delete {
      id: id.clone()
    })
  }
}

fn dedupe_by_id(
  tasks: Vec<TaskDto>
) -> Vec<TaskDto> {
  let mut seen = BTreeSet::new();
  tasks
    .into_iter()
    .filter(|task| {
      let fresh =
        seen.insert(task.id.clone());
      if !fresh {
        warn!(id = %task.id, "dropping duplicate task id from payload");
      }
      fresh
    })
    .collect()
}
