use std::collections::BTreeSet;

use crate::TaskId;
use crate::board::Mutation;

/// Ids with a mutation of one kind in
/// flight.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct BusySet {
  ids: BTreeSet<TaskId>
}

impl BusySet {
  /// Returns `false` if `id` was already
  /// marked.
  pub fn mark(
    &mut self,
    id: TaskId
  ) -> bool {
    self.ids.insert(id)
  }

  pub fn clear(
    &mut self,
    id: &TaskId
  ) -> bool {
    self.ids.remove(id)
  }

  pub fn contains(
    &self,
    id: &TaskId
  ) -> bool {
    self.ids.contains(id)
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }
}

/// In-flight mutations of every kind:
/// at most one create, and per id at
/// most one toggle and one delete.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct MutationClaims {
  creating: bool,
  toggling: BusySet,
  deleting: BusySet
}

impl MutationClaims {
  /// Returns `false` if the same kind of
  /// mutation is already in flight for
  /// this target.
  pub fn claim(
    &mut self,
    mutation: &Mutation
  ) -> bool {
    match mutation {
      | Mutation::Create => {
        !std::mem::replace(
          &mut self.creating,
          true
        )
      }
      | Mutation::Toggle {
        id,
        ..
      } => self.toggling.mark(id.clone()),
      | Mutation::Delete {
        id
      } => self.deleting.mark(id.clone())
    }
  }

  pub fn release(
    &mut self,
    mutation: &Mutation
  ) {
    match mutation {
      | Mutation::Create => {
        self.creating = false;
      }
      | Mutation::Toggle {
        id,
        ..
      } => {
        self.toggling.clear(id);
      }
      | Mutation::Delete {
        id
      } => {
        self.deleting.clear(id);
      }
    }
  }

  pub fn is_creating(&self) -> bool {
    self.creating
  }

  pub fn is_toggling(
    &self,
    id: &TaskId
  ) -> bool {
    self.toggling.contains(id)
  }

  pub fn is_deleting(
    &self,
    id: &TaskId
  ) -> bool {
    self.deleting.contains(id)
  }
}
