//! Wire types and client-side state for
//! the TaskFlow task board.
//!
//! Everything here is free of browser
//! dependencies so the board lifecycle
//! and derived view can be tested
//! natively.

pub mod board;
pub mod busy;
pub mod config;
pub mod draft;
pub mod notice;
pub mod routes;
pub mod view;

use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Opaque identifier assigned by the
/// task collection service.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
  pub fn new(
    raw: impl Into<String>
  ) -> Self {
    Self(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for TaskId {
  fn from(raw: &str) -> Self {
    Self::new(raw)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDto {
  pub id:        TaskId,
  #[serde(default)]
  pub title:     String,
  #[serde(default)]
  pub completed: bool
}

impl TaskDto {
  /// Body for the update request that
  /// flips this task's completion.
  pub fn toggled(&self) -> TaskPatch {
    TaskPatch {
      completed: !self.completed
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCreate {
  pub title: String
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskPatch {
  pub completed: bool
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn task_reads_wire_shape_and_ignores_extra_fields()
  {
    let raw = r#"{"id":"a1","title":"Buy milk","completed":true,"createdAt":"2024-01-01"}"#;
    let task: TaskDto =
      serde_json::from_str(raw)
        .expect("decode task");

    assert_eq!(task.id.as_str(), "a1");
    assert_eq!(task.title, "Buy milk");
    assert!(task.completed);
  }

  #[test]
  fn request_bodies_match_wire_contract()
  {
    let create = TaskCreate {
      title: "Buy milk".to_string()
    };
    assert_eq!(
      serde_json::to_string(&create)
        .expect("encode create"),
      r#"{"title":"Buy milk"}"#
    );

    let patch = TaskPatch {
      completed: false
    };
    assert_eq!(
      serde_json::to_string(&patch)
        .expect("encode patch"),
      r#"{"completed":false}"#
    );
  }

  #[test]
  fn toggling_twice_restores_completion()
  {
    let mut task = TaskDto {
      id:        TaskId::from("7"),
      title:     "Water plants"
        .to_string(),
      completed: false
    };

    task.completed =
      task.toggled().completed;
    assert!(task.completed);
    task.completed =
      task.toggled().completed;
    assert!(!task.completed);
  }
}
