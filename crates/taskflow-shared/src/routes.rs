use percent_encoding::{
  AsciiSet,
  CONTROLS,
  utf8_percent_encode
};

use crate::TaskId;

pub const TASKS_PATH: &str =
  "/api/tasks";

// Characters that cannot appear raw in
// a single path segment.
const SEGMENT_ENCODE_SET: &AsciiSet =
  &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum HttpMethod {
  Get,
  Post,
  Patch,
  Delete
}

impl HttpMethod {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Patch => "PATCH",
      | Self::Delete => "DELETE"
    }
  }
}

/// The four endpoints of the task
/// collection service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
  ListTasks,
  CreateTask,
  UpdateTask(TaskId),
  DeleteTask(TaskId)
}

impl ApiRoute {
  pub fn method(&self) -> HttpMethod {
    match self {
      | Self::ListTasks => {
        HttpMethod::Get
      }
      | Self::CreateTask => {
        HttpMethod::Post
      }
      | Self::UpdateTask(_) => {
        HttpMethod::Patch
      }
      | Self::DeleteTask(_) => {
        HttpMethod::Delete
      }
    }
  }

  pub fn path(&self) -> String {
    match self {
      | Self::ListTasks
      | Self::CreateTask => {
        TASKS_PATH.to_string()
      }
      | Self::UpdateTask(id)
      | Self::DeleteTask(id) => {
        format!(
          "{TASKS_PATH}/{}",
          utf8_percent_encode(
            id.as_str(),
            SEGMENT_ENCODE_SET
          )
        )
      }
    }
  }

  /// Absolute or origin-relative URL
  /// for this route under `base`.
  pub fn url(
    &self,
    base: &str
  ) -> String {
    format!(
      "{}{}",
      base.trim_end_matches('/'),
      self.path()
    )
  }
}
