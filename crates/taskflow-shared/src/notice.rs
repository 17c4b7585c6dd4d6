//! Toast messages and the bounded stack
//! that displays them.

use std::collections::VecDeque;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeTone {
  Default,
  Destructive
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub title:       &'static str,
  pub description: &'static str,
  pub tone:        NoticeTone
}

impl Notice {
  const fn info(
    title: &'static str,
    description: &'static str
  ) -> Self {
    Self {
      title,
      description,
      tone: NoticeTone::Default
    }
  }

  const fn failure(
    description: &'static str
  ) -> Self {
    Self {
      title: "Error",
      description,
      tone: NoticeTone::Destructive
    }
  }

  pub const fn task_added() -> Self {
    Self::info(
      "Task added",
      "Your new task has been created."
    )
  }

  pub const fn add_failed() -> Self {
    Self::failure(
      "Failed to add task. Please try \
       again."
    )
  }

  pub const fn task_completed() -> Self
  {
    Self::info(
      "Task completed",
      "Great job! Keep up the momentum."
    )
  }

  pub const fn task_reopened() -> Self {
    Self::info(
      "Task reopened",
      "Task marked as incomplete."
    )
  }

  pub const fn update_failed() -> Self {
    Self::failure(
      "Failed to update task. Please \
       try again."
    )
  }

  pub const fn task_deleted() -> Self {
    Self::info(
      "Task deleted",
      "The task has been removed."
    )
  }

  pub const fn delete_failed() -> Self {
    Self::failure(
      "Failed to delete task. Please \
       try again."
    )
  }

  pub fn is_destructive(&self) -> bool {
    self.tone == NoticeTone::Destructive
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedNotice {
  pub id:     u64,
  pub notice: Notice
}

/// Newest-first stack holding at most
/// `limit` notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
  limit:   usize,
  next_id: u64,
  items:   VecDeque<QueuedNotice>
}

impl NoticeQueue {
  pub fn new(limit: usize) -> Self {
    Self {
      limit:   limit.max(1),
      next_id: 0,
      items:   VecDeque::new()
    }
  }

  pub fn push(
    &mut self,
    notice: Notice
  ) -> u64 {
    let id = self.next_id;
    self.next_id =
      self.next_id.wrapping_add(1);
    self.items.push_front(
      QueuedNotice {
        id,
        notice
      }
    );
    self.items.truncate(self.limit);
    id
  }

  pub fn dismiss(
    &mut self,
    id: u64
  ) -> bool {
    let before = self.items.len();
    self
      .items
      .retain(|item| item.id != id);
    self.items.len() != before
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &QueuedNotice>
  {
    self.items.iter()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl Default for NoticeQueue {
  fn default() -> Self {
    Self::new(3)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn newest_notice_is_shown_first() {
    let mut queue = NoticeQueue::new(3);
    queue.push(Notice::task_added());
    queue.push(Notice::task_deleted());

    let titles: Vec<&str> = queue
      .iter()
      .map(|item| item.notice.title)
      .collect();
    assert_eq!(
      titles,
      ["Task deleted", "Task added"]
    );
  }

  #[test]
  fn oldest_notice_drops_past_limit() {
    let mut queue = NoticeQueue::new(2);
    let first =
      queue.push(Notice::task_added());
    queue.push(Notice::task_completed());
    queue.push(Notice::task_reopened());

    assert_eq!(queue.len(), 2);
    assert!(!queue.dismiss(first));
  }

  #[test]
  fn dismiss_removes_only_matching_id() {
    let mut queue = NoticeQueue::default();
    let kept =
      queue.push(Notice::add_failed());
    let gone =
      queue.push(Notice::delete_failed());

    assert!(queue.dismiss(gone));
    assert_eq!(queue.len(), 1);
    assert_eq!(
      queue.iter().next().map(|item| item.id),
      Some(kept)
    );
  }

  #[test]
  fn failures_share_title_but_differ_in_text()
  {
    let failures = [
      Notice::add_failed(),
      Notice::update_failed(),
      Notice::delete_failed()
    ];
    for notice in &failures {
      assert_eq!(notice.title, "Error");
      assert!(notice.is_destructive());
    }
    assert_ne!(
      failures[0].description,
      failures[1].description
    );
    assert_ne!(
      failures[1].description,
      failures[2].description
    );
  }

  #[test]
  fn zero_limit_still_shows_one() {
    let mut queue = NoticeQueue::new(0);
    queue.push(Notice::task_added());
    assert_eq!(queue.len(), 1);
  }
}
