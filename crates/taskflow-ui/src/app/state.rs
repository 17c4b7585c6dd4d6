use std::rc::Rc;

use taskflow_shared::board::{
  Board,
  BoardEvent
};
use taskflow_shared::notice::{
  Notice,
  NoticeQueue
};
use yew::Reducible;

#[derive(
  Clone, Default, PartialEq,
)]
pub struct BoardStore {
  pub board: Board
}

impl Reducible for BoardStore {
  type Action = BoardEvent;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next =
      Rc::unwrap_or_clone(self);
    next.board.apply(action);
    Rc::new(next)
  }
}

pub enum NoticeAction {
  Push(Notice),
  Dismiss(u64)
}

#[derive(Clone, PartialEq)]
pub struct NoticeStore {
  pub queue: NoticeQueue
}

impl NoticeStore {
  pub fn new(limit: usize) -> Self {
    Self {
      queue: NoticeQueue::new(limit)
    }
  }
}

impl Reducible for NoticeStore {
  type Action = NoticeAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    match action {
      | NoticeAction::Push(notice) => {
        let mut next =
          Rc::unwrap_or_clone(self);
        let id =
          next.queue.push(notice);
        tracing::debug!(
          id,
          "showing notice"
        );
        Rc::new(next)
      }
      | NoticeAction::Dismiss(id) => {
        // Timers may fire for notices
        // already closed by hand.
        if !self
          .queue
          .iter()
          .any(|item| item.id == id)
        {
          return self;
        }
        let mut next =
          Rc::unwrap_or_clone(self);
        next.queue.dismiss(id);
        Rc::new(next)
      }
    }
  }
}
