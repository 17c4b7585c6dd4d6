use taskflow_shared::board::{
  Board,
  BoardEvent,
  FetchState,
  Mutation,
  Outcome,
  settle
};
use taskflow_shared::notice::{
  Notice,
  NoticeQueue
};
use taskflow_shared::routes::ApiRoute;
use taskflow_shared::{
  TaskDto,
  TaskId
};

fn task(
  id: &str,
  title: &str,
  completed: bool
) -> TaskDto {
  TaskDto {
    id: TaskId::from(id),
    title: title.to_string(),
    completed
  }
}

fn loaded(tasks: Vec<TaskDto>) -> Board {
  let mut board = Board::default();
  refetched(&mut board, tasks);
  board
}

/// Applies a fetch issued under the
/// board's current generation.
fn refetched(
  board: &mut Board,
  tasks: Vec<TaskDto>
) {
  let generation = board.generation();
  board.apply(BoardEvent::Loaded {
    generation,
    tasks
  });
}

#[test]
fn create_trims_title_and_refetches_on_success()
{
  let mut board = loaded(vec![]);
  let mut notices = NoticeQueue::default();

  let (mutation, request) = board
    .plan_create("  Buy milk  ")
    .expect("non-empty draft");
  assert_eq!(request.title, "Buy milk");
  assert_eq!(
    ApiRoute::CreateTask.path(),
    "/api/tasks"
  );

  board.apply(BoardEvent::Dispatched(
    mutation.clone()
  ));
  assert!(board.is_creating());

  let settlement =
    settle(&mutation, Outcome::Succeeded);
  notices.push(settlement.notice.clone());
  board.apply(BoardEvent::Settled(
    mutation,
    Outcome::Succeeded
  ));

  assert!(settlement.clear_draft);
  assert!(!board.is_creating());
  assert_eq!(board.generation(), 1);
  assert_eq!(
    notices
      .iter()
      .next()
      .map(|item| item.notice.clone()),
    Some(Notice::task_added())
  );

  // The refetch triggered by the new
  // generation brings in the new task.
  refetched(&mut board, vec![task(
    "n1", "Buy milk", false
  )]);
  assert_eq!(board.stats().total, 1);
}

#[test]
fn failed_create_keeps_draft() {
  let mut board = loaded(vec![]);
  let (mutation, _) = board
    .plan_create("Call plumber")
    .expect("non-empty draft");
  board.apply(BoardEvent::Dispatched(
    mutation.clone()
  ));

  let settlement =
    settle(&mutation, Outcome::Failed);
  board.apply(BoardEvent::Settled(
    mutation,
    Outcome::Failed
  ));

  assert!(!settlement.clear_draft);
  assert_eq!(
    settlement.notice,
    Notice::add_failed()
  );
  assert!(!board.is_creating());
  assert_eq!(board.generation(), 0);
}

#[test]
fn blank_submission_changes_nothing() {
  let tasks = vec![
    task("1", "A", false),
    task("2", "B", true),
  ];
  let board = loaded(tasks.clone());
  let before = board.clone();

  assert!(board.plan_create("").is_none());
  assert!(
    board.plan_create("   \t").is_none()
  );
  assert_eq!(board, before);
  assert_eq!(board.tasks(), tasks.as_slice());
}

#[test]
fn failed_delete_leaves_task_listed() {
  let target = task("1", "A", false);
  let mut board = loaded(vec![
    target.clone(),
    task("2", "B", true),
  ]);

  let mutation = board
    .plan_delete(&target.id)
    .expect("idle task");
  board.apply(BoardEvent::Dispatched(
    mutation.clone()
  ));
  assert!(board.is_deleting(&target.id));
  assert!(
    board.plan_delete(&target.id).is_none()
  );

  let settlement =
    settle(&mutation, Outcome::Failed);
  board.apply(BoardEvent::Settled(
    mutation,
    Outcome::Failed
  ));

  assert!(!board.is_deleting(&target.id));
  assert_eq!(
    settlement.notice,
    Notice::delete_failed()
  );
  assert_eq!(board.generation(), 0);
  assert_eq!(
    board.ordered().first().copied(),
    Some(&target)
  );
}

#[test]
fn concurrent_toggle_and_delete_do_not_block_each_other()
{
  let a = task("a", "A", false);
  let b = task("b", "B", false);
  let mut board =
    loaded(vec![a.clone(), b.clone()]);

  let (toggle, patch) = board
    .plan_toggle(&a)
    .expect("a idle");
  let delete = board
    .plan_delete(&b.id)
    .expect("b idle");
  assert!(patch.completed);

  board.apply(BoardEvent::Dispatched(
    toggle.clone()
  ));
  board.apply(BoardEvent::Dispatched(
    delete.clone()
  ));
  assert!(board.is_toggling(&a.id));
  assert!(board.is_deleting(&b.id));

  // Settlements may arrive in any order.
  board.apply(BoardEvent::Settled(
    delete,
    Outcome::Succeeded
  ));
  assert!(board.is_toggling(&a.id));
  board.apply(BoardEvent::Settled(
    toggle,
    Outcome::Failed
  ));

  assert!(!board.is_toggling(&a.id));
  assert!(!board.is_deleting(&b.id));
  assert_eq!(board.generation(), 1);
}

#[test]
fn toggling_round_trip_restores_composition()
{
  let original = task("1", "A", false);
  let mut board =
    loaded(vec![original.clone()]);

  let (first, patch) = board
    .plan_toggle(&original)
    .expect("idle");
  assert_eq!(
    first,
    Mutation::Toggle {
      id:        original.id.clone(),
      completed: true
    }
  );
  board.apply(BoardEvent::Dispatched(
    first.clone()
  ));
  board.apply(BoardEvent::Settled(
    first,
    Outcome::Succeeded
  ));
  let flipped = TaskDto {
    completed: patch.completed,
    ..original.clone()
  };
  refetched(&mut board, vec![
    flipped.clone(),
  ]);
  assert_eq!(board.stats().percentage, 100);

  let (second, patch) = board
    .plan_toggle(&flipped)
    .expect("idle");
  board.apply(BoardEvent::Dispatched(
    second.clone()
  ));
  board.apply(BoardEvent::Settled(
    second,
    Outcome::Succeeded
  ));
  refetched(&mut board, vec![TaskDto {
    completed: patch.completed,
    ..flipped
  }]);

  assert_eq!(
    board.tasks(),
    [original].as_slice()
  );
  assert_eq!(board.generation(), 2);
}

#[test]
fn mixed_collection_summary() {
  let board = loaded(vec![
    task("1", "A", false),
    task("2", "B", true),
  ]);
  let stats = board.stats();

  assert_eq!(stats.total, 2);
  assert_eq!(stats.active, 1);
  assert_eq!(stats.completed, 1);
  assert_eq!(stats.percentage, 50);

  let titles: Vec<&str> = board
    .ordered()
    .into_iter()
    .map(|task| task.title.as_str())
    .collect();
  assert_eq!(titles, ["A", "B"]);
}

#[test]
fn late_refetch_does_not_overwrite_newer_collection()
{
  let a = task("a", "A", false);
  let mut board = loaded(vec![a.clone()]);

  let (toggle, _) = board
    .plan_toggle(&a)
    .expect("a idle");
  board.apply(BoardEvent::Dispatched(
    toggle.clone()
  ));
  board.apply(BoardEvent::Settled(
    toggle,
    Outcome::Succeeded
  ));
  let after_toggle = board.generation();

  let delete = board
    .plan_delete(&a.id)
    .expect("a idle");
  board.apply(BoardEvent::Dispatched(
    delete.clone()
  ));
  board.apply(BoardEvent::Settled(
    delete,
    Outcome::Succeeded
  ));
  let after_delete = board.generation();
  assert_eq!(after_toggle, 1);
  assert_eq!(after_delete, 2);

  // The fetch started after the delete
  // answers first.
  board.apply(BoardEvent::Loaded {
    generation: after_delete,
    tasks:      vec![]
  });
  // The fetch started after the toggle
  // answers last, still showing the task.
  board.apply(BoardEvent::Loaded {
    generation: after_toggle,
    tasks:      vec![TaskDto {
      completed: true,
      ..a.clone()
    }]
  });
  assert!(board.tasks().is_empty());

  board.apply(BoardEvent::LoadFailed {
    generation: after_toggle,
    reason:     "status 502".to_string()
  });
  assert_eq!(
    board.fetch(),
    &FetchState::Ready(vec![])
  );
}

#[test]
fn duplicate_dispatch_keeps_claim_until_settled()
{
  let a = task("a", "A", false);
  let mut board = loaded(vec![a.clone()]);

  let (toggle, _) = board
    .plan_toggle(&a)
    .expect("a idle");
  board.apply(BoardEvent::Dispatched(
    toggle.clone()
  ));
  // A second dispatch from a stale
  // snapshot is ignored, not stacked.
  board.apply(BoardEvent::Dispatched(
    toggle.clone()
  ));
  assert!(board.plan_toggle(&a).is_none());

  board.apply(BoardEvent::Settled(
    toggle,
    Outcome::Succeeded
  ));
  assert!(!board.is_toggling(&a.id));
  assert_eq!(board.generation(), 1);
}
