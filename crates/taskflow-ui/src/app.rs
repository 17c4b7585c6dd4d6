mod state;
mod storage;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use taskflow_shared::board::{
  BoardEvent,
  FetchState,
  Mutation,
  Outcome,
  Settlement,
  settle
};
use taskflow_shared::busy::MutationClaims;
use taskflow_shared::config::ClientConfig;
use taskflow_shared::{
  TaskDto,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  UseReducerHandle,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer,
  use_state
};

use self::state::{
  BoardStore,
  NoticeAction,
  NoticeStore
};
use crate::api::{
  self,
  ApiError
};
use crate::components::{
  EmptyState,
  ErrorView,
  LoadingSkeleton,
  ProgressSection,
  StatsDisplay,
  TaskInput,
  TaskList,
  TaskRowState,
  Toaster
};

pub use self::storage::load_client_config;

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: Rc<ClientConfig>
}

/// Claims the mutation, runs `request`,
/// then settles it: notice, claim
/// released, and a refetch on success.
///
/// `claims` is the live in-flight set,
/// not the last rendered board. A
/// refused claim sends nothing.
fn run_mutation<F, S>(
  board: UseReducerHandle<BoardStore>,
  notices: UseReducerHandle<NoticeStore>,
  claims: Rc<RefCell<MutationClaims>>,
  mutation: Mutation,
  request: F,
  on_settled: S
) where
  F: Future<Output = Result<(), ApiError>>
    + 'static,
  S: FnOnce(&Settlement) + 'static
{
  if !claims.borrow_mut().claim(&mutation)
  {
    tracing::debug!(
      mutation = mutation.label(),
      "mutation already in flight; not \
       sending"
    );
    return;
  }
  board.dispatch(BoardEvent::Dispatched(
    mutation.clone()
  ));

  wasm_bindgen_futures::spawn_local(
    async move {
      let result = request.await;
      if let Err(err) = &result {
        tracing::error!(
          error = %err,
          mutation = mutation.label(),
          "mutation failed"
        );
      }

      claims.borrow_mut().release(&mutation);
      let outcome = Outcome::of(&result);
      let settlement =
        settle(&mutation, outcome);
      on_settled(&settlement);
      notices.dispatch(
        NoticeAction::Push(
          settlement.notice
        )
      );
      board.dispatch(
        BoardEvent::Settled(
          mutation, outcome
        )
      );
    }
  );
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let config = props.config.clone();
  let board =
    use_reducer(BoardStore::default);
  let claims =
    use_mut_ref(MutationClaims::default);
  let notices = {
    let limit = config.notice_limit;
    use_reducer(move || {
      NoticeStore::new(limit)
    })
  };
  let draft = use_state(String::new);

  {
    let board = board.clone();
    let config = config.clone();
    let generation =
      board.board.generation();

    use_effect_with(
      generation,
      move |generation| {
        let generation = *generation;

        wasm_bindgen_futures::spawn_local(
          async move {
            tracing::info!(
              generation,
              "refreshing task \
               collection"
            );

            match api::list_tasks(
              &config.api_base
            )
            .await
            {
              | Ok(tasks) => {
                board.dispatch(
                  BoardEvent::Loaded {
                    generation,
                    tasks
                  }
                );
              }
              | Err(err) => {
                tracing::error!(error = %err, "tasks list failed");
                board.dispatch(
                  BoardEvent::LoadFailed {
                    generation,
                    reason: err
                      .to_string()
                  }
                );
              }
            }
          }
        );

        || ()
      }
    );
  }

  let on_draft_input = {
    let draft = draft.clone();
    Callback::from(move |value: String| {
      draft.set(value);
    })
  };

  let on_submit = {
    let board = board.clone();
    let notices = notices.clone();
    let claims = claims.clone();
    let draft = draft.clone();
    let config = config.clone();
    Callback::from(move |()| {
      let Some((mutation, request)) =
        board.board.plan_create(&draft)
      else {
        tracing::debug!(
          "ignoring blank or pending \
           submission"
        );
        return;
      };

      let base = config.api_base.clone();
      let draft = draft.clone();
      run_mutation(
        board.clone(),
        notices.clone(),
        claims.clone(),
        mutation,
        async move {
          let task = api::create_task(
            &base, &request
          )
          .await?;
          tracing::info!(id = %task.id, "task created");
          Ok::<(), ApiError>(())
        },
        move |settlement| {
          if settlement.clear_draft {
            draft.set(String::new());
          }
        }
      );
    })
  };

  let on_toggle = {
    let board = board.clone();
    let notices = notices.clone();
    let claims = claims.clone();
    let config = config.clone();
    Callback::from(move |task: TaskDto| {
      let Some((mutation, patch)) =
        board.board.plan_toggle(&task)
      else {
        return;
      };

      let base = config.api_base.clone();
      run_mutation(
        board.clone(),
        notices.clone(),
        claims.clone(),
        mutation,
        async move {
          let updated = api::update_task(
            &base, &task.id, &patch
          )
          .await?;
          tracing::info!(
            id = %updated.id,
            completed = updated.completed,
            "task updated"
          );
          Ok::<(), ApiError>(())
        },
        |_| ()
      );
    })
  };

  let on_delete = {
    let board = board.clone();
    let notices = notices.clone();
    let claims = claims.clone();
    let config = config.clone();
    Callback::from(move |id: TaskId| {
      let Some(mutation) =
        board.board.plan_delete(&id)
      else {
        return;
      };

      let base = config.api_base.clone();
      run_mutation(
        board.clone(),
        notices.clone(),
        claims.clone(),
        mutation,
        async move {
          api::delete_task(&base, &id)
            .await?;
          tracing::info!(%id, "task deleted");
          Ok::<(), ApiError>(())
        },
        |_| ()
      );
    })
  };

  let on_dismiss_notice = {
    let notices = notices.clone();
    Callback::from(move |id: u64| {
      notices.dispatch(
        NoticeAction::Dismiss(id)
      );
    })
  };

  let toaster = html! {
      <Toaster
          notices={notices.queue.clone()}
          duration_ms={config.notice_duration_ms}
          on_dismiss={on_dismiss_notice}
      />
  };

  if let FetchState::Failed(reason) =
    board.board.fetch()
  {
    return html! {
        <>
            { toaster }
            <ErrorView reason={reason.clone()} />
        </>
    };
  }

  let stats = board.board.stats();
  let rows: Vec<TaskRowState> = board
    .board
    .ordered()
    .into_iter()
    .map(|task| TaskRowState {
      toggling: board
        .board
        .is_toggling(&task.id),
      deleting: board
        .board
        .is_deleting(&task.id),
      task:     task.clone()
    })
    .collect();

  let body = match board.board.fetch() {
    | FetchState::Loading => {
      html! { <LoadingSkeleton /> }
    }
    | _ if rows.is_empty() => {
      html! { <EmptyState /> }
    }
    | _ => {
      html! {
          <TaskList
              rows={rows}
              entrance_delay_ms={config.entrance_delay_ms}
              on_toggle={on_toggle}
              on_delete={on_delete}
          />
      }
    }
  };

  html! {
      <div class="page">
          { toaster }
          <div class="container">
              <header class="page-header">
                  <div>
                      <h1 class="brand" data-testid="text-app-title">
                          <span class="brand-mark">{ "✓" }</span>
                          { "TaskFlow" }
                      </h1>
                      <p class="tagline">{ "Stay organized, get things done" }</p>
                  </div>
                  <StatsDisplay stats={stats} />
              </header>

              <div class="stack">
                  <div class="card pad-lg">
                      <TaskInput
                          value={(*draft).clone()}
                          pending={board.board.is_creating()}
                          on_input={on_draft_input}
                          on_submit={on_submit}
                      />
                  </div>

                  {
                      if stats.total > 0 {
                          html! {
                              <div class="card pad-lg">
                                  <ProgressSection stats={stats} />
                              </div>
                          }
                      } else {
                          html! {}
                      }
                  }

                  <div class="task-stack">
                      { body }
                  </div>
              </div>

              <footer class="page-footer">
                  <p>{ "Built with care. Stay productive!" }</p>
              </footer>
          </div>
      </div>
  }
}
