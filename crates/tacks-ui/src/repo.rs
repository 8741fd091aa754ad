use tacks_core::errors::TaskOpError;
use tacks_core::session::SessionUser;
use tacks_core::task::{
  CreateTask,
  Task,
  TaskDraft,
  TaskPatch
};
use tracing::{
  debug,
  error,
  info,
  warn
};
use yew::{
  Callback,
  hook,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::api::{
  self,
  ServiceError,
  TaskSubscription
};

#[derive(Clone, PartialEq)]
pub struct TasksState {
  pub tasks:   Vec<Task>,
  pub loading: bool,
  pub error:   Option<&'static str>
}

/// Live view of the signed-in user's
/// task collection. Each snapshot
/// replaces the whole collection;
/// last write wins if two race.
#[hook]
pub fn use_tasks(
  user: Option<SessionUser>
) -> TasksState {
  let tasks =
    use_state(Vec::<Task>::new);
  let loading = use_state(|| true);
  let error =
    use_state(|| None::<&'static str>);
  let subscription = use_mut_ref(
    || None::<TaskSubscription>
  );

  {
    let tasks = tasks.clone();
    let loading = loading.clone();
    let error = error.clone();
    let subscription =
      subscription.clone();
    let uid =
      user.map(|user| user.uid);

    use_effect_with(uid, move |uid| {
      // One active handle at a time:
      // the previous identity's query
      // closes before the next opens.
      if let Some(handle) =
        subscription.borrow_mut().take()
      {
        handle.close();
      }

      match uid.as_deref() {
        | Some(uid) => {
          loading.set(true);
          error.set(None);

          let on_snapshot = {
            let tasks = tasks.clone();
            let loading =
              loading.clone();
            Callback::from(
              move |snapshot: Vec<
                Task
              >| {
                debug!(
                  count =
                    snapshot.len(),
                  "task snapshot \
                   replaced"
                );
                tasks.set(snapshot);
                loading.set(false);
              }
            )
          };

          let on_error = {
            let loading =
              loading.clone();
            let error = error.clone();
            Callback::from(
              move |service: ServiceError| {
                error!(
                  code = ?service.code,
                  message = %service.message,
                  "task subscription failed"
                );
                error.set(Some(
                  TaskOpError::Subscribe
                    .user_message()
                ));
                loading.set(false);
              }
            )
          };

          *subscription
            .borrow_mut() = Some(
            api::subscribe_tasks(
              uid,
              on_snapshot,
              on_error
            )
          );
        }
        | None => {
          tasks.set(Vec::new());
          loading.set(false);
          error.set(None);
        }
      }

      move || {
        if let Some(handle) =
          subscription
            .borrow_mut()
            .take()
        {
          handle.close();
        }
      }
    });
  }

  TasksState {
    tasks:   (*tasks).clone(),
    loading: *loading,
    error:   *error
  }
}

pub async fn add_task(
  user: Option<&SessionUser>,
  draft: TaskDraft
) -> Result<(), TaskOpError> {
  let Some(user) = user else {
    warn!(
      "add task attempted without a \
       session"
    );
    return Err(
      TaskOpError::Unauthenticated
    );
  };

  let record = CreateTask::from_draft(
    draft, &user.uid
  );

  match api::create_task(&record).await
  {
    | Ok(()) => {
      info!(
        owner = %user.uid,
        "task created"
      );
      Ok(())
    }
    | Err(service) => {
      error!(
        code = ?service.code,
        message = %service.message,
        "task create failed"
      );
      Err(TaskOpError::Add)
    }
  }
}

pub async fn save_task(
  id: &str,
  patch: TaskPatch
) -> Result<(), TaskOpError> {
  match api::update_task(id, &patch)
    .await
  {
    | Ok(()) => {
      info!(%id, "task updated");
      Ok(())
    }
    | Err(service) => {
      error!(
        %id,
        code = ?service.code,
        message = %service.message,
        "task update failed"
      );
      Err(TaskOpError::Update)
    }
  }
}

pub async fn remove_task(
  id: &str
) -> Result<(), TaskOpError> {
  match api::delete_task(id).await {
    | Ok(()) => {
      info!(%id, "task deleted");
      Ok(())
    }
    | Err(service) => {
      error!(
        %id,
        code = ?service.code,
        message = %service.message,
        "task delete failed"
      );
      Err(TaskOpError::Delete)
    }
  }
}

pub async fn set_completed(
  id: &str,
  completed: bool
) -> Result<(), TaskOpError> {
  let patch = TaskPatch {
    completed: Some(completed),
    ..TaskPatch::default()
  };

  match api::update_task(id, &patch)
    .await
  {
    | Ok(()) => {
      info!(
        %id,
        completed,
        "task completion toggled"
      );
      Ok(())
    }
    | Err(service) => {
      error!(
        %id,
        code = ?service.code,
        message = %service.message,
        "task toggle failed"
      );
      Err(TaskOpError::Toggle)
    }
  }
}
