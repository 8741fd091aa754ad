use gloo::timers::callback::Timeout;
use tacks_core::filter::{
  TaskFilter,
  visible_tasks
};
use tacks_core::session::SessionUser;
use tacks_core::task::{
  Task,
  TaskDraft,
  TaskPatch
};
use tracing::info;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_mut_ref,
  use_state
};

use crate::api;
use crate::components::{
  ConfirmModal,
  ConfirmPrompt,
  FilterBar,
  Notice,
  TaskForm,
  TaskList,
  ToastBanner
};
use crate::repo::{
  self,
  use_tasks
};

const NOTICE_DISMISS_MS: u32 = 3_000;
const SIGN_OUT_FAILED: &str =
  "Failed to sign out.";

#[derive(Clone, PartialEq)]
enum ConfirmAction {
  Logout,
  DeleteTask {
    id:    String,
    title: String
  }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
  pub user: SessionUser
}

#[function_component(Dashboard)]
pub fn dashboard(
  props: &DashboardProps
) -> Html {
  let state = use_tasks(
    Some(props.user.clone())
  );
  let filter =
    use_state(TaskFilter::default);
  let show_form = use_state(|| false);
  let form_busy = use_state(|| false);
  let notice =
    use_state(|| None::<Notice>);
  let dismiss_timer =
    use_mut_ref(|| None::<Timeout>);
  let confirm = use_state(
    || None::<ConfirmAction>
  );

  let notify = {
    let notice = notice.clone();
    let dismiss_timer =
      dismiss_timer.clone();
    Callback::from(
      move |next: Notice| {
        notice.set(Some(next));

        let clear = {
          let notice = notice.clone();
          Timeout::new(
            NOTICE_DISMISS_MS,
            move || notice.set(None)
          )
        };

        // Replacing the handle drops
        // the previous timeout, so an
        // older dismissal can never
        // clear a newer message.
        *dismiss_timer.borrow_mut() =
          Some(clear);
      }
    )
  };

  let on_filter_change = {
    let filter = filter.clone();
    Callback::from(
      move |next: TaskFilter| {
        filter.set(next);
      }
    )
  };

  let on_toggle_form = {
    let show_form = show_form.clone();
    Callback::from(move |_| {
      show_form.set(!*show_form);
    })
  };

  let on_cancel_form = {
    let show_form = show_form.clone();
    Callback::from(move |_| {
      show_form.set(false);
    })
  };

  let on_create = {
    let user = props.user.clone();
    let show_form = show_form.clone();
    let form_busy = form_busy.clone();
    let notify = notify.clone();
    Callback::from(
      move |draft: TaskDraft| {
        form_busy.set(true);

        let user = user.clone();
        let show_form =
          show_form.clone();
        let form_busy =
          form_busy.clone();
        let notify = notify.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match repo::add_task(
              Some(&user),
              draft
            )
            .await
            {
              | Ok(()) => {
                show_form.set(false);
                notify.emit(
                  Notice::success(
                    "Task added!"
                  )
                );
              }
              | Err(failure) => {
                notify.emit(
                  Notice::error(
                    failure
                      .user_message()
                  )
                );
              }
            }
            form_busy.set(false);
          }
        );
      }
    )
  };

  let on_save = {
    let notify = notify.clone();
    Callback::from(
      move |(id, patch): (
        String,
        TaskPatch
      )| {
        let notify = notify.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match repo::save_task(
              &id, patch
            )
            .await
            {
              | Ok(()) => notify.emit(
                Notice::success(
                  "Task updated!"
                )
              ),
              | Err(failure) => {
                notify.emit(
                  Notice::error(
                    failure
                      .user_message()
                  )
                )
              }
            }
          }
        );
      }
    )
  };

  let on_toggle = {
    let notify = notify.clone();
    Callback::from(
      move |(id, completed): (
        String,
        bool
      )| {
        let notify = notify.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match repo::set_completed(
              &id, completed
            )
            .await
            {
              | Ok(()) => {
                let message =
                  if completed {
                    "Task completed!"
                  } else {
                    "Task marked \
                     active."
                  };
                notify.emit(
                  Notice::success(
                    message
                  )
                );
              }
              | Err(failure) => {
                notify.emit(
                  Notice::error(
                    failure
                      .user_message()
                  )
                )
              }
            }
          }
        );
      }
    )
  };

  let on_request_delete = {
    let confirm = confirm.clone();
    Callback::from(
      move |task: Task| {
        confirm.set(Some(
          ConfirmAction::DeleteTask {
            id:    task.id,
            title: task.title
          }
        ));
      }
    )
  };

  let on_request_logout = {
    let confirm = confirm.clone();
    Callback::from(move |_| {
      confirm.set(
        Some(ConfirmAction::Logout)
      );
    })
  };

  let on_cancel_confirm = {
    let confirm = confirm.clone();
    Callback::from(move |_| {
      confirm.set(None);
    })
  };

  let on_confirm = {
    let confirm = confirm.clone();
    let notify = notify.clone();
    Callback::from(
      move |_: MouseEvent| {
        let Some(action) =
          (*confirm).clone()
        else {
          return;
        };
        confirm.set(None);

        match action {
          | ConfirmAction::DeleteTask {
            id,
            ..
          } => {
            let notify =
              notify.clone();
            wasm_bindgen_futures::spawn_local(
              async move {
                match repo::remove_task(&id).await {
                  | Ok(()) => notify.emit(
                    Notice::success("Task deleted.")
                  ),
                  | Err(failure) => notify.emit(
                    Notice::error(failure.user_message())
                  )
                }
              }
            );
          }
          | ConfirmAction::Logout => {
            let notify =
              notify.clone();
            wasm_bindgen_futures::spawn_local(
              async move {
                match api::sign_out().await {
                  | Ok(()) => info!("signed out"),
                  | Err(service) => {
                    tracing::error!(
                      code = ?service.code,
                      message = %service.message,
                      "sign out failed"
                    );
                    notify.emit(
                      Notice::error(SIGN_OUT_FAILED)
                    );
                  }
                }
              }
            );
          }
        }
      }
    )
  };

  if state.loading {
    return html! {
        <div class="dashboard">
            <div class="loading">{ "Loading tasks…" }</div>
        </div>
    };
  }

  if let Some(message) = state.error {
    return html! {
        <div class="dashboard">
            <div class="error-banner">{ message }</div>
        </div>
    };
  }

  let visible = visible_tasks(
    &state.tasks,
    &filter
  );

  let prompt = (*confirm)
    .clone()
    .map(|action| match action {
      | ConfirmAction::Logout => {
        ConfirmPrompt {
          title:         "Sign out"
            .to_string(),
          message:       "Are you \
                          sure you \
                          want to \
                          sign out?"
            .to_string(),
          confirm_label: "Sign out"
            .to_string(),
          cancel_label:  "Stay \
                          signed in"
            .to_string(),
          danger:        false
        }
      }
      | ConfirmAction::DeleteTask {
        title,
        ..
      } => ConfirmPrompt {
        title:         "Delete task"
          .to_string(),
        message:       format!(
          "Delete \"{title}\"? This \
           cannot be undone."
        ),
        confirm_label: "Delete"
          .to_string(),
        cancel_label:  "Cancel"
          .to_string(),
        danger:        true
      }
    });

  let who = props
    .user
    .email
    .clone()
    .unwrap_or_else(|| {
      props.user.uid.clone()
    });

  html! {
      <div class="dashboard">
          <div class="dashboard-toolbar">
              <span class="who">{ who }</span>
              <button class="btn ok" onclick={on_toggle_form}>
                  { if *show_form { "Close" } else { "Add task" } }
              </button>
              <button class="btn" onclick={on_request_logout}>
                  { "Sign out" }
              </button>
          </div>
          <FilterBar
              filter={(*filter).clone()}
              on_change={on_filter_change}
          />
          {
              if *show_form {
                  html! {
                      <TaskForm
                          busy={*form_busy}
                          on_create={on_create}
                          on_cancel={on_cancel_form}
                      />
                  }
              } else {
                  html! {}
              }
          }
          <TaskList
              tasks={visible}
              on_toggle={on_toggle}
              on_save={on_save}
              on_delete={on_request_delete}
          />
          <ConfirmModal
              prompt={prompt}
              on_confirm={on_confirm}
              on_cancel={on_cancel_confirm}
          />
          <ToastBanner notice={(*notice).clone()} />
      </div>
  }
}
