use tacks_core::session::SessionUser;
use tacks_core::task::{
  CreateTask,
  Task,
  TaskPatch
};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::{
  Closure,
  wasm_bindgen
};
use yew::Callback;

#[wasm_bindgen(
  module = "/js/backend.js"
)]
extern "C" {
  #[wasm_bindgen(
    js_name = authSubscribe
  )]
  fn js_auth_subscribe(
    on_change: &Closure<
      dyn FnMut(JsValue)
    >
  ) -> js_sys::Function;

  #[wasm_bindgen(
    js_name = authSignIn,
    catch
  )]
  async fn js_auth_sign_in(
    email: &str,
    password: &str
  ) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(
    js_name = authSignUp,
    catch
  )]
  async fn js_auth_sign_up(
    email: &str,
    password: &str
  ) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(
    js_name = authSignOut,
    catch
  )]
  async fn js_auth_sign_out()
  -> Result<JsValue, JsValue>;

  #[wasm_bindgen(
    js_name = tasksSubscribe
  )]
  fn js_tasks_subscribe(
    owner_id: &str,
    on_snapshot: &Closure<
      dyn FnMut(JsValue)
    >,
    on_error: &Closure<
      dyn FnMut(JsValue)
    >
  ) -> js_sys::Function;

  #[wasm_bindgen(
    js_name = taskCreate,
    catch
  )]
  async fn js_task_create(
    data: JsValue
  ) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(
    js_name = taskUpdate,
    catch
  )]
  async fn js_task_update(
    id: &str,
    patch: JsValue
  ) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(
    js_name = taskDelete,
    catch
  )]
  async fn js_task_delete(
    id: &str
  ) -> Result<JsValue, JsValue>;
}

/// A failure thrown by the external
/// service, reduced to the fields the
/// client cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
  pub code:    Option<String>,
  pub message: String
}

impl ServiceError {
  fn from_js(value: JsValue) -> Self {
    let code = js_sys::Reflect::get(
      &value,
      &JsValue::from_str("code")
    )
    .ok()
    .and_then(|raw| raw.as_string());

    let message =
      js_sys::Reflect::get(
        &value,
        &JsValue::from_str("message")
      )
      .ok()
      .and_then(|raw| raw.as_string())
      .or_else(|| value.as_string())
      .unwrap_or_else(|| {
        format!("{value:?}")
      });

    Self {
      code,
      message
    }
  }

  fn from_decode(
    error: serde_wasm_bindgen::Error
  ) -> Self {
    Self {
      code:    None,
      message: error.to_string()
    }
  }
}

/// Owned auth-state subscription.
/// Dropping it without `close` leaks
/// the remote listener, so the owner
/// always closes in its teardown path.
pub struct AuthSubscription {
  unsubscribe: js_sys::Function,
  _on_change:  Closure<
    dyn FnMut(JsValue)
  >
}

impl AuthSubscription {
  pub fn close(&self) {
    if let Err(error) = self
      .unsubscribe
      .call0(&JsValue::NULL)
    {
      tracing::warn!(
        ?error,
        "auth unsubscribe failed"
      );
    }
  }
}

pub fn subscribe_auth(
  on_change: Callback<
    Option<SessionUser>
  >
) -> AuthSubscription {
  let handler: Closure<
    dyn FnMut(JsValue)
  > = Closure::new(
    move |value: JsValue| {
      let user = if value.is_null()
        || value.is_undefined()
      {
        None
      } else {
        match serde_wasm_bindgen::from_value::<SessionUser>(value) {
          | Ok(user) => Some(user),
          | Err(error) => {
            tracing::error!(%error, "failed decoding auth user");
            None
          }
        }
      };
      on_change.emit(user);
    }
  );

  let unsubscribe =
    js_auth_subscribe(&handler);

  AuthSubscription {
    unsubscribe,
    _on_change: handler
  }
}

pub async fn sign_in(
  email: &str,
  password: &str
) -> Result<(), ServiceError> {
  js_auth_sign_in(email, password)
    .await
    .map(|_credential| ())
    .map_err(ServiceError::from_js)
}

pub async fn sign_up(
  email: &str,
  password: &str
) -> Result<(), ServiceError> {
  js_auth_sign_up(email, password)
    .await
    .map(|_credential| ())
    .map_err(ServiceError::from_js)
}

pub async fn sign_out()
-> Result<(), ServiceError> {
  js_auth_sign_out()
    .await
    .map(|_| ())
    .map_err(ServiceError::from_js)
}

/// Owned live-query handle; one per
/// repository instance at a time.
pub struct TaskSubscription {
  unsubscribe:  js_sys::Function,
  _on_snapshot: Closure<
    dyn FnMut(JsValue)
  >,
  _on_error:    Closure<
    dyn FnMut(JsValue)
  >
}

impl TaskSubscription {
  pub fn close(&self) {
    if let Err(error) = self
      .unsubscribe
      .call0(&JsValue::NULL)
    {
      tracing::warn!(
        ?error,
        "task unsubscribe failed"
      );
    }
  }
}

pub fn subscribe_tasks(
  owner_id: &str,
  on_snapshot: Callback<Vec<Task>>,
  on_error: Callback<ServiceError>
) -> TaskSubscription {
  let snapshot_error =
    on_error.clone();
  let snapshot_handler: Closure<
    dyn FnMut(JsValue)
  > = Closure::new(
    move |value: JsValue| {
      match serde_wasm_bindgen::from_value::<Vec<Task>>(value) {
        | Ok(tasks) => {
          on_snapshot.emit(tasks)
        }
        | Err(error) => {
          snapshot_error.emit(
            ServiceError::from_decode(
              error
            )
          )
        }
      }
    }
  );

  let error_handler: Closure<
    dyn FnMut(JsValue)
  > = Closure::new(
    move |value: JsValue| {
      on_error.emit(
        ServiceError::from_js(value)
      );
    }
  );

  let unsubscribe = js_tasks_subscribe(
    owner_id,
    &snapshot_handler,
    &error_handler
  );

  TaskSubscription {
    unsubscribe,
    _on_snapshot: snapshot_handler,
    _on_error: error_handler
  }
}

pub async fn create_task(
  record: &CreateTask
) -> Result<(), ServiceError> {
  let payload =
    serde_wasm_bindgen::to_value(
      record
    )
    .map_err(ServiceError::from_decode)?;

  js_task_create(payload)
    .await
    .map(|_doc_ref| ())
    .map_err(ServiceError::from_js)
}

pub async fn update_task(
  id: &str,
  patch: &TaskPatch
) -> Result<(), ServiceError> {
  let payload =
    serde_wasm_bindgen::to_value(
      patch
    )
    .map_err(ServiceError::from_decode)?;

  js_task_update(id, payload)
    .await
    .map(|_| ())
    .map_err(ServiceError::from_js)
}

pub async fn delete_task(
  id: &str
) -> Result<(), ServiceError> {
  js_task_delete(id)
    .await
    .map(|_| ())
    .map_err(ServiceError::from_js)
}
