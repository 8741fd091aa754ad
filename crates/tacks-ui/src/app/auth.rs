use tacks_core::errors::translate_auth_error;
use tacks_core::validate::{
  validate_credentials,
  validate_registration
};
use tracing::{
  info,
  warn
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_state
};
use yew_router::prelude::Link;

use super::Route;
use crate::api;
use crate::components::{
  LoginForm,
  RegisterForm
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
  let busy = use_state(|| false);
  let error =
    use_state(|| None::<String>);

  let on_submit = {
    let busy = busy.clone();
    let error = error.clone();
    Callback::from(
      move |(email, password): (
        String,
        String
      )| {
        // Client-side checks run
        // first and skip the network
        // entirely when they fail.
        if let Err(invalid) =
          validate_credentials(
            &email, &password
          )
        {
          error.set(Some(
            invalid
              .message()
              .to_string()
          ));
          return;
        }

        busy.set(true);
        error.set(None);

        let busy = busy.clone();
        let error = error.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::sign_in(
              &email, &password
            )
            .await
            {
              | Ok(()) => {
                info!("signed in");
              }
              | Err(service) => {
                warn!(
                  code = ?service.code,
                  "sign in rejected"
                );
                error.set(Some(
                  translate_auth_error(
                    service
                      .code
                      .as_deref(),
                    &service.message
                  )
                ));
              }
            }
            busy.set(false);
          }
        );
      }
    )
  };

  html! {
      <div class="auth-page">
          <LoginForm
              busy={*busy}
              error={(*error).clone()}
              on_submit={on_submit}
          />
          <p class="auth-switch">
              { "No account yet? " }
              <Link<Route> to={Route::Register}>{ "Create one" }</Link<Route>>
          </p>
      </div>
  }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
  let busy = use_state(|| false);
  let error =
    use_state(|| None::<String>);

  let on_submit = {
    let busy = busy.clone();
    let error = error.clone();
    Callback::from(
      move |(
        email,
        password,
        confirm
      ): (
        String,
        String,
        String
      )| {
        if let Err(invalid) =
          validate_registration(
            &email, &password,
            &confirm
          )
        {
          error.set(Some(
            invalid
              .message()
              .to_string()
          ));
          return;
        }

        busy.set(true);
        error.set(None);

        let busy = busy.clone();
        let error = error.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::sign_up(
              &email, &password
            )
            .await
            {
              | Ok(()) => {
                info!(
                  "account created"
                );
              }
              | Err(service) => {
                warn!(
                  code = ?service.code,
                  "sign up rejected"
                );
                // Registration
                // failures surface
                // the service's own
                // message.
                error.set(Some(
                  service.message
                ));
              }
            }
            busy.set(false);
          }
        );
      }
    )
  };

  html! {
      <div class="auth-page">
          <RegisterForm
              busy={*busy}
              error={(*error).clone()}
              on_submit={on_submit}
          />
          <p class="auth-switch">
              { "Already registered? " }
              <Link<Route> to={Route::Login}>{ "Sign in" }</Link<Route>>
          </p>
      </div>
  }
}
