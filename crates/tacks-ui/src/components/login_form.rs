use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
  pub busy:      bool,
  pub error:     Option<String>,
  pub on_submit:
    Callback<(String, String)>
}

#[function_component(LoginForm)]
pub fn login_form(
  props: &LoginFormProps
) -> Html {
  let email = use_state(String::new);
  let password =
    use_state(String::new);

  let on_email = {
    let email = email.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        email.set(input.value());
      }
    )
  };

  let on_password = {
    let password = password.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        password.set(input.value());
      }
    )
  };

  let onsubmit = {
    let email = email.clone();
    let password = password.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit((
          (*email).clone(),
          (*password).clone()
        ));
      }
    )
  };

  html! {
      <form class="auth-form panel" {onsubmit}>
          <div class="header">{ "Sign in" }</div>
          {
              if let Some(message) = &props.error {
                  html! { <div class="form-error">{ message }</div> }
              } else {
                  html! {}
              }
          }
          <label class="field">
              { "Email" }
              <input
                  type="email"
                  value={(*email).clone()}
                  oninput={on_email}
                  placeholder="you@example.com"
              />
          </label>
          <label class="field">
              { "Password" }
              <input
                  type="password"
                  value={(*password).clone()}
                  oninput={on_password}
              />
          </label>
          <button
              class="btn ok"
              type="submit"
              disabled={props.busy}
          >
              { if props.busy { "Signing in…" } else { "Sign in" } }
          </button>
      </form>
  }
}
