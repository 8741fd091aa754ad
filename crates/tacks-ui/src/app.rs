mod auth;
mod dashboard;
mod storage;

use tacks_core::session::Session;
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Redirect,
  Routable,
  Switch
};

use self::auth::{
  LoginPage,
  RegisterPage
};
use self::dashboard::Dashboard;
use crate::session::use_session;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum ThemeMode {
  Light,
  Dark
}

impl ThemeMode {
  fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Dark",
      | Self::Dark => "Light"
    }
  }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
  #[at("/login")]
  Login,
  #[at("/register")]
  Register,
  #[at("/")]
  Home,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[function_component(App)]
pub fn app() -> Html {
  let theme = use_state(
    storage::load_theme_mode
  );
  let session = use_session();

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_| {
      let next = (*theme).next();
      storage::save_theme_mode(next);
      theme.set(next);
    })
  };

  let render = {
    let session = session.clone();
    Callback::from(
      move |route: Route| {
        switch_route(route, &session)
      }
    )
  };

  html! {
      <div class={classes!("app", theme.as_class())}>
          <header class="app-header">
              <span class="brand">{ "Tacks" }</span>
              <button class="btn" onclick={on_toggle_theme}>
                  { theme.toggle_label() }
              </button>
          </header>
          <BrowserRouter>
              <Switch<Route> render={render} />
          </BrowserRouter>
      </div>
  }
}

fn switch_route(
  route: Route,
  session: &Session
) -> Html {
  // Nothing routes until the first
  // auth notification lands; a
  // signed-in user must never flash
  // through the login page.
  if session.loading {
    return html! {
        <div class="loading-screen">{ "Loading…" }</div>
    };
  }

  match route {
    | Route::Home
    | Route::NotFound => {
      match session.user.clone() {
        | Some(user) => html! {
            <Dashboard user={user} />
        },
        | None => html! {
            <Redirect<Route> to={Route::Login} />
        }
      }
    }
    | Route::Login => {
      if session.user.is_some() {
        html! {
            <Redirect<Route> to={Route::Home} />
        }
      } else {
        html! { <LoginPage /> }
      }
    }
    | Route::Register => {
      if session.user.is_some() {
        html! {
            <Redirect<Route> to={Route::Home} />
        }
      } else {
        html! { <RegisterPage /> }
      }
    }
  }
}
