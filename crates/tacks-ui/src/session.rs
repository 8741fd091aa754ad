use tacks_core::session::{
  Session,
  SessionUser
};
use yew::{
  Callback,
  hook,
  use_effect_with,
  use_state
};

use crate::api;

/// Auth-state snapshot for the whole
/// app. Subscribes exactly once on
/// mount; every notification from the
/// identity service replaces the user
/// and clears the loading flag. The
/// handle is closed by the effect's
/// cleanup on unmount.
#[hook]
pub fn use_session() -> Session {
  let session =
    use_state(Session::initial);

  {
    let session = session.clone();
    use_effect_with((), move |_| {
      let on_change = Callback::from(
        move |user: Option<
          SessionUser
        >| {
          tracing::debug!(
            signed_in = user.is_some(),
            "auth state notification"
          );
          session.set(
            Session::resolved(user)
          );
        }
      );

      let handle =
        api::subscribe_auth(on_change);

      move || handle.close()
    });
  }

  (*session).clone()
}
