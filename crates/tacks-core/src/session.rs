use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct SessionUser {
  pub uid:   String,
  #[serde(default)]
  pub email: Option<String>
}

/// Snapshot of the identity service's
/// auth state. `loading` is true only
/// until the first notification lands;
/// after that the absence of a user
/// means signed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  pub user:    Option<SessionUser>,
  pub loading: bool
}

impl Session {
  pub fn initial() -> Self {
    Self {
      user:    None,
      loading: true
    }
  }

  pub fn resolved(
    user: Option<SessionUser>
  ) -> Self {
    Self {
      user,
      loading: false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Session,
    SessionUser
  };

  #[test]
  fn initial_session_is_loading() {
    let session = Session::initial();
    assert!(session.loading);
    assert!(session.user.is_none());
  }

  #[test]
  fn notification_clears_loading() {
    let user = SessionUser {
      uid:   "u-1".to_string(),
      email: Some(
        "a@example.com".to_string()
      )
    };

    let signed_in =
      Session::resolved(Some(user));
    assert!(!signed_in.loading);
    assert!(signed_in.user.is_some());

    let signed_out =
      Session::resolved(None);
    assert!(!signed_out.loading);
    assert!(signed_out.user.is_none());
  }
}
