use std::fmt;

pub const INVALID_CREDENTIALS_MESSAGE:
  &str = "Incorrect email or password.";
pub const TOO_MANY_ATTEMPTS_MESSAGE:
  &str = "Too many attempts. Please \
          try again later.";

/// Task repository failures. Every
/// operation kind maps to one fixed
/// user-facing message; the underlying
/// service error is logged, never
/// shown.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TaskOpError {
  Unauthenticated,
  Add,
  Update,
  Delete,
  Toggle,
  Subscribe
}

impl TaskOpError {
  pub fn user_message(
    self
  ) -> &'static str {
    match self {
      | Self::Unauthenticated => {
        "You must be signed in to \
         add tasks."
      }
      | Self::Add => {
        "Failed to add task."
      }
      | Self::Update => {
        "Failed to update task."
      }
      | Self::Delete => {
        "Failed to delete task."
      }
      | Self::Toggle => {
        "Failed to update task \
         status."
      }
      | Self::Subscribe => {
        "Failed to load tasks."
      }
    }
  }
}

impl fmt::Display for TaskOpError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.user_message())
  }
}

impl std::error::Error for TaskOpError {}

/// Rewrites identity-service sign-in
/// failures: credential-type codes and
/// rate limiting get friendly
/// messages, everything else surfaces
/// the service's own message.
pub fn translate_auth_error(
  code: Option<&str>,
  message: &str
) -> String {
  match code.unwrap_or_default() {
    | "auth/invalid-credential"
    | "auth/invalid-login-credentials"
    | "auth/wrong-password"
    | "auth/user-not-found" => {
      INVALID_CREDENTIALS_MESSAGE
        .to_string()
    }
    | "auth/too-many-requests" => {
      TOO_MANY_ATTEMPTS_MESSAGE
        .to_string()
    }
    | _ => {
      let trimmed = message.trim();
      if trimmed.is_empty() {
        "Authentication failed."
          .to_string()
      } else {
        trimmed.to_string()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    INVALID_CREDENTIALS_MESSAGE,
    TOO_MANY_ATTEMPTS_MESSAGE,
    TaskOpError,
    translate_auth_error
  };

  #[test]
  fn credential_codes_get_friendly_message()
   {
    for code in [
      "auth/invalid-credential",
      "auth/wrong-password",
      "auth/user-not-found",
    ] {
      assert_eq!(
        translate_auth_error(
          Some(code),
          "Firebase: Error (irrelevant)."
        ),
        INVALID_CREDENTIALS_MESSAGE
      );
    }
  }

  #[test]
  fn rate_limit_gets_friendly_message()
  {
    assert_eq!(
      translate_auth_error(
        Some("auth/too-many-requests"),
        "blocked"
      ),
      TOO_MANY_ATTEMPTS_MESSAGE
    );
  }

  #[test]
  fn other_failures_surface_verbatim()
  {
    assert_eq!(
      translate_auth_error(
        Some(
          "auth/network-request-failed"
        ),
        "A network error has occurred."
      ),
      "A network error has occurred."
    );
    assert_eq!(
      translate_auth_error(
        None,
        "Service unavailable"
      ),
      "Service unavailable"
    );
  }

  #[test]
  fn blank_message_gets_fallback() {
    assert_eq!(
      translate_auth_error(None, "  "),
      "Authentication failed."
    );
  }

  #[test]
  fn every_operation_has_a_fixed_message()
   {
    let unique: std::collections::BTreeSet<
      &str
    > = [
      TaskOpError::Unauthenticated,
      TaskOpError::Add,
      TaskOpError::Update,
      TaskOpError::Delete,
      TaskOpError::Toggle,
      TaskOpError::Subscribe,
    ]
    .into_iter()
    .map(TaskOpError::user_message)
    .collect();

    assert_eq!(unique.len(), 6);
  }
}
