use std::fmt;

use chrono::NaiveDate;

use crate::task::TaskDraft;

pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize =
  10;
pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ValidationError {
  TitleRequired,
  TitleTooShort,
  DescriptionRequired,
  DescriptionTooShort,
  DueDateRequired,
  DueDateInvalid,
  EmailRequired,
  PasswordRequired,
  PasswordTooShort,
  PasswordMismatch
}

impl ValidationError {
  pub fn message(self) -> &'static str {
    match self {
      | Self::TitleRequired => {
        "Title is required."
      }
      | Self::TitleTooShort => {
        "Title must be at least 3 \
         characters."
      }
      | Self::DescriptionRequired => {
        "Description is required."
      }
      | Self::DescriptionTooShort => {
        "Description must be at least \
         10 characters."
      }
      | Self::DueDateRequired => {
        "Due date is required."
      }
      | Self::DueDateInvalid => {
        "Please enter a valid due \
         date."
      }
      | Self::EmailRequired => {
        "Email is required."
      }
      | Self::PasswordRequired => {
        "Password is required."
      }
      | Self::PasswordTooShort => {
        "Password must be at least 6 \
         characters."
      }
      | Self::PasswordMismatch => {
        "Passwords do not match."
      }
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.message())
  }
}

impl std::error::Error
  for ValidationError
{
}

fn check_title(
  title: &str
) -> Result<(), ValidationError> {
  let trimmed = title.trim();
  if trimmed.is_empty() {
    return Err(
      ValidationError::TitleRequired
    );
  }
  if trimmed.chars().count()
    < TITLE_MIN_CHARS
  {
    return Err(
      ValidationError::TitleTooShort
    );
  }
  Ok(())
}

fn check_description(
  description: &str
) -> Result<(), ValidationError> {
  let trimmed = description.trim();
  if trimmed.is_empty() {
    return Err(
      ValidationError::DescriptionRequired
    );
  }
  if trimmed.chars().count()
    < DESCRIPTION_MIN_CHARS
  {
    return Err(
      ValidationError::DescriptionTooShort
    );
  }
  Ok(())
}

fn check_due_date(
  due_date: &str
) -> Result<(), ValidationError> {
  let trimmed = due_date.trim();
  if trimmed.is_empty() {
    return Err(
      ValidationError::DueDateRequired
    );
  }
  if NaiveDate::parse_from_str(
    trimmed, "%Y-%m-%d"
  )
  .is_err()
  {
    return Err(
      ValidationError::DueDateInvalid
    );
  }
  Ok(())
}

/// Creation rules. The due date is
/// only mandatory here; edits may
/// leave it untouched.
pub fn validate_new_task(
  draft: &TaskDraft
) -> Result<(), ValidationError> {
  check_title(&draft.title)?;
  check_description(
    &draft.description
  )?;
  check_due_date(&draft.due_date)?;
  Ok(())
}

pub fn validate_task_edit(
  title: &str,
  description: &str
) -> Result<(), ValidationError> {
  check_title(title)?;
  check_description(description)?;
  Ok(())
}

pub fn validate_credentials(
  email: &str,
  password: &str
) -> Result<(), ValidationError> {
  if email.trim().is_empty() {
    return Err(
      ValidationError::EmailRequired
    );
  }
  if password.is_empty() {
    return Err(
      ValidationError::PasswordRequired
    );
  }
  Ok(())
}

pub fn validate_registration(
  email: &str,
  password: &str,
  confirm: &str
) -> Result<(), ValidationError> {
  validate_credentials(
    email, password
  )?;
  if password.chars().count()
    < PASSWORD_MIN_CHARS
  {
    return Err(
      ValidationError::PasswordTooShort
    );
  }
  if password != confirm {
    return Err(
      ValidationError::PasswordMismatch
    );
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::{
    ValidationError,
    validate_new_task,
    validate_registration,
    validate_task_edit
  };
  use crate::task::TaskDraft;

  fn draft(
    title: &str,
    description: &str,
    due_date: &str
  ) -> TaskDraft {
    TaskDraft {
      title: title.to_string(),
      description: description
        .to_string(),
      due_date: due_date.to_string(),
      ..TaskDraft::default()
    }
  }

  #[test]
  fn accepts_iff_trimmed_lengths_hold()
  {
    let ok = draft(
      "Buy groceries",
      "Milk, eggs and flour for the \
       weekend",
      "2026-08-10"
    );
    assert!(
      validate_new_task(&ok).is_ok()
    );

    // Whitespace padding does not
    // rescue a short field.
    let short_title = draft(
      "  ab  ",
      "A long enough description",
      "2026-08-10"
    );
    assert_eq!(
      validate_new_task(&short_title),
      Err(
        ValidationError::TitleTooShort
      )
    );

    let short_description = draft(
      "Valid title",
      "  too short ",
      "2026-08-10"
    );
    assert_eq!(
      validate_new_task(
        &short_description
      ),
      Err(
        ValidationError::DescriptionTooShort
      )
    );

    let empty_title = draft(
      "   ",
      "A long enough description",
      "2026-08-10"
    );
    assert_eq!(
      validate_new_task(&empty_title),
      Err(
        ValidationError::TitleRequired
      )
    );
  }

  #[test]
  fn due_date_required_on_creation_only()
   {
    let missing = draft(
      "Valid title",
      "A long enough description",
      ""
    );
    assert_eq!(
      validate_new_task(&missing),
      Err(
        ValidationError::DueDateRequired
      )
    );

    let garbage = draft(
      "Valid title",
      "A long enough description",
      "next tuesday"
    );
    assert_eq!(
      validate_new_task(&garbage),
      Err(
        ValidationError::DueDateInvalid
      )
    );

    // Edits never look at the date.
    assert!(
      validate_task_edit(
        "Valid title",
        "A long enough description"
      )
      .is_ok()
    );
  }

  #[test]
  fn weak_password_is_rejected_with_fixed_message()
   {
    let result = validate_registration(
      "a@example.com",
      "weak",
      "weak"
    );
    assert_eq!(
      result,
      Err(
        ValidationError::PasswordTooShort
      )
    );
    assert_eq!(
      ValidationError::PasswordTooShort
        .message(),
      "Password must be at least 6 \
       characters."
    );
  }

  #[test]
  fn mismatched_passwords_are_rejected_with_fixed_message()
   {
    let result = validate_registration(
      "a@example.com",
      "password123",
      "different123"
    );
    assert_eq!(
      result,
      Err(
        ValidationError::PasswordMismatch
      )
    );
    assert_eq!(
      ValidationError::PasswordMismatch
        .message(),
      "Passwords do not match."
    );
  }

  #[test]
  fn length_check_precedes_mismatch() {
    let result = validate_registration(
      "a@example.com",
      "weak",
      "weaker"
    );
    assert_eq!(
      result,
      Err(
        ValidationError::PasswordTooShort
      )
    );
  }
}
