use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Work,
  Personal,
  Shopping,
  Health,
  Learning,
  Other
}

impl Default for Category {
  fn default() -> Self {
    Self::Personal
  }
}

impl Category {
  pub fn all() -> [Self; 6] {
    [
      Self::Work,
      Self::Personal,
      Self::Shopping,
      Self::Health,
      Self::Learning,
      Self::Other
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Work => "work",
      | Self::Personal => "personal",
      | Self::Shopping => "shopping",
      | Self::Health => "health",
      | Self::Learning => "learning",
      | Self::Other => "other"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Work => "Work",
      | Self::Personal => "Personal",
      | Self::Shopping => "Shopping",
      | Self::Health => "Health",
      | Self::Learning => "Learning",
      | Self::Other => "Other"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "work" => Some(Self::Work),
      | "personal" => {
        Some(Self::Personal)
      }
      | "shopping" => {
        Some(Self::Shopping)
      }
      | "health" => Some(Self::Health),
      | "learning" => {
        Some(Self::Learning)
      }
      | "other" => Some(Self::Other),
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  Medium,
  High
}

impl Default for Priority {
  fn default() -> Self {
    Self::Medium
  }
}

impl Priority {
  pub fn all() -> [Self; 3] {
    [
      Self::Low,
      Self::Medium,
      Self::High
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "low" => Some(Self::Low),
      | "medium" => Some(Self::Medium),
      | "high" => Some(Self::High),
      | _ => None
    }
  }
}

/// A task document as stored by the
/// database. Fields the database may
/// omit decode to their defaults so
/// older documents keep loading.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  #[serde(default)]
  pub id:          String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub category:    Category,
  #[serde(default)]
  pub priority:    Priority,
  #[serde(default)]
  pub due_date:    String,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub owner_id:    String
}

/// Caller-supplied fields for a new
/// task, before defaults are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub category:    Category,
  pub priority:    Priority,
  pub due_date:    String
}

impl Default for TaskDraft {
  fn default() -> Self {
    Self {
      title:       String::new(),
      description: String::new(),
      category:    Category::Personal,
      priority:    Priority::Medium,
      due_date:    String::new()
    }
  }
}

/// The record submitted to the
/// database on creation. The database
/// assigns the identifier.
#[derive(
  Debug, Clone, Serialize, PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
  pub title:       String,
  pub description: String,
  pub category:    Category,
  pub priority:    Priority,
  pub due_date:    String,
  pub completed:   bool,
  pub owner_id:    String
}

impl CreateTask {
  pub fn from_draft(
    draft: TaskDraft,
    owner_uid: &str
  ) -> Self {
    Self {
      title:       draft
        .title
        .trim()
        .to_string(),
      description: draft
        .description
        .trim()
        .to_string(),
      category:    draft.category,
      priority:    draft.priority,
      due_date:    draft
        .due_date
        .trim()
        .to_string(),
      completed:   false,
      owner_id:    owner_uid.to_string()
    }
  }
}

/// Partial update. `None` fields are
/// left out of the serialized object
/// so the database merges instead of
/// overwriting.
#[derive(
  Debug,
  Clone,
  Serialize,
  Default,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub title:       Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub category:    Option<Category>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub priority:    Option<Priority>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date:    Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub completed:   Option<bool>
}

#[cfg(test)]
mod tests {
  use super::{
    Category,
    CreateTask,
    Priority,
    Task,
    TaskDraft,
    TaskPatch
  };

  #[test]
  fn sparse_document_decodes_with_defaults()
   {
    let raw = r#"{
      "id": "abc123",
      "title": "Water plants",
      "description": "All of them",
      "ownerId": "u-1"
    }"#;

    let task: Task =
      serde_json::from_str(raw)
        .expect("decode task");

    assert_eq!(task.id, "abc123");
    assert_eq!(
      task.category,
      Category::Personal
    );
    assert_eq!(
      task.priority,
      Priority::Medium
    );
    assert!(!task.completed);
    assert_eq!(task.owner_id, "u-1");
  }

  #[test]
  fn from_draft_merges_defaults_and_owner()
   {
    let draft = TaskDraft {
      title:       "  Ship release  "
        .to_string(),
      description: "Tag, build and \
                    publish the binaries"
        .to_string(),
      category:    Category::Work,
      priority:    Priority::High,
      due_date:    "2026-08-14"
        .to_string()
    };

    let record = CreateTask::from_draft(
      draft, "user-9"
    );

    assert_eq!(
      record.title,
      "Ship release"
    );
    assert!(!record.completed);
    assert_eq!(
      record.owner_id,
      "user-9"
    );
  }

  #[test]
  fn patch_serializes_only_set_fields()
  {
    let patch = TaskPatch {
      completed: Some(true),
      ..TaskPatch::default()
    };

    let value =
      serde_json::to_value(&patch)
        .expect("encode patch");
    let object = value
      .as_object()
      .expect("patch object");

    assert_eq!(object.len(), 1);
    assert_eq!(
      object.get("completed"),
      Some(&serde_json::json!(true))
    );
  }

  #[test]
  fn category_keys_round_trip() {
    for category in Category::all() {
      assert_eq!(
        Category::from_key(
          category.as_key()
        ),
        Some(category)
      );
    }
    assert_eq!(
      Category::from_key("garden"),
      None
    );
  }
}
