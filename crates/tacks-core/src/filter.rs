use tracing::trace;

use crate::task::{
  Category,
  Priority,
  Task
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum StatusFilter {
  All,
  Active,
  Completed
}

impl Default for StatusFilter {
  fn default() -> Self {
    Self::All
  }
}

impl StatusFilter {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::Active,
      Self::Completed
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "all" => Some(Self::All),
      | "active" => Some(Self::Active),
      | "completed" => {
        Some(Self::Completed)
      }
      | _ => None
    }
  }
}

/// Transient dashboard filter state.
/// `None` means "all" for category and
/// priority.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TaskFilter {
  pub status:   StatusFilter,
  pub category: Option<Category>,
  pub priority: Option<Priority>,
  pub search:   String
}

impl TaskFilter {
  pub fn matches(
    &self,
    task: &Task
  ) -> bool {
    let query = self
      .search
      .trim()
      .to_ascii_lowercase();

    // A non-empty search term matches
    // on title or description only and
    // skips the structured predicates
    // entirely; the shipped behavior,
    // kept as-is.
    if !query.is_empty() {
      let title_match = task
        .title
        .to_ascii_lowercase()
        .contains(&query);
      let description_match = task
        .description
        .to_ascii_lowercase()
        .contains(&query);
      return title_match
        || description_match;
    }

    let status_match =
      match self.status {
        | StatusFilter::All => true,
        | StatusFilter::Active => {
          !task.completed
        }
        | StatusFilter::Completed => {
          task.completed
        }
      };

    let category_match =
      match self.category {
        | Some(category) => {
          task.category == category
        }
        | None => true
      };

    let priority_match =
      match self.priority {
        | Some(priority) => {
          task.priority == priority
        }
        | None => true
      };

    status_match
      && category_match
      && priority_match
  }
}

/// Pure view of the task collection:
/// a fresh vector, input untouched,
/// relative order preserved.
pub fn visible_tasks(
  tasks: &[Task],
  filter: &TaskFilter
) -> Vec<Task> {
  let visible: Vec<Task> = tasks
    .iter()
    .filter(|task| {
      filter.matches(task)
    })
    .cloned()
    .collect();

  trace!(
    total = tasks.len(),
    visible = visible.len(),
    "applied task filter"
  );

  visible
}

#[cfg(test)]
mod tests {
  use super::{
    StatusFilter,
    TaskFilter,
    visible_tasks
  };
  use crate::task::{
    Category,
    Priority,
    Task
  };

  fn task(
    id: &str,
    title: &str,
    category: Category,
    priority: Priority,
    completed: bool
  ) -> Task {
    Task {
      id: id.to_string(),
      title: title.to_string(),
      description: format!(
        "details for {title}"
      ),
      category,
      priority,
      due_date: "2026-08-10"
        .to_string(),
      completed,
      owner_id: "u-1".to_string()
    }
  }

  fn sample() -> Vec<Task> {
    vec![
      task(
        "1",
        "Pay rent",
        Category::Personal,
        Priority::High,
        false
      ),
      task(
        "2",
        "Quarterly report",
        Category::Work,
        Priority::Medium,
        true
      ),
      task(
        "3",
        "Morning run",
        Category::Health,
        Priority::Low,
        false
      ),
    ]
  }

  #[test]
  fn structured_predicates_are_anded()
  {
    let tasks = sample();
    let filter = TaskFilter {
      status: StatusFilter::Active,
      category: Some(
        Category::Health
      ),
      priority: Some(Priority::Low),
      search: String::new()
    };

    let visible =
      visible_tasks(&tasks, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "3");

    let contradiction = TaskFilter {
      status: StatusFilter::Completed,
      category: Some(
        Category::Health
      ),
      ..TaskFilter::default()
    };
    assert!(
      visible_tasks(
        &tasks,
        &contradiction
      )
      .is_empty()
    );
  }

  #[test]
  fn search_is_case_insensitive_and_bypasses_other_predicates()
   {
    let tasks = sample();
    // Category excludes task 2, but a
    // matching search term still
    // returns it.
    let filter = TaskFilter {
      status: StatusFilter::Active,
      category: Some(
        Category::Personal
      ),
      priority: Some(Priority::Low),
      search: "QUARTERLY".to_string()
    };

    let visible =
      visible_tasks(&tasks, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
  }

  #[test]
  fn search_matches_description_too()
  {
    let tasks = sample();
    let filter = TaskFilter {
      search: "details for morning"
        .to_string(),
      ..TaskFilter::default()
    };

    let visible =
      visible_tasks(&tasks, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "3");
  }

  #[test]
  fn output_is_ordered_subset_and_idempotent()
   {
    let tasks = sample();
    let filter = TaskFilter {
      status: StatusFilter::Active,
      ..TaskFilter::default()
    };

    let once =
      visible_tasks(&tasks, &filter);
    assert_eq!(once.len(), 2);
    assert_eq!(once[0].id, "1");
    assert_eq!(once[1].id, "3");

    let twice =
      visible_tasks(&once, &filter);
    assert_eq!(once, twice);

    // Input untouched.
    assert_eq!(tasks.len(), 3);
  }

  #[test]
  fn default_filter_passes_everything()
  {
    let tasks = sample();
    let visible = visible_tasks(
      &tasks,
      &TaskFilter::default()
    );
    assert_eq!(visible, tasks);
  }

  #[test]
  fn blank_search_is_ignored() {
    let tasks = sample();
    let filter = TaskFilter {
      status: StatusFilter::Completed,
      search: "   ".to_string(),
      ..TaskFilter::default()
    };

    let visible =
      visible_tasks(&tasks, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
  }
}
