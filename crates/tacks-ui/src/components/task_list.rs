use tacks_core::task::{
  Task,
  TaskPatch
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCard;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub on_toggle:
    Callback<(String, bool)>,
  pub on_save:
    Callback<(String, TaskPatch)>,
  pub on_delete: Callback<Task>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div class="panel list">
            <div class="empty-state">
                { "No tasks to show. Add your first task to get started." }
            </div>
        </div>
    };
  }

  html! {
      <div class="panel list">
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TaskCard
                      key={task.id.clone()}
                      task={task.clone()}
                      on_toggle={props.on_toggle.clone()}
                      on_save={props.on_save.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </div>
  }
}
