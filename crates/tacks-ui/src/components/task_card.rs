use tacks_core::task::{
  Category,
  Priority,
  Task,
  TaskPatch
};
use tacks_core::validate::validate_task_edit;
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:      Task,
  pub on_toggle:
    Callback<(String, bool)>,
  pub on_save:
    Callback<(String, TaskPatch)>,
  pub on_delete: Callback<Task>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let editing = use_state(|| false);
  let edit_title =
    use_state(String::new);
  let edit_description =
    use_state(String::new);
  let edit_category = use_state(
    || Category::Personal
  );
  let edit_priority =
    use_state(|| Priority::Medium);
  let edit_due_date =
    use_state(String::new);
  let edit_error = use_state(
    || None::<&'static str>
  );

  let task = &props.task;
  let id = task.id.clone();

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = id.clone();
    let next = !task.completed;
    Callback::from(move |_| {
      on_toggle
        .emit((id.clone(), next));
    })
  };

  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let task = task.clone();
    Callback::from(move |_| {
      on_delete.emit(task.clone());
    })
  };

  let start_editing = {
    let editing = editing.clone();
    let edit_title =
      edit_title.clone();
    let edit_description =
      edit_description.clone();
    let edit_category =
      edit_category.clone();
    let edit_priority =
      edit_priority.clone();
    let edit_due_date =
      edit_due_date.clone();
    let edit_error =
      edit_error.clone();
    let task = task.clone();
    Callback::from(move |_| {
      edit_title
        .set(task.title.clone());
      edit_description.set(
        task.description.clone()
      );
      edit_category
        .set(task.category);
      edit_priority
        .set(task.priority);
      edit_due_date
        .set(task.due_date.clone());
      edit_error.set(None);
      editing.set(true);
    })
  };

  let cancel_editing = {
    let editing = editing.clone();
    Callback::from(move |_| {
      editing.set(false);
    })
  };

  let save_edit = {
    let editing = editing.clone();
    let edit_title =
      edit_title.clone();
    let edit_description =
      edit_description.clone();
    let edit_category =
      edit_category.clone();
    let edit_priority =
      edit_priority.clone();
    let edit_due_date =
      edit_due_date.clone();
    let edit_error =
      edit_error.clone();
    let on_save =
      props.on_save.clone();
    let id = id.clone();
    Callback::from(move |_| {
      if let Err(invalid) =
        validate_task_edit(
          &edit_title,
          &edit_description
        )
      {
        edit_error.set(
          Some(invalid.message())
        );
        return;
      }

      let patch = TaskPatch {
        title: Some(
          edit_title
            .trim()
            .to_string()
        ),
        description: Some(
          edit_description
            .trim()
            .to_string()
        ),
        category: Some(
          *edit_category
        ),
        priority: Some(
          *edit_priority
        ),
        due_date: Some(
          (*edit_due_date).clone()
        ),
        completed: None
      };

      edit_error.set(None);
      editing.set(false);
      on_save
        .emit((id.clone(), patch));
    })
  };

  let on_edit_title = {
    let edit_title =
      edit_title.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        edit_title.set(input.value());
      }
    )
  };

  let on_edit_description = {
    let edit_description =
      edit_description.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlTextAreaElement =
          e.target_unchecked_into();
        edit_description
          .set(input.value());
      }
    )
  };

  let on_edit_category = {
    let edit_category =
      edit_category.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: HtmlSelectElement =
          e.target_unchecked_into();
        if let Some(value) =
          Category::from_key(
            &select.value()
          )
        {
          edit_category.set(value);
        }
      }
    )
  };

  let on_edit_priority = {
    let edit_priority =
      edit_priority.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: HtmlSelectElement =
          e.target_unchecked_into();
        if let Some(value) =
          Priority::from_key(
            &select.value()
          )
        {
          edit_priority.set(value);
        }
      }
    )
  };

  let on_edit_due_date = {
    let edit_due_date =
      edit_due_date.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        edit_due_date
          .set(input.value());
      }
    )
  };

  let priority_class =
    match task.priority {
      | Priority::Low => {
        "badge priority-low"
      }
      | Priority::Medium => {
        "badge priority-medium"
      }
      | Priority::High => {
        "badge priority-high"
      }
    };

  if *editing {
    return html! {
        <div class="task-card editing">
            {
                if let Some(message) = *edit_error {
                    html! { <div class="form-error">{ message }</div> }
                } else {
                    html! {}
                }
            }
            <input
                type="text"
                value={(*edit_title).clone()}
                oninput={on_edit_title}
            />
            <textarea
                value={(*edit_description).clone()}
                oninput={on_edit_description}
            />
            <div class="field-row">
                <select onchange={on_edit_category}>
                    {
                        for Category::all().into_iter().map(|value| html! {
                            <option
                                value={value.as_key()}
                                selected={*edit_category == value}
                            >
                                { value.label() }
                            </option>
                        })
                    }
                </select>
                <select onchange={on_edit_priority}>
                    {
                        for Priority::all().into_iter().map(|value| html! {
                            <option
                                value={value.as_key()}
                                selected={*edit_priority == value}
                            >
                                { value.label() }
                            </option>
                        })
                    }
                </select>
                <input
                    type="date"
                    value={(*edit_due_date).clone()}
                    oninput={on_edit_due_date}
                />
            </div>
            <div class="actions">
                <button class="btn" onclick={cancel_editing}>{ "Cancel" }</button>
                <button class="btn ok" onclick={save_edit}>{ "Save" }</button>
            </div>
        </div>
    };
  }

  html! {
      <div class={classes!("task-card", task.completed.then_some("completed"))}>
          <label class="toggle">
              <input
                  type="checkbox"
                  checked={task.completed}
                  onchange={on_toggle}
              />
          </label>
          <div class="body">
              <div class="title">{ &task.title }</div>
              <div class="description">{ &task.description }</div>
              <div class="meta">
                  <span class="badge">{ task.category.label() }</span>
                  <span class={priority_class}>{ task.priority.label() }</span>
                  {
                      if task.due_date.is_empty() {
                          html! {}
                      } else {
                          html! { <span class="badge">{ format!("due {}", task.due_date) }</span> }
                      }
                  }
              </div>
          </div>
          <div class="actions">
              <button class="btn" onclick={start_editing}>{ "Edit" }</button>
              <button class="btn danger" onclick={on_delete}>{ "Delete" }</button>
          </div>
      </div>
  }
}
