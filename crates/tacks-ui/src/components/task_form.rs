use tacks_core::task::{
  Category,
  Priority,
  TaskDraft
};
use tacks_core::validate::validate_new_task;
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub busy:      bool,
  pub on_create: Callback<TaskDraft>,
  pub on_cancel: Callback<MouseEvent>
}

/// Creation form. Validation runs
/// here, before the draft ever leaves
/// the component; a rejected draft
/// never reaches the network.
#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let title = use_state(String::new);
  let description =
    use_state(String::new);
  let category = use_state(
    || Category::Personal
  );
  let priority =
    use_state(|| Priority::Medium);
  let due_date =
    use_state(String::new);
  let form_error = use_state(
    || None::<&'static str>
  );

  let on_title = {
    let title = title.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        title.set(input.value());
      }
    )
  };

  let on_description = {
    let description =
      description.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlTextAreaElement =
          e.target_unchecked_into();
        description
          .set(input.value());
      }
    )
  };

  let on_category = {
    let category = category.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: HtmlSelectElement =
          e.target_unchecked_into();
        if let Some(value) =
          Category::from_key(
            &select.value()
          )
        {
          category.set(value);
        }
      }
    )
  };

  let on_priority = {
    let priority = priority.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: HtmlSelectElement =
          e.target_unchecked_into();
        if let Some(value) =
          Priority::from_key(
            &select.value()
          )
        {
          priority.set(value);
        }
      }
    )
  };

  let on_due_date = {
    let due_date = due_date.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        due_date.set(input.value());
      }
    )
  };

  let onsubmit = {
    let title = title.clone();
    let description =
      description.clone();
    let category = category.clone();
    let priority = priority.clone();
    let due_date = due_date.clone();
    let form_error =
      form_error.clone();
    let on_create =
      props.on_create.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();

        let draft = TaskDraft {
          title: (*title).clone(),
          description: (*description)
            .clone(),
          category: *category,
          priority: *priority,
          due_date: (*due_date)
            .clone()
        };

        if let Err(invalid) =
          validate_new_task(&draft)
        {
          tracing::debug!(
            %invalid,
            "rejected task draft"
          );
          form_error.set(
            Some(invalid.message())
          );
          return;
        }

        form_error.set(None);
        on_create.emit(draft);
      }
    )
  };

  html! {
      <form class="task-form panel" {onsubmit}>
          <div class="header">{ "New task" }</div>
          {
              if let Some(message) = *form_error {
                  html! { <div class="form-error">{ message }</div> }
              } else {
                  html! {}
              }
          }
          <label class="field">
              { "Title" }
              <input
                  type="text"
                  value={(*title).clone()}
                  oninput={on_title}
                  placeholder="What needs doing?"
              />
          </label>
          <label class="field">
              { "Description" }
              <textarea
                  value={(*description).clone()}
                  oninput={on_description}
                  placeholder="Add enough detail to pick it up later"
              />
          </label>
          <div class="field-row">
              <label class="field">
                  { "Category" }
                  <select onchange={on_category}>
                      {
                          for Category::all().into_iter().map(|value| html! {
                              <option
                                  value={value.as_key()}
                                  selected={*category == value}
                              >
                                  { value.label() }
                              </option>
                          })
                      }
                  </select>
              </label>
              <label class="field">
                  { "Priority" }
                  <select onchange={on_priority}>
                      {
                          for Priority::all().into_iter().map(|value| html! {
                              <option
                                  value={value.as_key()}
                                  selected={*priority == value}
                              >
                                  { value.label() }
                              </option>
                          })
                      }
                  </select>
              </label>
              <label class="field">
                  { "Due date" }
                  <input
                      type="date"
                      value={(*due_date).clone()}
                      oninput={on_due_date}
                  />
              </label>
          </div>
          <div class="footer">
              <button
                  class="btn"
                  type="button"
                  onclick={props.on_cancel.clone()}
              >
                  { "Cancel" }
              </button>
              <button
                  class="btn ok"
                  type="submit"
                  disabled={props.busy}
              >
                  { if props.busy { "Adding…" } else { "Add task" } }
              </button>
          </div>
      </form>
  }
}
