use tacks_core::filter::{
  StatusFilter,
  TaskFilter
};
use tacks_core::task::{
  Category,
  Priority
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub filter:    TaskFilter,
  pub on_change: Callback<TaskFilter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let on_search = {
    let filter = props.filter.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_change.emit(TaskFilter {
          search: input.value(),
          ..filter.clone()
        });
      }
    )
  };

  let on_status = {
    let filter = props.filter.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(select) =
          e.target_dyn_into::<
            HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "status filter event had \
             non-select target"
          );
          return;
        };
        if let Some(status) =
          StatusFilter::from_key(
            &select.value()
          )
        {
          on_change.emit(TaskFilter {
            status,
            ..filter.clone()
          });
        }
      }
    )
  };

  let on_category = {
    let filter = props.filter.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(select) =
          e.target_dyn_into::<
            HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "category filter event \
             had non-select target"
          );
          return;
        };
        on_change.emit(TaskFilter {
          category:
            Category::from_key(
              &select.value()
            ),
          ..filter.clone()
        });
      }
    )
  };

  let on_priority = {
    let filter = props.filter.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(select) =
          e.target_dyn_into::<
            HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "priority filter event \
             had non-select target"
          );
          return;
        };
        on_change.emit(TaskFilter {
          priority:
            Priority::from_key(
              &select.value()
            ),
          ..filter.clone()
        });
      }
    )
  };

  let category_value = props
    .filter
    .category
    .map(Category::as_key)
    .unwrap_or("all");
  let priority_value = props
    .filter
    .priority
    .map(Priority::as_key)
    .unwrap_or("all");

  html! {
      <div class="filter-bar">
          <input
              class="search"
              type="search"
              placeholder="Search tasks…"
              value={props.filter.search.clone()}
              oninput={on_search}
          />
          <select value={props.filter.status.as_key()} onchange={on_status}>
              {
                  for StatusFilter::all().into_iter().map(|status| html! {
                      <option
                          value={status.as_key()}
                          selected={props.filter.status == status}
                      >
                          { status.label() }
                      </option>
                  })
              }
          </select>
          <select value={category_value} onchange={on_category}>
              <option value="all" selected={props.filter.category.is_none()}>{ "All categories" }</option>
              {
                  for Category::all().into_iter().map(|category| html! {
                      <option
                          value={category.as_key()}
                          selected={props.filter.category == Some(category)}
                      >
                          { category.label() }
                      </option>
                  })
              }
          </select>
          <select value={priority_value} onchange={on_priority}>
              <option value="all" selected={props.filter.priority.is_none()}>{ "All priorities" }</option>
              {
                  for Priority::all().into_iter().map(|priority| html! {
                      <option
                          value={priority.as_key()}
                          selected={props.filter.priority == Some(priority)}
                      >
                          { priority.label() }
                      </option>
                  })
              }
          </select>
      </div>
  }
}
