use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

/// Everything the generic yes/no
/// dialog needs; the caller fills it
/// per destructive action.
#[derive(Clone, PartialEq)]
pub struct ConfirmPrompt {
  pub title:         String,
  pub message:       String,
  pub confirm_label: String,
  pub cancel_label:  String,
  pub danger:        bool
}

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
  pub prompt:     Option<ConfirmPrompt>,
  pub on_confirm: Callback<MouseEvent>,
  pub on_cancel:  Callback<MouseEvent>
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(
  props: &ConfirmModalProps
) -> Html {
  let Some(prompt) = &props.prompt
  else {
    return html! {};
  };

  let confirm_class = if prompt.danger
  {
    "btn danger"
  } else {
    "btn ok"
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_cancel.clone()}>
          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ &prompt.title }</div>
              <div class="content">
                  { &prompt.message }
              </div>
              <div class="footer">
                  <button
                      class="btn"
                      type="button"
                      onclick={props.on_cancel.clone()}
                  >
                      { &prompt.cancel_label }
                  </button>
                  <button
                      class={confirm_class}
                      type="button"
                      onclick={props.on_confirm.clone()}
                  >
                      { &prompt.confirm_label }
                  </button>
              </div>
          </div>
      </div>
  }
}
