use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeKind {
  Success,
  Error
}

/// The transient notification shown
/// after a mutating action. The
/// dashboard keeps at most one alive.
#[derive(Clone, PartialEq)]
pub struct Notice {
  pub message: String,
  pub kind:    NoticeKind
}

impl Notice {
  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self {
      message: message.into(),
      kind:    NoticeKind::Success
    }
  }

  pub fn error(
    message: impl Into<String>
  ) -> Self {
    Self {
      message: message.into(),
      kind:    NoticeKind::Error
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct ToastBannerProps {
  pub notice: Option<Notice>
}

#[function_component(ToastBanner)]
pub fn toast_banner(
  props: &ToastBannerProps
) -> Html {
  let Some(notice) = &props.notice
  else {
    return html! {};
  };

  let class = match notice.kind {
    | NoticeKind::Success => {
      "toast success"
    }
    | NoticeKind::Error => {
      "toast error"
    }
  };

  html! {
      <div class={class} role="status">
          { &notice.message }
      </div>
  }
}
