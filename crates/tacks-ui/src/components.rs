mod confirm_modal;
mod filter_bar;
mod login_form;
mod register_form;
mod task_card;
mod task_form;
mod task_list;
mod toast;

pub use confirm_modal::{
  ConfirmModal,
  ConfirmPrompt
};
pub use filter_bar::FilterBar;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use toast::{
  Notice,
  NoticeKind,
  ToastBanner
};
