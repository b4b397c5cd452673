//! Small self-contained page widgets.

pub mod back_to_top;
pub mod counter;
pub mod modal;
pub mod toast;
pub mod validation;

pub use back_to_top::BackToTop;
pub use counter::CountUp;
pub use modal::{Modal, ModalResult};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use validation::{Field, Hint, LoginForm, RegisterForm, ResetPasswordForm, hint_for};
