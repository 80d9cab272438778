pub mod session_viewmodel;
pub mod login_viewmodel;
pub mod register_viewmodel;
pub mod payment_viewmodel;
pub mod ask_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use login_viewmodel::LoginViewModel;
pub use register_viewmodel::{RegisterForm, RegisterViewModel};
pub use payment_viewmodel::{PaymentForm, PaymentViewModel};
pub use ask_viewmodel::AskViewModel;
