pub mod ask_view;
pub mod dashboard_view;
pub mod login_view;
pub mod onboarding_view;
pub mod payment_view;
pub mod register_view;
pub mod shared;

pub use ask_view::AskView;
pub use dashboard_view::DashboardView;
pub use login_view::LoginView;
pub use onboarding_view::OnboardingView;
pub use payment_view::PaymentView;
pub use register_view::RegisterView;
