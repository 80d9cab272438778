pub mod transport;
pub mod api_client;
pub mod auth_service;
pub mod payment_service;
pub mod ask_service;
pub mod redirect_policy;

pub use api_client::ApiClient;
pub use transport::{GlooTransport, HttpTransport};
pub use redirect_policy::decide;
