pub mod auth;
pub mod registration;
pub mod payment;
pub mod ask;
pub mod route;

pub use auth::{AuthResult, Credentials, User};
pub use registration::RegisterRequest;
pub use payment::{PaymentData, PaymentRequest, PaymentResponse};
pub use ask::{AskRequest, AskResponse, ChatMessage, ChatRole};
pub use route::{Destination, Route};
